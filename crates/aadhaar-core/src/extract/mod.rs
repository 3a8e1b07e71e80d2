//! Field extraction from raw OCR text.

mod address;
mod lines;
mod name;
mod noise;
mod parser;
pub mod rules;

pub use address::{extract_address, AddressRules};
pub use lines::segment_lines;
pub use name::extract_name;
pub use noise::{LineClassifier, NoiseClassifier, NoiseRule, BUILTIN_NOISE_PATTERNS};
pub use parser::{AadhaarParser, ExtractionResult, RecordParser};
