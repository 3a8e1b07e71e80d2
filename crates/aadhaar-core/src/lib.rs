//! Core library for Aadhaar card OCR processing.
//!
//! This crate provides:
//! - Field extraction from raw OCR text (ID number, name, date of birth,
//!   gender, address, postal code)
//! - Noise classification of boilerplate lines
//! - The front/back marker-phrase gate and a verification pipeline
//! - Record and configuration models

pub mod document;
pub mod error;
pub mod extract;
pub mod models;

pub use document::{DocumentGate, DocumentVerifier, GateVerdict, Side};
pub use error::{AadhaarError, DocumentError, ExtractionError, Result};
pub use extract::{AadhaarParser, ExtractionResult, LineClassifier, NoiseClassifier, RecordParser};
pub use models::record::{ExtractedRecord, Gender};
