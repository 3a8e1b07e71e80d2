//! Aadhaar record parser combining the field matchers.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::ExtractedRecord;

use super::address::{extract_address, AddressRules};
use super::lines::segment_lines;
use super::name::extract_name;
use super::noise::{LineClassifier, NoiseClassifier};
use super::rules::{
    dates::extract_date_of_birth, gender::extract_gender, id_number::IdNumberExtractor,
    postal::extract_postal_code, FieldExtractor,
};

/// Result of record extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: ExtractedRecord,
    /// Missing fields and validation issues.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for record parsing.
pub trait RecordParser {
    /// Parse a record from raw OCR text. Never fails; absent fields stay `None`.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Heuristic Aadhaar parser.
///
/// Holds no per-call state, so one parser can serve concurrent requests.
pub struct AadhaarParser {
    /// Skip ID candidates failing the Verhoeff checksum.
    validate_checksum: bool,
    /// Address heuristics.
    address_rules: AddressRules,
    /// Noise classification used by the name and address matchers.
    classifier: Box<dyn LineClassifier + Send + Sync>,
}

impl AadhaarParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            validate_checksum: false,
            address_rules: AddressRules::default(),
            classifier: Box::new(NoiseClassifier::new()),
        }
    }

    /// Build a parser from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        if !(0.0..=1.0).contains(&config.fallback_start_ratio) {
            return Err(ExtractionError::InvalidSetting {
                setting: "fallback_start_ratio".to_string(),
                reason: format!("{} is outside 0.0 - 1.0", config.fallback_start_ratio),
            });
        }

        let classifier =
            NoiseClassifier::new().with_extra_patterns(&config.extra_noise_patterns)?;

        Ok(Self::new()
            .with_checksum_validation(config.validate_checksum)
            .with_address_rules(AddressRules {
                max_lines: config.max_address_lines,
                min_line_length: config.min_line_length,
                fallback_start_ratio: config.fallback_start_ratio,
            })
            .with_classifier(classifier))
    }

    /// Set Verhoeff checksum validation of ID numbers.
    pub fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Set the address heuristics.
    pub fn with_address_rules(mut self, rules: AddressRules) -> Self {
        self.address_rules = rules;
        self
    }

    /// Replace the noise classifier.
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: LineClassifier + Send + Sync + 'static,
    {
        self.classifier = Box::new(classifier);
        self
    }

    /// Extract the record only.
    pub fn extract_record(&self, text: &str) -> ExtractedRecord {
        let lines = segment_lines(text);
        debug!("Segmented {} lines", lines.len());

        let id_number = IdNumberExtractor::new()
            .with_validation(self.validate_checksum)
            .extract(text)
            .map(|m| m.value);

        let name = extract_name(&lines, self.classifier.as_ref());
        let address = extract_address(&lines, self.classifier.as_ref(), &self.address_rules);
        let postal_code = extract_postal_code(address.as_deref(), text);

        ExtractedRecord {
            id_number,
            name,
            date_of_birth: extract_date_of_birth(text),
            gender: extract_gender(text),
            address,
            postal_code,
        }
    }
}

impl Default for AadhaarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for AadhaarParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing Aadhaar record from {} characters of text", text.len());

        let (record, processing_time_ms) = timed(|| self.extract_record(text));

        let mut warnings: Vec<String> = record
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();
        warnings.extend(record.validate());

        debug!(
            "Extracted {} of 6 fields in {}ms",
            record.populated_fields(),
            processing_time_ms
        );

        ExtractionResult {
            record,
            warnings,
            processing_time_ms,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = std::time::Instant::now();
    let value = f();
    (value, start.elapsed().as_millis() as u64)
}

// std::time::Instant is unavailable on wasm32-unknown-unknown
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    (f(), 0)
}
