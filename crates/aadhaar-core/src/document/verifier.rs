//! Front/back verification pipeline.

use tracing::{debug, warn};

use crate::error::{AadhaarError, DocumentError};
use crate::extract::{AadhaarParser, ExtractionResult, RecordParser};
use crate::models::config::AadhaarConfig;

use super::{DocumentGate, Side};

/// Join the recognized text of both sides into one raw text.
///
/// Sides are joined with a line break so the last front line and the first
/// back line stay separate.
pub fn combine_sides(front: &str, back: &str) -> String {
    format!("{}\n{}", front, back)
}

/// Ensure both sides were supplied.
pub fn require_sides<T>(front: Option<T>, back: Option<T>) -> Result<(T, T), DocumentError> {
    match (front, back) {
        (Some(front), Some(back)) => Ok((front, back)),
        (None, _) => Err(DocumentError::MissingSide(Side::Front)),
        (_, None) => Err(DocumentError::MissingSide(Side::Back)),
    }
}

/// Runs the marker gate, the extractor and the empty-record check.
pub struct DocumentVerifier {
    gate: DocumentGate,
    parser: AadhaarParser,
    reject_empty_record: bool,
}

impl DocumentVerifier {
    pub fn new(gate: DocumentGate, parser: AadhaarParser) -> Self {
        Self {
            gate,
            parser,
            reject_empty_record: true,
        }
    }

    pub fn from_config(config: &AadhaarConfig) -> Result<Self, AadhaarError> {
        let parser = AadhaarParser::from_config(&config.extraction)?;
        Ok(Self::new(DocumentGate::from_config(&config.document), parser)
            .with_empty_record_rejection(config.document.reject_empty_record))
    }

    /// Set whether a record with no populated field is rejected.
    pub fn with_empty_record_rejection(mut self, reject: bool) -> Self {
        self.reject_empty_record = reject;
        self
    }

    pub fn parser(&self) -> &AadhaarParser {
        &self.parser
    }

    /// Verify the recognized text of both sides and extract the record.
    pub fn verify(&self, front: &str, back: &str) -> Result<ExtractionResult, DocumentError> {
        if front.trim().is_empty() {
            return Err(DocumentError::NoTextDetected(Side::Front));
        }
        if back.trim().is_empty() {
            return Err(DocumentError::NoTextDetected(Side::Back));
        }

        if let Err(e) = self.gate.check_sides(front, back) {
            warn!("Document rejected by marker gate: {}", e);
            return Err(e);
        }

        let result = self.parser.parse(&combine_sides(front, back));

        if self.reject_empty_record && result.record.is_empty() {
            warn!("Document passed the marker gate but no field was extracted");
            return Err(DocumentError::NoData);
        }

        debug!(
            "Verified document with {} populated fields",
            result.record.populated_fields()
        );

        Ok(result)
    }
}

impl Default for DocumentVerifier {
    fn default() -> Self {
        Self::new(DocumentGate::new(), AadhaarParser::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT: &str = "Government of India\nAnita Desai\n01-12-1985\nFemale";
    const BACK: &str = "Unique Identification Authority of India";

    #[test]
    fn test_verify_success() {
        let result = DocumentVerifier::default().verify(FRONT, BACK).unwrap();
        assert_eq!(result.record.name.as_deref(), Some("Anita Desai"));
        assert_eq!(result.record.date_of_birth.as_deref(), Some("01-12-1985"));
    }

    #[test]
    fn test_no_text_detected() {
        let verifier = DocumentVerifier::default();
        assert_eq!(
            verifier.verify("  ", BACK).unwrap_err(),
            DocumentError::NoTextDetected(Side::Front)
        );
        assert_eq!(
            verifier.verify(FRONT, "\n").unwrap_err(),
            DocumentError::NoTextDetected(Side::Back)
        );
    }

    #[test]
    fn test_gate_rejection() {
        let err = DocumentVerifier::default()
            .verify("Some other card", BACK)
            .unwrap_err();
        assert_eq!(err, DocumentError::FrontSideInvalid);
        assert_eq!(
            err.to_string(),
            "Invalid Front Image, Please upload a clearer front image for better accuracy."
        );
    }

    #[test]
    fn test_empty_record_rejection() {
        let front = "Government of India";
        let verifier = DocumentVerifier::default();
        assert_eq!(verifier.verify(front, BACK).unwrap_err(), DocumentError::NoData);

        let lenient = DocumentVerifier::default().with_empty_record_rejection(false);
        assert!(lenient.verify(front, BACK).unwrap().record.is_empty());
    }

    #[test]
    fn test_require_sides() {
        assert_eq!(require_sides(Some("a"), Some("b")), Ok(("a", "b")));
        assert_eq!(
            require_sides(None, Some("b")),
            Err(DocumentError::MissingSide(Side::Front))
        );
        assert_eq!(
            require_sides(Some("a"), None),
            Err(DocumentError::MissingSide(Side::Back))
        );
    }
}
