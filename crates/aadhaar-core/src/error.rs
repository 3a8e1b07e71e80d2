//! Error types for the aadhaar-core library.

use thiserror::Error;

use crate::document::Side;

/// Main error type for the aadhaar library.
#[derive(Error, Debug)]
pub enum AadhaarError {
    /// Field extraction setup error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// The submitted document was rejected.
    #[error("document rejected: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while building an extractor.
///
/// Extraction itself never fails on input text; every field is optional.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A configured noise pattern is not a valid regular expression.
    #[error("invalid noise pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A numeric extraction setting is out of range.
    #[error("invalid setting {setting}: {reason}")]
    InvalidSetting { setting: String, reason: String },
}

/// User-facing rejections produced by the document gate and verifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// One of the two card sides was not supplied.
    #[error("Both front and back images are required")]
    MissingSide(Side),

    /// The text recognizer returned nothing for a side.
    #[error("No text detected in {0} image")]
    NoTextDetected(Side),

    /// Neither side carries its marker phrase.
    #[error("Invalid Aadhaar card, Please upload a clearer front and back image for better accuracy.")]
    BothSidesInvalid,

    /// The front side lacks the issuing-authority header.
    #[error("Invalid Front Image, Please upload a clearer front image for better accuracy.")]
    FrontSideInvalid,

    /// The back side lacks the issuing-authority footer.
    #[error("Invalid Back Image, Please upload a clearer back image for better accuracy.")]
    BackSideInvalid,

    /// Extraction succeeded but populated no field.
    #[error("No Aadhaar data found")]
    NoData,
}

/// Result type for the aadhaar library.
pub type Result<T> = std::result::Result<T, AadhaarError>;
