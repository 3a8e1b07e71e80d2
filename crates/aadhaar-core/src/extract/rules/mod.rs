//! Rule-based field extractors for Aadhaar cards.

pub mod dates;
pub mod gender;
pub mod id_number;
pub mod patterns;
pub mod postal;

pub use dates::{extract_date_of_birth, DateOfBirthExtractor};
pub use gender::{extract_gender, GenderExtractor};
pub use id_number::{extract_id_number, format_aadhaar, validate_aadhaar, IdNumberExtractor};
pub use postal::{extract_postal_code, PostalCodeExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value extracted from text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    fn from_regex_match(value: T, m: regex::Match<'_>) -> Self {
        Self::new(value, m.as_str()).with_position(m.start(), m.end())
    }
}
