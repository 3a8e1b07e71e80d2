//! Aadhaar number extraction and validation.

use super::patterns::ID_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Aadhaar number field extractor.
pub struct IdNumberExtractor {
    validate: bool,
}

impl IdNumberExtractor {
    /// Create a new extractor. Checksum validation is off by default.
    pub fn new() -> Self {
        Self { validate: false }
    }

    /// Set whether to skip candidates failing the Verhoeff checksum.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for IdNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ID_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let id = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
                if self.validate && !validate_aadhaar(&id) {
                    return None;
                }
                caps.get(0).map(|m| ExtractionMatch::from_regex_match(id, m))
            })
            .collect()
    }
}

/// Extract the first Aadhaar number from text, separators removed.
pub fn extract_id_number(text: &str) -> Option<String> {
    IdNumberExtractor::new().extract(text).map(|m| m.value)
}

const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Validate an Aadhaar number.
///
/// Aadhaar numbers are 12 digits, never start with 0 or 1, and end with a
/// Verhoeff check digit. Spaces and hyphens are ignored.
pub fn validate_aadhaar(id: &str) -> bool {
    let digits: Vec<u8> = id
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() != 12 || digits[0] < 2 {
        return false;
    }

    let checksum = digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &d)| {
            VERHOEFF_D[c as usize][VERHOEFF_P[i % 8][d as usize] as usize]
        });

    checksum == 0
}

/// Format an Aadhaar number in groups of four (XXXX XXXX XXXX).
pub fn format_aadhaar(id: &str) -> String {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 12 {
        return id.to_string();
    }

    format!("{} {} {}", &digits[0..4], &digits[4..8], &digits[8..12])
}
