//! Common regex patterns for Aadhaar card extraction.
//!
//! Digit classes are spelled `[0-9]` because `\d` also matches non-ASCII
//! digits in the `regex` crate. Word boundaries are ASCII-only `(?-u:\b)` so
//! a token glued to Devanagari text (e.g. "पिन560001") is still bounded.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Aadhaar number: 12 digits, optionally grouped 4-4-4
    pub static ref ID_NUMBER: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})\s?([0-9]{4})\s?([0-9]{4})(?-u:\b)"
    ).unwrap();

    // Date of birth: DD/MM/YYYY or DD-MM-YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?-u:\b)[0-9]{2}[/-][0-9]{2}[/-][0-9]{4}(?-u:\b)"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)(?-u:\b)(male|female|other)(?-u:\b)"
    ).unwrap();

    // PIN code
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"(?-u:\b)[0-9]{6}(?-u:\b)"
    ).unwrap();

    // Two or three capitalized words, e.g. "Ravi Kumar Sharma"
    pub static ref NAME_SHAPE: Regex = Regex::new(
        r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}$"
    ).unwrap();

    // Address header line: "Address", "ADDRESS:", "पता:"
    pub static ref ADDRESS_MARKER: Regex = Regex::new(
        r"(?i)^(?:address|पता)\s*:?$"
    ).unwrap();

    // Line separators: \r\n, \n, \r
    pub static ref LINE_BREAK: Regex = Regex::new(
        r"\r\n|\n|\r"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_number_requires_word_boundary() {
        assert!(ID_NUMBER.is_match("2345 6789 0123"));
        assert!(ID_NUMBER.is_match("234567890123"));
        assert!(!ID_NUMBER.is_match("12345678901234"));
    }

    #[test]
    fn test_boundaries_after_devanagari() {
        assert_eq!(
            POSTAL_CODE.find("पिन560001").map(|m| m.as_str()),
            Some("560001")
        );
        assert!(!POSTAL_CODE.is_match("1234567"));
        assert!(ID_NUMBER.is_match("आधार2345 6789 0123"));
        assert!(DATE_DMY.is_match("जन्मतिथि15/08/1990"));
        assert!(GENDER.is_match("पुरुषMALE"));
        assert!(!GENDER.is_match("FEMALEX"));
    }

    #[test]
    fn test_name_shape() {
        assert!(NAME_SHAPE.is_match("Ravi Kumar"));
        assert!(NAME_SHAPE.is_match("Ravi Kumar Sharma"));
        assert!(!NAME_SHAPE.is_match("Ravi"));
        assert!(!NAME_SHAPE.is_match("Ravi Kumar Sharma Verma"));
        assert!(!NAME_SHAPE.is_match("RAVI KUMAR"));
        assert!(!NAME_SHAPE.is_match("Government of India"));
    }

    #[test]
    fn test_address_marker() {
        assert!(ADDRESS_MARKER.is_match("Address"));
        assert!(ADDRESS_MARKER.is_match("ADDRESS:"));
        assert!(ADDRESS_MARKER.is_match("पता:"));
        assert!(!ADDRESS_MARKER.is_match("Address: 12 MG Road"));
    }
}
