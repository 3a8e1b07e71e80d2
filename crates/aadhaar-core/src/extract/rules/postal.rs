//! Postal (PIN) code extraction.

use super::patterns::POSTAL_CODE;
use super::{ExtractionMatch, FieldExtractor};

/// 6-digit PIN code extractor.
pub struct PostalCodeExtractor;

impl PostalCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostalCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PostalCodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        POSTAL_CODE
            .find_iter(text)
            .map(|m| ExtractionMatch::from_regex_match(m.as_str().to_string(), m))
            .collect()
    }
}

/// Extract a postal code, preferring the address over the full text.
pub fn extract_postal_code(address: Option<&str>, raw_text: &str) -> Option<String> {
    let extractor = PostalCodeExtractor::new();

    address
        .and_then(|a| extractor.extract(a))
        .or_else(|| extractor.extract(raw_text))
        .map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_address() {
        let raw = "Ref 110001\nAddress:\n12 MG Road, Bengaluru 560001";
        assert_eq!(
            extract_postal_code(Some("12 MG Road, Bengaluru 560001"), raw),
            Some("560001".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_raw_text() {
        let raw = "12 MG Road\nBengaluru\n560001";
        assert_eq!(
            extract_postal_code(Some("12 MG Road, Bengaluru"), raw),
            Some("560001".to_string())
        );
        assert_eq!(extract_postal_code(None, raw), Some("560001".to_string()));
    }

    #[test]
    fn test_no_six_digit_run() {
        assert_eq!(extract_postal_code(None, "2345 6789 0123\n15/08/1990\n1947"), None);
        assert_eq!(extract_postal_code(None, "1234567"), None);
    }
}
