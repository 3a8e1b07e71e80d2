//! Date of birth extraction.

use super::patterns::DATE_DMY;
use super::{ExtractionMatch, FieldExtractor};

/// Date of birth extractor.
///
/// Matches are returned verbatim; the separator is not normalized.
pub struct DateOfBirthExtractor;

impl DateOfBirthExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateOfBirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateOfBirthExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_DMY
            .find_iter(text)
            .map(|m| ExtractionMatch::from_regex_match(m.as_str().to_string(), m))
            .collect()
    }
}

/// Extract the first DD/MM/YYYY or DD-MM-YYYY date from text.
pub fn extract_date_of_birth(text: &str) -> Option<String> {
    DateOfBirthExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slash_date() {
        let text = "Ravi Kumar Sharma\nDOB: 15/08/1990\nMale";
        assert_eq!(extract_date_of_birth(text), Some("15/08/1990".to_string()));
    }

    #[test]
    fn test_separator_preserved() {
        assert_eq!(
            extract_date_of_birth("जन्म तिथि/DOB: 01-12-1985"),
            Some("01-12-1985".to_string())
        );
    }

    #[test]
    fn test_first_date_wins() {
        let text = "DOB: 15/08/1990\nIssue Date: 02/03/2019";
        let all = DateOfBirthExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].value, "15/08/1990");
    }

    #[test]
    fn test_rejects_short_groups() {
        assert_eq!(extract_date_of_birth("1/8/1990 and 15/08/90"), None);
    }
}
