//! Gender extraction.

use crate::models::record::Gender;

use super::patterns::GENDER;
use super::{ExtractionMatch, FieldExtractor};

/// Gender keyword extractor.
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = ExtractionMatch<Gender>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GENDER
            .find_iter(text)
            .filter_map(|m| {
                Gender::from_keyword(m.as_str())
                    .map(|gender| ExtractionMatch::from_regex_match(gender, m))
            })
            .collect()
    }
}

/// Extract the first gender keyword from text.
pub fn extract_gender(text: &str) -> Option<Gender> {
    GenderExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_gender("पुरुष / MALE"), Some(Gender::Male));
        assert_eq!(extract_gender("महिला / female"), Some(Gender::Female));
        assert_eq!(extract_gender("OtHeR"), Some(Gender::Other));
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(extract_gender("Females"), None);
        assert_eq!(extract_gender("Anothers"), None);
    }

    #[test]
    fn test_first_keyword_wins() {
        assert_eq!(extract_gender("Female\nMale"), Some(Gender::Female));
    }
}
