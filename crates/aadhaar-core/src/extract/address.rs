//! Address extraction from segmented lines.

use tracing::debug;

use super::noise::LineClassifier;
use super::rules::patterns::ADDRESS_MARKER;

/// Tunables for the address heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRules {
    /// Maximum lines collected after an address marker.
    pub max_lines: usize,
    /// Lines must be longer than this many characters.
    pub min_line_length: usize,
    /// Start of the fallback region, relative to the line count.
    pub fallback_start_ratio: f32,
}

impl Default for AddressRules {
    fn default() -> Self {
        Self {
            max_lines: 7,
            min_line_length: 4,
            fallback_start_ratio: 0.6,
        }
    }
}

impl AddressRules {
    fn is_address_line<C>(&self, line: &str, classifier: &C) -> bool
    where
        C: LineClassifier + ?Sized,
    {
        line.chars().count() > self.min_line_length && !classifier.is_noise(line)
    }

    fn fallback_start(&self, line_count: usize) -> usize {
        let start = (line_count as f32 * self.fallback_start_ratio).floor() as usize;
        start.min(line_count)
    }
}

/// Extract the address as a single ", "-joined string.
///
/// Lines following an "Address" (or "पता") marker are used when at least two
/// qualify. Otherwise the bottom part of the text is used, where the back side
/// prints the address.
pub fn extract_address<C>(lines: &[&str], classifier: &C, rules: &AddressRules) -> Option<String>
where
    C: LineClassifier + ?Sized,
{
    let mut collected: Vec<&str> = match lines.iter().position(|l| ADDRESS_MARKER.is_match(l)) {
        Some(marker) => lines[marker + 1..]
            .iter()
            .copied()
            .filter(|l| rules.is_address_line(l, classifier))
            .take(rules.max_lines)
            .map(strip_trailing_punctuation)
            .collect(),
        None => Vec::new(),
    };

    if collected.len() < 2 {
        let start = rules.fallback_start(lines.len());
        debug!(
            "Address marker yielded {} lines, using fallback region from line {}",
            collected.len(),
            start
        );

        collected = lines[start..]
            .iter()
            .copied()
            .filter(|l| rules.is_address_line(l, classifier))
            .map(strip_trailing_punctuation)
            .collect();
    }

    collected.retain(|l| !l.is_empty());

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(", "))
    }
}

fn strip_trailing_punctuation(line: &str) -> &str {
    line.trim_end_matches([',', ';']).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::noise::NoiseClassifier;

    fn extract(lines: &[&str]) -> Option<String> {
        extract_address(lines, &NoiseClassifier::new(), &AddressRules::default())
    }

    #[test]
    fn test_lines_after_marker() {
        let lines = [
            "Unique Identification Authority of India",
            "Address:",
            "S/O Ramesh Sharma,",
            "12 MG Road;",
            "Bengaluru Karnataka",
            "560001",
            "help@uidai.gov.in",
        ];
        assert_eq!(
            extract(&lines),
            Some("S/O Ramesh Sharma, 12 MG Road, Bengaluru Karnataka".to_string())
        );
    }

    #[test]
    fn test_hindi_marker() {
        let lines = ["पता:", "Flat 4B Lake View", "Kolkata West Bengal 700001"];
        assert_eq!(
            extract(&lines),
            Some("Flat 4B Lake View, Kolkata West Bengal 700001".to_string())
        );
    }

    #[test]
    fn test_marker_collection_capped() {
        let mut lines = vec!["Address"];
        let body = [
            "Line one", "Line two", "Line three", "Line four", "Line five", "Line six",
            "Line seven", "Line eight",
        ];
        lines.extend(body);

        let address = extract(&lines).unwrap();
        assert_eq!(address.split(", ").count(), 7);
        assert!(!address.contains("Line eight"));
    }

    #[test]
    fn test_short_lines_skipped() {
        let lines = ["ADDRESS", "Flat", "House 9 Park Street", "Kolkata", "India"];
        assert_eq!(
            extract(&lines),
            Some("House 9 Park Street, Kolkata, India".to_string())
        );
    }

    #[test]
    fn test_fallback_bottom_region() {
        // 10 lines: fallback starts at index 6
        let lines = [
            "भारत सरकार",
            "Government of India",
            "Ravi Kumar Sharma",
            "DOB: 15/08/1990",
            "Male",
            "2345 6789 0123",
            "C/O Ramesh Sharma",
            "House 12, MG Road",
            "Bengaluru Karnataka 560001",
            "1947",
        ];
        assert_eq!(
            extract(&lines),
            Some("C/O Ramesh Sharma, House 12, MG Road, Bengaluru Karnataka 560001".to_string())
        );
    }

    #[test]
    fn test_marker_block_and_fallback() {
        let lines = [
            "Address:",
            "Near Temple",
            "Ravi Kumar",
            "Anand Vihar",
            "Delhi 110092",
        ];
        // Marker block collects all four lines, no fallback needed
        assert_eq!(
            extract(&lines),
            Some("Near Temple, Ravi Kumar, Anand Vihar, Delhi 110092".to_string())
        );

        let lines = ["Anand Vihar", "Delhi 110092", "Address:", "Near Temple", "1947"];
        // One line after the marker; fallback region is lines[3..]
        assert_eq!(extract(&lines), Some("Near Temple".to_string()));
    }

    #[test]
    fn test_fallback_region_not_capped() {
        // 20 lines: fallback starts at index 12 and holds 8 address lines
        let mut lines = vec!["Government of India"; 12];
        let bottom = [
            "Flat 101 Sunrise Apartments",
            "Near City Hospital",
            "Ward Number Twelve",
            "Station Road",
            "Shivaji Nagar",
            "Taluka Haveli",
            "District Pune",
            "Maharashtra State",
        ];
        lines.extend(bottom);

        let address = extract(&lines).unwrap();
        assert_eq!(address, bottom.join(", "));
        assert_eq!(address.split(", ").count(), 8);
    }

    #[test]
    fn test_no_address() {
        assert_eq!(extract(&["Male", "2345 6789 0123"]), None);
        assert_eq!(extract(&[]), None);
    }

    #[test]
    fn test_fallback_start() {
        let rules = AddressRules::default();
        assert_eq!(rules.fallback_start(10), 6);
        assert_eq!(rules.fallback_start(3), 1);
        assert_eq!(rules.fallback_start(0), 0);
    }
}
