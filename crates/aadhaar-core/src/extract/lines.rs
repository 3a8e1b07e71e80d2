//! Line segmentation of raw OCR text.

use super::rules::patterns::LINE_BREAK;

/// Split raw text into trimmed, non-empty lines, preserving order.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line.
pub fn segment_lines(raw: &str) -> Vec<&str> {
    LINE_BREAK
        .split(raw)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_line_endings() {
        let raw = "  भारत सरकार \r\nRavi Kumar\rDOB: 15/08/1990\n\n\tMale  ";
        assert_eq!(
            segment_lines(raw),
            vec!["भारत सरकार", "Ravi Kumar", "DOB: 15/08/1990", "Male"]
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert!(segment_lines(" \n\t\r\n  ").is_empty());
        assert!(segment_lines("").is_empty());
    }
}
