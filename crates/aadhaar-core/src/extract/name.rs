//! Holder name extraction from segmented lines.

use tracing::debug;

use super::noise::LineClassifier;
use super::rules::patterns::NAME_SHAPE;

/// Extract the holder name.
///
/// Cards print the name in a regional script first and the Latin rendering on
/// the next line, so a non-ASCII line followed by a name-shaped line is
/// preferred. Otherwise the first name-shaped line is used. Noise lines are
/// never selected.
pub fn extract_name<C>(lines: &[&str], classifier: &C) -> Option<String>
where
    C: LineClassifier + ?Sized,
{
    let is_candidate = |line: &str| NAME_SHAPE.is_match(line) && !classifier.is_noise(line);

    let paired = lines
        .windows(2)
        .find(|pair| !pair[0].is_ascii() && is_candidate(pair[1]))
        .map(|pair| pair[1]);

    if let Some(name) = paired {
        debug!("Name found after regional-script line: {}", name);
        return Some(name.to_string());
    }

    let fallback = lines.iter().copied().find(|line| is_candidate(line));
    if let Some(name) = fallback {
        debug!("Name found by shape fallback: {}", name);
    }

    fallback.map(str::to_string)
}
