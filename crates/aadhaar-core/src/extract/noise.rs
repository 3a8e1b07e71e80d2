//! Classification of boilerplate lines.
//!
//! A line is noise when it matches any rule of an ordered rule set. Rules are
//! evaluated in order and evaluation stops at the first match. The order is
//! stable and is reported by [`NoiseClassifier::matching_rule`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractionError;

/// Decides whether a line is boilerplate rather than personal data.
///
/// Name and address matchers only depend on this trait, so the keyword and
/// script heuristics below can be replaced by a language-aware classifier.
pub trait LineClassifier {
    /// True when the line must not be used as name or address content.
    fn is_noise(&self, line: &str) -> bool;
}

impl<F> LineClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_noise(&self, line: &str) -> bool {
        self(line)
    }
}

/// A named pattern rule.
#[derive(Debug, Clone)]
pub struct NoiseRule {
    name: String,
    pattern: Regex,
}

impl NoiseRule {
    /// Compile a rule from a regular expression.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, ExtractionError> {
        let pattern = Regex::new(pattern).map_err(|source| ExtractionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            name: name.into(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Built-in rules as (name, pattern) pairs, in evaluation order.
pub const BUILTIN_NOISE_PATTERNS: &[(&str, &str)] = &[
    // Issuing government, English and Hindi
    ("government", r"(?i)government\s+of\s+india|भारत\s*सरकार"),
    // Issuing authority
    (
        "authority",
        r"(?i)unique\s+identification\s+authority|भारतीय\s+विशिष्ट\s+पहचान",
    ),
    // Watermarks and slogans
    (
        "watermark",
        r"(?i)(?-u:\b)aadhaa?r(?-u:\b)|आधार|(?-u:\b)mera(?-u:\b)|(?-u:\b)meri\s+pehchaa?n(?-u:\b)|(?-u:\b)vid(?-u:\b)",
    ),
    ("url", r"(?i)https?://|www\.|\.gov\.in(?-u:\b)|[a-z0-9._%+-]+@[a-z0-9.-]+"),
    // Help text and field labels
    (
        "help_text",
        r"(?i)(?-u:\b)(?:help|helpline|enrol?ment|download(?:ed)?|issue\s+date|issued|dob|date\s+of\s+birth|year\s+of\s+birth|yob)(?-u:\b)|जन्म|^(?:address|पता)\s*:?$",
    ),
    // Content owned by the other field matchers
    ("id_number", r"(?-u:\b)[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}(?-u:\b)"),
    ("date", r"(?-u:\b)[0-9]{2}[/-][0-9]{2}[/-][0-9]{4}(?-u:\b)"),
    ("gender", r"(?i)(?-u:\b)(?:male|female|other)(?-u:\b)|पुरुष|महिला"),
    // UIDAI helpline number ends in 1947
    ("noise_year", r"(?-u:\b)1947(?-u:\b)"),
    ("numeric_only", r"^[^\p{L}]*$"),
];

lazy_static! {
    static ref BUILTIN_RULES: Vec<NoiseRule> = BUILTIN_NOISE_PATTERNS
        .iter()
        .map(|(name, pattern)| NoiseRule::new(*name, pattern).unwrap())
        .collect();
}

/// Rule-set noise classifier.
#[derive(Debug, Clone)]
pub struct NoiseClassifier {
    rules: Vec<NoiseRule>,
}

impl NoiseClassifier {
    /// Create a classifier with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }

    /// Create a classifier from an explicit rule list.
    pub fn from_rules(rules: Vec<NoiseRule>) -> Self {
        Self { rules }
    }

    /// Append extra patterns after the built-in rules.
    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, pattern) in patterns.into_iter().enumerate() {
            self.rules
                .push(NoiseRule::new(format!("custom_{}", i), pattern.as_ref())?);
        }
        Ok(self)
    }

    pub fn rules(&self) -> &[NoiseRule] {
        &self.rules
    }

    /// Evaluate the rule set against a line.
    pub fn evaluate(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(line))
    }

    /// Name of the first rule matching the line.
    pub fn matching_rule(&self, line: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map(NoiseRule::name)
    }
}

impl Default for NoiseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier for NoiseClassifier {
    fn is_noise(&self, line: &str) -> bool {
        self.evaluate(line)
    }
}
