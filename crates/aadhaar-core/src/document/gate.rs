//! Marker-phrase gate for submitted card sides.

use serde::Serialize;

use crate::error::DocumentError;
use crate::models::config::DocumentConfig;

/// Outcome of the marker-phrase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateVerdict {
    /// The front-side header phrase was found.
    pub front_marker_found: bool,
    /// The back-side footer phrase was found.
    pub back_marker_found: bool,
}

impl GateVerdict {
    pub fn is_valid(&self) -> bool {
        self.front_marker_found && self.back_marker_found
    }

    /// Map the verdict to the rejection shown to the user.
    pub fn into_result(self) -> Result<(), DocumentError> {
        match (self.front_marker_found, self.back_marker_found) {
            (true, true) => Ok(()),
            (false, false) => Err(DocumentError::BothSidesInvalid),
            (false, true) => Err(DocumentError::FrontSideInvalid),
            (true, false) => Err(DocumentError::BackSideInvalid),
        }
    }
}

/// Checks that text comes from a genuine card before extraction is trusted.
#[derive(Debug, Clone)]
pub struct DocumentGate {
    front_marker: String,
    back_marker: String,
}

impl DocumentGate {
    /// Create a gate with the standard issuing-authority phrases.
    pub fn new() -> Self {
        Self::from_config(&DocumentConfig::default())
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::with_markers(&config.front_marker, &config.back_marker)
    }

    pub fn with_markers(front_marker: &str, back_marker: &str) -> Self {
        Self {
            front_marker: front_marker.to_lowercase(),
            back_marker: back_marker.to_lowercase(),
        }
    }

    /// Check both markers against the combined text of the two sides.
    pub fn check_combined(&self, raw: &str) -> GateVerdict {
        let raw = raw.to_lowercase();
        GateVerdict {
            front_marker_found: raw.contains(&self.front_marker),
            back_marker_found: raw.contains(&self.back_marker),
        }
    }

    /// Check each marker against the side it is printed on.
    pub fn check_sides(&self, front: &str, back: &str) -> Result<(), DocumentError> {
        GateVerdict {
            front_marker_found: front.to_lowercase().contains(&self.front_marker),
            back_marker_found: back.to_lowercase().contains(&self.back_marker),
        }
        .into_result()
    }
}

impl Default for DocumentGate {
    fn default() -> Self {
        Self::new()
    }
}
