//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AadhaarError, Result};

/// Main configuration for the aadhaar pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AadhaarConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Document validity gate configuration.
    pub document: DocumentConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skip ID number candidates that fail the Verhoeff checksum.
    pub validate_checksum: bool,

    /// Maximum number of lines collected after an address marker.
    pub max_address_lines: usize,

    /// Address lines must be longer than this many characters.
    pub min_line_length: usize,

    /// Relative position (0.0 - 1.0) where the address fallback region starts.
    pub fallback_start_ratio: f32,

    /// Additional noise patterns, evaluated after the built-in rules.
    pub extra_noise_patterns: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_checksum: false,
            max_address_lines: 7,
            min_line_length: 4,
            fallback_start_ratio: 0.6,
            extra_noise_patterns: Vec::new(),
        }
    }
}

/// Marker phrases and acceptance policy for submitted documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Phrase required on the front side (issuing-authority header).
    pub front_marker: String,

    /// Phrase required on the back side (issuing-authority footer).
    pub back_marker: String,

    /// Reject documents whose extraction populated no field.
    pub reject_empty_record: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            front_marker: "Government of India".to_string(),
            back_marker: "Unique Identification Authority of India".to_string(),
            reject_empty_record: true,
        }
    }
}

impl AadhaarConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AadhaarError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AadhaarError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
