//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use aadhaar_core::models::config::AadhaarConfig;
use tracing::debug;

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aadhaar")
        .join("config.json")
}

/// Load the configuration given on the command line, then the user file,
/// then the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AadhaarConfig> {
    if let Some(path) = config_path {
        return Ok(AadhaarConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        return Ok(AadhaarConfig::from_file(&default_path)?);
    }

    Ok(AadhaarConfig::default())
}
