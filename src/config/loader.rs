//! Manifest loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouteManifest;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a manifest from a TOML file.
pub fn load_config(path: &Path) -> Result<RouteManifest, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate a manifest from TOML text.
pub fn parse_config(content: &str) -> Result<RouteManifest, ConfigError> {
    let manifest: RouteManifest = toml::from_str(content)?;
    validate_config(&manifest).map_err(ConfigError::Validation)?;
    Ok(manifest)
}
