//! Configuration loading functionality
//!
//! This module contains functions for reading, parsing and validating the
//! YAML rule file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use serde_yaml::from_str;
use shellexpand::tilde;

use crate::errors::config_parsing_error;
use crate::utils::find_project_folder;

use super::model::MirrorConfig;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<MirrorConfig>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<MirrorConfig> {
    let file_content = fs::read(&file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config = parse_config(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    info!(
        "Loaded {} rules from {}",
        config.rules.len(),
        file.display()
    );
    Ok(config)
}

/// Parses and validates configuration text
///
/// # Errors
/// * Returns a configuration parsing error if the YAML does not describe a rule list
/// * Returns an error if a rule fails validation
pub fn parse_config(content: &str) -> Result<MirrorConfig> {
    let config: MirrorConfig =
        from_str(content).map_err(|e| config_parsing_error(e, "expected a list of rules"))?;
    config.validate()?;
    Ok(config)
}

/// Resolves the configuration file path
///
/// A path that exists relative to the working directory is used as is,
/// otherwise the file is looked up in the platform configuration directory.
///
/// # Errors
/// * Returns an error if the configuration directory cannot be determined
pub fn resolve_config_path(config: PathBuf) -> Result<PathBuf> {
    if config.exists() {
        return Ok(config);
    }
    let folder = find_project_folder()?;
    let fallback = folder.config_dir().join(&config);
    debug!(
        "{} not found, using {}",
        config.display(),
        fallback.display()
    );
    Ok(fallback)
}

/// Expands `~` and environment variables in a path
///
/// Unknown variables are left in place; only the tilde is expanded then.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.to_string())
        .unwrap_or_else(|_| tilde(path).to_string())
}

/// Deserializes a string into a PathBuf with `~` and variables expanded
pub fn deserialize_expanded_pathbuf<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(PathBuf::from(expand_path(&raw)))
}
