//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scanner
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

use super::types::ScannerConfig;

/// Loads and provides access to the scanner configuration.
///
/// # File Format
///
/// ```text
/// default_name: 宇都宮美香
/// date_row_offsets: [3, 4]
/// max_date_digits: 2
/// preview_rows: 10
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_extractor::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/scanner.yaml").unwrap();
/// println!("Default name: {}", loader.config().default_name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ScannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A field holds an unusable value
    pub fn load<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExtractError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ScannerConfig =
            serde_yaml::from_str(&content).map_err(|e| ExtractError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(config)?;
        debug!(path = %path_str, "Loaded scanner configuration");
        Ok(loader)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: ScannerConfig) -> ExtractResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns the underlying scanner configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

fn validate(config: &ScannerConfig) -> ExtractResult<()> {
    if config.default_name.trim().is_empty() {
        return Err(invalid("default_name", "must not be blank"));
    }
    if config.date_row_offsets.is_empty() {
        return Err(invalid("date_row_offsets", "must not be empty"));
    }
    if config.date_row_offsets.contains(&0) {
        return Err(invalid(
            "date_row_offsets",
            "offsets must point at rows above the match",
        ));
    }
    if config.max_date_digits == 0 {
        return Err(invalid("max_date_digits", "must be at least 1"));
    }
    if config.preview_rows == 0 {
        return Err(invalid("preview_rows", "must be at least 1"));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ExtractError {
    ExtractError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
