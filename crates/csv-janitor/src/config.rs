//! Configuration for the cleaning tool.
//!
//! Uses the builder pattern for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset;

/// Configuration for a cleaning run.
///
/// Use [`CleanerConfig::builder()`] to create a configuration with a fluent
/// API.
///
/// # Example
///
/// ```rust,ignore
/// use csv_janitor::CleanerConfig;
///
/// let config = CleanerConfig::builder()
///     .output_prefix("fixed_")
///     .analyze_only(false)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Prefix prepended to the input filename to derive the output filename.
    /// Ignored when `output_path` is set.
    /// Default: "cleaned_"
    pub output_prefix: String,

    /// Explicit output path. When None, the output filename is derived from
    /// the input filename and `output_prefix`.
    /// Default: None
    pub output_path: Option<PathBuf>,

    /// Report issues and suggestions without applying any transform.
    /// Default: false
    pub analyze_only: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            output_prefix: "cleaned_".to_string(),
            output_path: None,
            analyze_only: false,
        }
    }
}

impl CleanerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CleanerConfigBuilder {
        CleanerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_path.is_none() {
            if self.output_prefix.is_empty() {
                return Err(ConfigValidationError::EmptyOutputPrefix);
            }
            if self.output_prefix.contains(['/', '\\']) {
                return Err(ConfigValidationError::InvalidOutputPrefix(
                    self.output_prefix.clone(),
                ));
            }
        }
        Ok(())
    }

    /// The path cleaned data will be written to for a given input file.
    pub fn resolve_output_path(&self, input: &Path) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => dataset::derived_output_path(input, &self.output_prefix),
        }
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Output prefix must not be empty when no explicit output path is set")]
    EmptyOutputPrefix,

    #[error("Output prefix '{0}' must not contain path separators")]
    InvalidOutputPrefix(String),
}

/// Builder for [`CleanerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct CleanerConfigBuilder {
    output_prefix: Option<String>,
    output_path: Option<PathBuf>,
    analyze_only: Option<bool>,
}

impl CleanerConfigBuilder {
    /// Set the prefix used to derive the output filename from the input.
    pub fn output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = Some(prefix.into());
        self
    }

    /// Set an explicit output path, overriding the derived filename.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Report issues without applying any transform.
    pub fn analyze_only(mut self, analyze_only: bool) -> Self {
        self.analyze_only = Some(analyze_only);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `CleanerConfig` or an error if validation fails.
    pub fn build(self) -> Result<CleanerConfig, ConfigValidationError> {
        let config = CleanerConfig {
            output_prefix: self.output_prefix.unwrap_or_else(|| "cleaned_".to_string()),
            output_path: self.output_path,
            analyze_only: self.analyze_only.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }
}
