//! Configuration schema types
//!
//! This module defines the configuration structure of the batch job. Every
//! section has defaults, so an empty TOML document is a valid configuration.

use crate::domain::{BatchError, BucketName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default bucket that CSV objects are read from
pub const DEFAULT_INPUT_BUCKET: &str = "csv-input-bucket";

/// Default bucket that processed objects are written to
pub const DEFAULT_OUTPUT_BUCKET: &str = "csv-processed-bucket";

/// Main job configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Bucket and endpoint settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Run behaviour
    #[serde(default)]
    pub run: RunConfig,
}

impl JobConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket listed for `.csv` objects
    #[serde(default = "default_input_bucket")]
    pub input_bucket: String,

    /// Bucket receiving the processed objects
    #[serde(default = "default_output_bucket")]
    pub output_bucket: String,

    /// Custom storage endpoint, e.g. an emulator. Uses anonymous credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        BucketName::new(self.input_bucket.as_str())
            .map_err(|e| format!("Invalid storage.input_bucket: {e}"))?;
        BucketName::new(self.output_bucket.as_str())
            .map_err(|e| format!("Invalid storage.output_bucket: {e}"))?;

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "Invalid storage.endpoint '{endpoint}'. Must start with http:// or https://"
                ));
            }
        }

        Ok(())
    }

    /// Input bucket as a validated name
    pub fn input_bucket_name(&self) -> Result<BucketName, BatchError> {
        BucketName::new(self.input_bucket.as_str()).map_err(BatchError::Configuration)
    }

    /// Output bucket as a validated name
    pub fn output_bucket_name(&self) -> Result<BucketName, BatchError> {
        BucketName::new(self.output_bucket.as_str()).map_err(BatchError::Configuration)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            input_bucket: default_input_bucket(),
            output_bucket: default_output_bucket(),
            endpoint: None,
        }
    }
}

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Expected 'text' or 'json'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console log format
    #[serde(default)]
    pub format: LogFormat,

    /// Also write JSON logs to rotating files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must be set when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Run behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Download and transform, but skip uploads
    #[serde(default)]
    pub dry_run: bool,
}

// Default value functions
fn default_input_bucket() -> String {
    DEFAULT_INPUT_BUCKET.to_string()
}

fn default_output_bucket() -> String {
    DEFAULT_OUTPUT_BUCKET.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
