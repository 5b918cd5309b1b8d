//! CLI interface and argument parsing
//!
//! The job runs once per invocation and takes no subcommands. Every flag is
//! optional; without flags the buckets come from `INPUT_BUCKET` / `OUTPUT_BUCKET`
//! or their defaults.

use crate::config::{JobConfig, LogFormat};
use crate::domain::{BatchError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Process exit codes
pub mod exit_code {
    /// Normal completion, including runs where some files failed
    pub const SUCCESS: i32 = 0;
    /// Batch-fatal error (listing failure, storage client failure)
    pub const FATAL: i32 = 1;
    /// Invalid configuration
    pub const CONFIGURATION: i32 = 2;
    /// Logging could not be initialised
    pub const LOGGING: i32 = 3;
}

/// CSV batch processor - stamps CSV objects into a processed bucket
#[derive(Parser, Debug, Default)]
#[command(name = "csv-batch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "CSV_BATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bucket to read CSV objects from (overrides INPUT_BUCKET)
    #[arg(long)]
    pub input_bucket: Option<String>,

    /// Bucket to write processed objects to (overrides OUTPUT_BUCKET)
    #[arg(long)]
    pub output_bucket: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Console log format (text or json)
    #[arg(long, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    /// Download and transform, but do not upload anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration and re-validate
    pub fn apply_overrides(&self, config: &mut JobConfig) -> Result<()> {
        if let Some(bucket) = &self.input_bucket {
            config.storage.input_bucket = bucket.clone();
        }
        if let Some(bucket) = &self.output_bucket {
            config.storage.output_bucket = bucket.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if self.dry_run {
            config.run.dry_run = true;
        }

        config.validate().map_err(|e| {
            BatchError::Configuration(format!("Configuration validation failed: {e}"))
        })
    }
}

fn parse_log_format(value: &str) -> std::result::Result<LogFormat, String> {
    value.parse()
}
