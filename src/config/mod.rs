//! Configuration management for the batch job.
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults (`csv-input-bucket` → `csv-processed-bucket`)
//! 2. An optional TOML file
//! 3. Environment variables (`INPUT_BUCKET`, `OUTPUT_BUCKET`, `STORAGE_EMULATOR_HOST`,
//!    `CSV_BATCH_LOG_LEVEL`, `CSV_BATCH_LOG_FORMAT`, `CSV_BATCH_DRY_RUN`)
//! 4. Command-line flags, applied by [`crate::cli`]
//!
//! # Example Configuration
//!
//! ```toml
//! [storage]
//! input_bucket = "csv-input-bucket"
//! output_bucket = "csv-processed-bucket"
//!
//! [logging]
//! level = "info"
//! format = "json"
//!
//! [run]
//! dry_run = false
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_with_env};
pub use schema::{
    JobConfig, LogFormat, LoggingConfig, RunConfig, StorageConfig, DEFAULT_INPUT_BUCKET,
    DEFAULT_OUTPUT_BUCKET,
};
