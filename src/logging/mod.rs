//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Text or JSON console output
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Optional local JSON files with rotation
//!
//! # Example
//!
//! ```no_run
//! use csv_batch::logging::init_logging;
//! use csv_batch::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!(object = "a.csv", "Processing file");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
