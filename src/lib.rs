// CSV Batch - Cloud Storage CSV stamping job
// Copyright (c) 2025 CSV Batch Contributors
// Licensed under the MIT License

//! # CSV Batch
//!
//! A single-shot batch job that lists a Cloud Storage bucket, downloads every
//! `.csv` object, appends a `ProcessedTimestamp` and a `Status` column to each
//! row, and uploads the result to a second bucket as
//! `processed_<yyyyMMdd_HHmmss>_<name>`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and exit codes
//! - [`core`] - Batch orchestration and the row transformer
//! - [`adapters`] - Object storage gateway (Google Cloud Storage)
//! - [`domain`] - Identifiers and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Error Handling
//!
//! Failures on one object are recorded in the [`core::batch::RunSummary`] and the
//! run continues. Only a failure to list the input bucket is returned as an
//! error from [`core::batch::BatchOrchestrator::run`].
//!
//! ```rust
//! use std::sync::Arc;
//! use csv_batch::core::clock::SystemClock;
//! use csv_batch::core::transform::RowTransformer;
//!
//! let transformer = RowTransformer::new(Arc::new(SystemClock));
//! let output = transformer.transform("name,age\nAlice,30");
//! assert!(output.starts_with("name,age,ProcessedTimestamp,Status\nAlice,30,"));
//! assert!(output.ends_with(",Processed"));
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
