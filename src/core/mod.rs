//! Core business logic of the batch job.
//!
//! - [`batch`] - orchestration, output naming and the run summary
//! - [`transform`] - the CSV row transformer
//! - [`clock`] - the wall-clock used for timestamps
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use csv_batch::adapters::storage::GcsGateway;
//! use csv_batch::config::load_config;
//! use csv_batch::core::batch::{BatchOrchestrator, BatchSettings};
//! use csv_batch::core::clock::SystemClock;
//! use csv_batch::core::transform::RowTransformer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let gateway = Arc::new(GcsGateway::new(&config.storage).await?);
//! let clock = Arc::new(SystemClock);
//!
//! let orchestrator = BatchOrchestrator::new(
//!     gateway,
//!     RowTransformer::new(clock.clone()),
//!     clock,
//!     BatchSettings::from_config(&config)?,
//! );
//!
//! let summary = orchestrator.run().await?;
//! println!("Processed: {}, Failed: {}", summary.files_processed, summary.files_failed);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod clock;
pub mod transform;
