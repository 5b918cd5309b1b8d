//! Batch orchestration
//!
//! - [`orchestrator`] - the list → fetch → transform → upload loop
//! - [`naming`] - output object names
//! - [`summary`] - per-object outcomes and the run summary

pub mod naming;
pub mod orchestrator;
pub mod summary;

pub use naming::output_name;
pub use orchestrator::{BatchOrchestrator, BatchSettings};
pub use summary::{FailureStage, FileOutcome, RunSummary};
