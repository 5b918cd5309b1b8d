//! Object storage abstraction
//!
//! - [`traits`] - the [`StorageGateway`] trait the orchestrator depends on
//! - [`gcs`] - Google Cloud Storage implementation

pub mod gcs;
pub mod traits;

pub use gcs::GcsGateway;
pub use traits::{StorageGateway, CSV_CONTENT_TYPE};
