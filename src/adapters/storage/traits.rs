//! Storage gateway trait
//!
//! The batch job only needs three operations from an object store. Backends
//! implement this trait; the orchestrator never sees SDK types.

use crate::domain::{BucketName, ObjectName, ObjectRef, Result};
use async_trait::async_trait;

/// Content type written on every processed object
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Object storage operations consumed by the batch job
///
/// Errors are reported as [`crate::domain::StorageError`] wrapped in
/// [`crate::domain::BatchError::Storage`]; callers do not interpret subtypes.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// List every object name in `bucket` starting with `prefix`
    ///
    /// An empty prefix lists the whole bucket. Implementations must exhaust all
    /// result pages.
    async fn list(&self, bucket: &BucketName, prefix: &str) -> Result<Vec<ObjectName>>;

    /// Download the full body of `object` into memory
    async fn download(&self, object: &ObjectRef) -> Result<Vec<u8>>;

    /// Write `data` to `object` with the given content type, replacing any existing object
    async fn upload(&self, object: &ObjectRef, content_type: &str, data: Vec<u8>) -> Result<()>;
}
