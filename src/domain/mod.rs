//! Domain types for the batch job.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`BucketName`], [`ObjectName`], [`ObjectRef`])
//! - **Error types** ([`BatchError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! ```rust
//! use csv_batch::domain::{BucketName, ObjectName, ObjectRef};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let object = ObjectRef::new(BucketName::new("csv-input-bucket")?, ObjectName::new("a.csv")?);
//! assert_eq!(object.to_string(), "gs://csv-input-bucket/a.csv");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::{BatchError, StorageError};
pub use ids::{BucketName, ObjectName, ObjectRef};
pub use result::Result;
