//! Result type alias for the batch job

use super::errors::BatchError;

/// Result type alias using `BatchError` as the error type
///
/// # Examples
///
/// ```
/// use csv_batch::domain::result::Result;
/// use csv_batch::domain::errors::BatchError;
///
/// fn failing_function() -> Result<()> {
///     Err(BatchError::Configuration("missing bucket".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BatchError>;
