//! Domain error types
//!
//! This module defines the error hierarchy for the batch job.
//! Errors are domain-specific and don't expose storage SDK types.

use thiserror::Error;

/// Main batch error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Object body was not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(String),

    /// Logging initialisation errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Storage gateway errors
///
/// Each variant carries the identity of the bucket (and object, where one is
/// involved) plus the backend's own message.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to construct or authenticate the storage client
    #[error("Failed to create storage client: {0}")]
    Client(String),

    /// Listing a bucket failed
    #[error("Failed to list bucket {bucket}: {message}")]
    ListFailed { bucket: String, message: String },

    /// Downloading an object failed
    #[error("Failed to download {bucket}/{object}: {message}")]
    DownloadFailed {
        bucket: String,
        object: String,
        message: String,
    },

    /// Uploading an object failed
    #[error("Failed to upload {bucket}/{object}: {message}")]
    UploadFailed {
        bucket: String,
        object: String,
        message: String,
    },
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        BatchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BatchError {
    fn from(err: serde_json::Error) -> Self {
        BatchError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BatchError {
    fn from(err: toml::de::Error) -> Self {
        BatchError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for BatchError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        BatchError::Decode(format!("invalid UTF-8: {err}"))
    }
}
