//! Storage identifier types with validation
//!
//! Newtype wrappers for bucket and object names so the two can't be mixed up,
//! plus [`ObjectRef`], the bucket + object pair that names one stored item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucket name newtype wrapper
///
/// # Examples
///
/// ```
/// use csv_batch::domain::ids::BucketName;
///
/// let bucket = BucketName::new("csv-input-bucket").unwrap();
/// assert_eq!(bucket.as_str(), "csv-input-bucket");
/// assert!(BucketName::new("my bucket").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketName(String);

impl BucketName {
    /// Creates a new BucketName, rejecting empty names and names containing whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Bucket name cannot be empty".to_string());
        }
        if name.chars().any(char::is_whitespace) {
            return Err(format!("Bucket name cannot contain whitespace: '{name}'"));
        }
        Ok(Self(name))
    }

    /// Returns the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BucketName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object name newtype wrapper
///
/// Object names are opaque keys; they may contain `/` and any other character
/// the backend allows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectName(String);

impl ObjectName {
    /// Creates a new ObjectName
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.is_empty() {
            return Err("Object name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the object name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A new name with `prefix` prepended
    pub fn prefixed(&self, prefix: impl AsRef<str>) -> Self {
        Self(format!("{}{}", prefix.as_ref(), self.0))
    }

    /// Whether the name ends in `.csv`, ignoring ASCII case
    ///
    /// ```
    /// use csv_batch::domain::ids::ObjectName;
    ///
    /// assert!(ObjectName::new("data/Report.CSV").unwrap().is_csv());
    /// assert!(!ObjectName::new("notes.txt").unwrap().is_csv());
    /// ```
    pub fn is_csv(&self) -> bool {
        let bytes = self.0.as_bytes();
        bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".csv")
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bucket + object pair identifying one stored item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Bucket holding the object
    pub bucket: BucketName,

    /// Object name within the bucket
    pub name: ObjectName,
}

impl ObjectRef {
    /// Creates a new object reference
    pub fn new(bucket: BucketName, name: ObjectName) -> Self {
        Self { bucket, name }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.name)
    }
}
