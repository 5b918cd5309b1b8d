//! Row transformation
//!
//! Appends two derived columns to newline-delimited CSV text: a UTC processing
//! timestamp and the literal status `Processed`. Fields are never parsed; each
//! line is an opaque string that only ever gets text appended to it.
//!
//! - The input is split on `\n` and exactly-empty segments are dropped.
//! - The first remaining line is the header and gets `,ProcessedTimestamp,Status`.
//!   It is not trimmed.
//! - Every other line is trimmed; whitespace-only lines are dropped, the rest get
//!   `,<yyyy-MM-dd HH:mm:ss>,Processed`. Each row reads the clock on its own.
//! - Output lines are joined with `\n`, without a trailing newline.

use crate::core::clock::Clock;
use std::sync::Arc;

/// Columns appended to the header line
pub const HEADER_SUFFIX: &str = ",ProcessedTimestamp,Status";

/// Status literal appended to every data row
pub const STATUS_PROCESSED: &str = "Processed";

/// chrono format of the per-row timestamp (`yyyy-MM-dd HH:mm:ss`)
pub const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of transforming one CSV document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedDocument {
    /// Augmented CSV text
    pub content: String,

    /// Number of data rows written (header excluded)
    pub data_rows: usize,
}

impl ProcessedDocument {
    /// Whether the document has no lines at all
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Stateless CSV row transformer
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::{TimeZone, Utc};
/// use csv_batch::core::clock::FixedClock;
/// use csv_batch::core::transform::RowTransformer;
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
/// let transformer = RowTransformer::new(Arc::new(clock));
///
/// assert_eq!(
///     transformer.transform("name,age\nAlice,30"),
///     "name,age,ProcessedTimestamp,Status\nAlice,30,2024-01-02 03:04:05,Processed"
/// );
/// ```
#[derive(Clone)]
pub struct RowTransformer {
    clock: Arc<dyn Clock>,
}

impl RowTransformer {
    /// Create a transformer stamping rows with `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Transform CSV text, returning only the augmented text
    pub fn transform(&self, text: &str) -> String {
        self.process(text).content
    }

    /// Transform CSV text, returning the augmented text and its data row count
    pub fn process(&self, text: &str) -> ProcessedDocument {
        tracing::debug!(bytes = text.len(), "Processing CSV data");

        let mut lines = text.split('\n').filter(|line| !line.is_empty());

        let Some(header) = lines.next() else {
            tracing::debug!("Empty document, nothing to transform");
            return ProcessedDocument::default();
        };

        let mut output = vec![format!("{header}{HEADER_SUFFIX}")];
        let mut data_rows = 0;

        for line in lines {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }

            let stamp = self.clock.now().format(ROW_TIMESTAMP_FORMAT);
            output.push(format!("{row},{stamp},{STATUS_PROCESSED}"));
            data_rows += 1;
        }

        tracing::info!(rows = data_rows, "Processed CSV rows");

        ProcessedDocument {
            content: output.join("\n"),
            data_rows,
        }
    }
}

impl std::fmt::Debug for RowTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowTransformer").finish_non_exhaustive()
    }
}
