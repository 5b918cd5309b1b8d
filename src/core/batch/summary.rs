//! Run summary and per-object outcomes
//!
//! Each CSV object ends in exactly one [`FileOutcome`]. Outcomes are collected
//! in listing order into a [`RunSummary`].

use crate::domain::{BucketName, ObjectName, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Pipeline step at which an object failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// Fetching the object body
    Download,
    /// Interpreting the body as UTF-8
    Decode,
    /// Writing the processed object
    Upload,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download => write!(f, "download"),
            Self::Decode => write!(f, "decode"),
            Self::Upload => write!(f, "upload"),
        }
    }
}

/// What happened to one CSV object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    /// Transformed, and uploaded unless this was a dry run
    Processed {
        source: ObjectName,
        output: ObjectName,
        data_rows: usize,
        uploaded: bool,
    },
    /// Skipped after a failure; the batch carried on
    Failed {
        source: ObjectName,
        stage: FailureStage,
        reason: String,
    },
}

impl FileOutcome {
    /// The input object this outcome is about
    pub fn source(&self) -> &ObjectName {
        match self {
            Self::Processed { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    /// True for [`FileOutcome::Processed`]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

/// Summary of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Bucket that was listed
    pub input_bucket: BucketName,

    /// Bucket receiving processed objects
    pub output_bucket: BucketName,

    /// Objects returned by the listing
    pub objects_listed: usize,

    /// Listed objects with a `.csv` suffix
    pub csv_objects: usize,

    /// Listed objects ignored for not being CSV
    pub skipped_non_csv: usize,

    /// CSV objects that completed their pipeline
    pub files_processed: usize,

    /// CSV objects that failed at some stage
    pub files_failed: usize,

    /// Data rows written across all processed files
    pub data_rows: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Whether uploads were skipped
    pub dry_run: bool,

    /// Per-object outcomes in processing order
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    /// Create a new empty run summary
    pub fn new(input_bucket: BucketName, output_bucket: BucketName, dry_run: bool) -> Self {
        Self {
            input_bucket,
            output_bucket,
            objects_listed: 0,
            csv_objects: 0,
            skipped_non_csv: 0,
            files_processed: 0,
            files_failed: 0,
            data_rows: 0,
            duration: Duration::from_secs(0),
            dry_run,
            outcomes: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome of one object and update the counters
    pub fn record(&mut self, outcome: FileOutcome) {
        match &outcome {
            FileOutcome::Processed { data_rows, .. } => {
                self.files_processed += 1;
                self.data_rows += data_rows;
            }
            FileOutcome::Failed { .. } => self.files_failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Whether any object failed
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Failed outcomes, in processing order
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            input_bucket = %self.input_bucket,
            output_bucket = %self.output_bucket,
            objects_listed = self.objects_listed,
            csv_objects = self.csv_objects,
            processed = self.files_processed,
            failed = self.files_failed,
            data_rows = self.data_rows,
            duration_ms = self.duration.as_millis() as u64,
            dry_run = self.dry_run,
            "CSV batch processing job completed"
        );

        if self.has_failures() {
            tracing::warn!(
                failed = self.files_failed,
                "CSV batch processing job completed with failed files"
            );
            for failure in self.failures() {
                if let FileOutcome::Failed {
                    source,
                    stage,
                    reason,
                } = failure
                {
                    tracing::warn!(object = %source, stage = %stage, reason = %reason, "Failed file");
                }
            }
        }
    }
}
