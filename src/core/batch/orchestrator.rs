//! Batch orchestrator - drives list → fetch → transform → upload
//!
//! Objects are processed strictly one after another. A failure on one object is
//! logged, recorded in the summary, and the loop moves on. Only a failure to list
//! the input bucket aborts the run.

use super::naming::output_name;
use super::summary::{FailureStage, FileOutcome, RunSummary};
use crate::adapters::storage::{StorageGateway, CSV_CONTENT_TYPE};
use crate::config::JobConfig;
use crate::core::clock::Clock;
use crate::core::transform::RowTransformer;
use crate::domain::{BatchError, BucketName, ObjectName, ObjectRef, Result};
use std::sync::Arc;
use std::time::Instant;

/// Buckets and flags for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    /// Bucket listed for CSV objects
    pub input_bucket: BucketName,

    /// Bucket receiving processed objects
    pub output_bucket: BucketName,

    /// Skip uploads
    pub dry_run: bool,
}

impl BatchSettings {
    /// Create settings from the loaded configuration
    pub fn from_config(config: &JobConfig) -> Result<Self> {
        Ok(Self {
            input_bucket: config.storage.input_bucket_name()?,
            output_bucket: config.storage.output_bucket_name()?,
            dry_run: config.run.dry_run,
        })
    }
}

/// Batch orchestrator
pub struct BatchOrchestrator {
    gateway: Arc<dyn StorageGateway>,
    transformer: RowTransformer,
    clock: Arc<dyn Clock>,
    settings: BatchSettings,
}

impl BatchOrchestrator {
    /// Create a new orchestrator
    ///
    /// `clock` names output objects; the transformer carries its own clock for
    /// row stamps.
    pub fn new(
        gateway: Arc<dyn StorageGateway>,
        transformer: RowTransformer,
        clock: Arc<dyn Clock>,
        settings: BatchSettings,
    ) -> Self {
        Self {
            gateway,
            transformer,
            clock,
            settings,
        }
    }

    /// Run the batch once
    ///
    /// # Errors
    ///
    /// Returns the storage error if the input bucket cannot be listed. Failures on
    /// individual objects never surface here; they are in the returned summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let settings = &self.settings;
        let mut summary = RunSummary::new(
            settings.input_bucket.clone(),
            settings.output_bucket.clone(),
            settings.dry_run,
        );

        tracing::info!(
            input_bucket = %settings.input_bucket,
            output_bucket = %settings.output_bucket,
            dry_run = settings.dry_run,
            "Processing CSV files from bucket"
        );

        let listed = match self.gateway.list(&settings.input_bucket, "").await {
            Ok(names) => names,
            Err(e) => {
                tracing::error!(
                    bucket = %settings.input_bucket,
                    error = %e,
                    "Failed to list objects in bucket"
                );
                return Err(e);
            }
        };

        summary.objects_listed = listed.len();
        let csv_files: Vec<ObjectName> = listed
            .into_iter()
            .filter(|name| {
                let keep = name.is_csv();
                if !keep {
                    tracing::debug!(object = %name, "Skipping non-CSV object");
                }
                keep
            })
            .collect();
        summary.csv_objects = csv_files.len();
        summary.skipped_non_csv = summary.objects_listed - summary.csv_objects;

        tracing::info!(
            bucket = %settings.input_bucket,
            listed = summary.objects_listed,
            csv = summary.csv_objects,
            "Listed input bucket"
        );

        for name in csv_files {
            let outcome = self.process_object(name).await;
            summary.record(outcome);
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Fetch, transform and upload one object
    async fn process_object(&self, name: ObjectName) -> FileOutcome {
        tracing::info!(object = %name, "Processing file");

        let source = ObjectRef::new(self.settings.input_bucket.clone(), name);

        let bytes = match self.gateway.download(&source).await {
            Ok(bytes) => bytes,
            Err(e) => return failed(source.name, FailureStage::Download, e),
        };
        tracing::debug!(object = %source.name, bytes = bytes.len(), "Downloaded file");

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => return failed(source.name, FailureStage::Decode, e.into()),
        };

        let document = self.transformer.process(&text);

        let target = ObjectRef::new(
            self.settings.output_bucket.clone(),
            output_name(&source.name, self.clock.now()),
        );

        if self.settings.dry_run {
            tracing::info!(
                object = %source.name,
                output = %target.name,
                rows = document.data_rows,
                "Dry run: skipping upload"
            );
            return FileOutcome::Processed {
                source: source.name,
                output: target.name,
                data_rows: document.data_rows,
                uploaded: false,
            };
        }

        if let Err(e) = self
            .gateway
            .upload(&target, CSV_CONTENT_TYPE, document.content.into_bytes())
            .await
        {
            return failed(source.name, FailureStage::Upload, e);
        }

        tracing::info!(
            object = %source.name,
            output = %target.name,
            rows = document.data_rows,
            "Successfully processed file"
        );

        FileOutcome::Processed {
            source: source.name,
            output: target.name,
            data_rows: document.data_rows,
            uploaded: true,
        }
    }
}

fn failed(source: ObjectName, stage: FailureStage, error: BatchError) -> FileOutcome {
    tracing::error!(
        object = %source,
        stage = %stage,
        error = %error,
        "Failed to process file"
    );
    FileOutcome::Failed {
        source,
        stage,
        reason: error.to_string(),
    }
}
