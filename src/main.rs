// CSV Batch - Cloud Storage CSV stamping job
// Copyright (c) 2025 CSV Batch Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use csv_batch::adapters::storage::GcsGateway;
use csv_batch::cli::{exit_code, Cli};
use csv_batch::config::{load_config, JobConfig};
use csv_batch::core::batch::{BatchOrchestrator, BatchSettings, RunSummary};
use csv_batch::core::clock::{Clock, SystemClock};
use csv_batch::core::transform::RowTransformer;
use csv_batch::logging::init_logging;
use std::process;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(exit_code::CONFIGURATION);
        }
    };
    if let Err(e) = cli.apply_overrides(&mut config) {
        eprintln!("Error: {e}");
        process::exit(exit_code::CONFIGURATION);
    }

    let logging_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code::LOGGING);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting CSV batch processing job"
    );

    let code = match run(&config).await {
        Ok(summary) => {
            if cli.json {
                match summary.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(e) => tracing::warn!(error = %e, "Failed to serialize run summary"),
                }
            }
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Batch processing job failed");
            eprintln!("Error: {e:#}");
            exit_code::FATAL
        }
    };

    // process::exit skips destructors; flush file logs first.
    drop(logging_guard);
    process::exit(code);
}

/// Wire the storage client, transformer and orchestrator, then run once
async fn run(config: &JobConfig) -> anyhow::Result<RunSummary> {
    let settings = BatchSettings::from_config(config)?;

    let gateway = GcsGateway::new(&config.storage)
        .await
        .context("Failed to create storage client")?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let orchestrator = BatchOrchestrator::new(
        Arc::new(gateway),
        RowTransformer::new(clock.clone()),
        clock,
        settings,
    );

    Ok(orchestrator.run().await?)
}
