//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{JobConfig, LogFormat};
use crate::domain::errors::BatchError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Environment variable naming the input bucket
pub const ENV_INPUT_BUCKET: &str = "INPUT_BUCKET";

/// Environment variable naming the output bucket
pub const ENV_OUTPUT_BUCKET: &str = "OUTPUT_BUCKET";

/// Environment variable pointing the storage client at an emulator
pub const ENV_STORAGE_EMULATOR_HOST: &str = "STORAGE_EMULATOR_HOST";

pub const ENV_LOG_LEVEL: &str = "CSV_BATCH_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "CSV_BATCH_LOG_FORMAT";
pub const ENV_DRY_RUN: &str = "CSV_BATCH_DRY_RUN";

/// Loads configuration from an optional TOML file and the process environment
///
/// This function:
/// 1. Starts from defaults, or parses the TOML file when a path is given
/// 2. Applies environment variable overrides
/// 3. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - A path is given but the file cannot be read
/// - TOML parsing fails
/// - An override has an unparseable value
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use csv_batch::config::loader::load_config;
///
/// let config = load_config(None).expect("Failed to load config");
/// println!("reading from {}", config.storage.input_bucket);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<JobConfig> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`], reading environment values through `lookup`
pub fn load_config_with_env<F>(path: Option<&Path>, lookup: F) -> Result<JobConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => JobConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;

    config.validate().map_err(|e| {
        BatchError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<JobConfig> {
    if !path.exists() {
        return Err(BatchError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BatchError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(toml::from_str(&contents)?)
}

/// Applies environment variable overrides
///
/// Unset and empty variables leave the current value in place.
fn apply_env_overrides<F>(config: &mut JobConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(val) = get(ENV_INPUT_BUCKET) {
        config.storage.input_bucket = val;
    }
    if let Some(val) = get(ENV_OUTPUT_BUCKET) {
        config.storage.output_bucket = val;
    }
    if let Some(val) = get(ENV_STORAGE_EMULATOR_HOST) {
        config.storage.endpoint = Some(normalize_endpoint(&val));
    }

    if let Some(val) = get(ENV_LOG_LEVEL) {
        config.logging.level = val;
    }
    if let Some(val) = get(ENV_LOG_FORMAT) {
        config.logging.format = val
            .parse::<LogFormat>()
            .map_err(|e| BatchError::Configuration(format!("{ENV_LOG_FORMAT}: {e}")))?;
    }

    if let Some(val) = get(ENV_DRY_RUN) {
        config.run.dry_run = val.parse::<bool>().map_err(|_| {
            BatchError::Configuration(format!(
                "{ENV_DRY_RUN} must be 'true' or 'false', got '{val}'"
            ))
        })?;
    }

    Ok(())
}

/// Emulators are commonly advertised as `host:port`
fn normalize_endpoint(value: &str) -> String {
    let value = value.trim().trim_end_matches('/');
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("http://{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = load_config_with_env(None, env(&[])).unwrap();
        assert_eq!(config, JobConfig::default());
    }

    #[test]
    fn test_bucket_env_overrides() {
        let config = load_config_with_env(
            None,
            env(&[("INPUT_BUCKET", "landing"), ("OUTPUT_BUCKET", "stamped")]),
        )
        .unwrap();

        assert_eq!(config.storage.input_bucket, "landing");
        assert_eq!(config.storage.output_bucket, "stamped");
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let config = load_config_with_env(None, env(&[("INPUT_BUCKET", "")])).unwrap();
        assert_eq!(config.storage.input_bucket, "csv-input-bucket");
    }

    #[test]
    fn test_emulator_host_normalized() {
        let config =
            load_config_with_env(None, env(&[("STORAGE_EMULATOR_HOST", "localhost:4443/")]))
                .unwrap();
        assert_eq!(
            config.storage.endpoint.as_deref(),
            Some("http://localhost:4443")
        );
    }

    #[test]
    fn test_logging_and_dry_run_overrides() {
        let config = load_config_with_env(
            None,
            env(&[
                ("CSV_BATCH_LOG_LEVEL", "debug"),
                ("CSV_BATCH_LOG_FORMAT", "json"),
                ("CSV_BATCH_DRY_RUN", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.run.dry_run);
    }

    #[test]
    fn test_invalid_dry_run_value() {
        let result = load_config_with_env(None, env(&[("CSV_BATCH_DRY_RUN", "yes")]));
        assert!(matches!(result, Err(BatchError::Configuration(_))));
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let result = load_config_with_env(None, env(&[("CSV_BATCH_LOG_LEVEL", "loud")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = Path::new("/nonexistent/csv-batch.toml");
        let result = load_config_with_env(Some(path), env(&[]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }
}
