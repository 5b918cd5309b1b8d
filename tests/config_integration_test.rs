//! Integration tests for configuration loading and validation
//!
//! Environment values are injected through `load_config_with_env` so these tests
//! never touch the process environment.

use csv_batch::config::{load_config_with_env, LogFormat, DEFAULT_INPUT_BUCKET};
use csv_batch::domain::BatchError;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let file = write_config(
        r#"
[storage]
input_bucket = "landing-zone"
output_bucket = "stamped-zone"
endpoint = "http://localhost:4443"

[logging]
level = "debug"
format = "json"
local_enabled = true
local_path = "/var/log/csv-batch"
local_rotation = "hourly"

[run]
dry_run = true
"#,
    );

    let config = load_config_with_env(Some(file.path()), no_env).unwrap();

    assert_eq!(config.storage.input_bucket, "landing-zone");
    assert_eq!(config.storage.output_bucket, "stamped-zone");
    assert_eq!(
        config.storage.endpoint.as_deref(),
        Some("http://localhost:4443")
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.run.dry_run);
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(
        r#"
[storage]
input_bucket = "from-file"
output_bucket = "also-from-file"
"#,
    );

    let config =
        load_config_with_env(Some(file.path()), env(&[("INPUT_BUCKET", "from-env")])).unwrap();

    assert_eq!(config.storage.input_bucket, "from-env");
    assert_eq!(config.storage.output_bucket, "also-from-file");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");

    let config = load_config_with_env(Some(file.path()), no_env).unwrap();

    assert_eq!(config.storage.input_bucket, DEFAULT_INPUT_BUCKET);
    assert_eq!(config.storage.output_bucket, "csv-processed-bucket");
    assert!(!config.run.dry_run);
}

#[test]
fn test_invalid_toml_is_configuration_error() {
    let file = write_config("[storage\ninput_bucket = ");

    let result = load_config_with_env(Some(file.path()), no_env);

    assert!(matches!(result, Err(BatchError::Configuration(_))));
}

#[test]
fn test_invalid_bucket_in_file_fails_validation() {
    let file = write_config(
        r#"
[storage]
input_bucket = "has space"
"#,
    );

    let err = load_config_with_env(Some(file.path()), no_env).unwrap_err();

    assert!(err.to_string().contains("storage.input_bucket"));
}

#[test]
fn test_invalid_log_format_in_file() {
    let file = write_config(
        r#"
[logging]
format = "xml"
"#,
    );

    assert!(load_config_with_env(Some(file.path()), no_env).is_err());
}
