//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use triage::config::load_config;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("TRIAGE_APPLICATION_LOG_LEVEL");
    std::env::remove_var("TRIAGE_API_BASE_URL");
    std::env::remove_var("TRIAGE_API_KEY");
    std::env::remove_var("TRIAGE_API_PAGE_SIZE");
    std::env::remove_var("TRIAGE_API_TIMEOUT_SECONDS");
    std::env::remove_var("TRIAGE_RETRY_MAX_RETRIES");
    std::env::remove_var("TRIAGE_RETRY_INITIAL_DELAY_MS");
    std::env::remove_var("TEST_ASSESSMENT_KEY");
}

fn write_temp_config(toml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
name = "triage"
log_level = "debug"

[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_full_config"
timeout_seconds = 15
submit_timeout_seconds = 45
page_size = 25
page_delay_ms = 100

[api.retry]
max_retries = 4
initial_delay_ms = 500
max_delay_ms = 8000
backoff_multiplier = 1.5

[logging]
local_enabled = true
local_path = "/tmp/triage"
local_rotation = "hourly"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.name, "triage");
    assert_eq!(config.application.log_level, "debug");

    assert_eq!(config.api.base_url, "https://assessment.example.com/api");
    assert_eq!(config.api.api_key.expose_secret().as_ref(), "ak_full_config");
    assert_eq!(config.api.timeout_seconds, 15);
    assert_eq!(config.api.submit_timeout_seconds, 45);
    assert_eq!(config.api.page_size, 25);
    assert_eq!(config.api.page_delay_ms, 100);

    assert_eq!(config.api.retry.max_retries, 4);
    assert_eq!(config.api.retry.initial_delay_ms, 500);
    assert_eq!(config.api.retry.max_delay_ms, 8000);
    assert_eq!(config.api.retry.backoff_multiplier, 1.5);

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/triage");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_minimal"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.name, "triage");
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.submit_timeout_seconds, 30);
    assert_eq!(config.api.page_size, 10);
    assert_eq!(config.api.page_delay_ms, 200);
    assert_eq!(config.api.retry.max_retries, 5);
    assert_eq!(config.api.retry.initial_delay_ms, 1000);
    assert_eq!(config.api.retry.max_delay_ms, 30000);
    assert_eq!(config.api.retry.backoff_multiplier, 2.0);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_in_secrets() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_ASSESSMENT_KEY", "ak_from_env");

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "${TEST_ASSESSMENT_KEY}"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.api.api_key.expose_secret().as_ref(), "ak_from_env");

    std::env::remove_var("TEST_ASSESSMENT_KEY");
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "${TRIAGE_UNSET_KEY_VAR}"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("TRIAGE_UNSET_KEY_VAR"));
}

#[test]
fn test_substitution_skips_commented_lines() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_literal"
# api_key = "${TRIAGE_COMMENTED_OUT_VAR}"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.api.api_key.expose_secret().as_ref(), "ak_literal");
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TRIAGE_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("TRIAGE_API_BASE_URL", "https://override.example.com/api");
    std::env::set_var("TRIAGE_API_KEY", "ak_override");
    std::env::set_var("TRIAGE_API_PAGE_SIZE", "50");
    std::env::set_var("TRIAGE_RETRY_MAX_RETRIES", "2");

    let toml_content = r#"
[application]
log_level = "info"

[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_file"
page_size = 10
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.api.base_url, "https://override.example.com/api");
    assert_eq!(config.api.api_key.expose_secret().as_ref(), "ak_override");
    assert_eq!(config.api.page_size, 50);
    assert_eq!(config.api.retry.max_retries, 2);

    cleanup_env_vars();
}

#[test]
fn test_invalid_page_size_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_test"
page_size = 0
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_page_size_above_cap_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_test"
page_size = 101
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_empty_api_key_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = ""
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "verbose"

[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_test"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_rotation_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[api]
base_url = "https://assessment.example.com/api"
api_key = "ak_test"

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "weekly"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_missing_config_file_fails() {
    let result = load_config("does-not-exist.toml");
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("not found"));
}

#[test]
fn test_malformed_toml_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_temp_config("this is not [valid toml");
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}
