//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Triage configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Application: {}", config.application.name);
                println!("  Log Level: {}", config.application.log_level);
                println!("  Assessment Service: {}", config.api.base_url);
                println!("  Page Size: {}", config.api.page_size);
                println!("  Max Retries: {}", config.api.retry.max_retries);
                println!(
                    "  Backoff: {}ms x{} (cap {}ms)",
                    config.api.retry.initial_delay_ms,
                    config.api.retry.backoff_multiplier,
                    config.api.retry.max_delay_ms
                );
                println!("  File Logging: {}", config.logging.local_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
