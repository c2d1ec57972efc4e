//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "triage.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Export TRIAGE_API_KEY with your assessment API key");
                println!("  3. Validate configuration: triage validate-config");
                println!("  4. Run the pipeline: triage run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# Triage Configuration File
# Patient risk triage pipeline

[application]
name = "triage"
log_level = "info"

[api]
# Base URL of the assessment service
base_url = "https://assessment.example.com/api"
# API key, substituted from the environment at load time
api_key = "${TRIAGE_API_KEY}"
# Records requested per page (1-100)
page_size = 10
# Pacing delay between successful pages
page_delay_ms = 200
# Per-request timeouts
timeout_seconds = 10
submit_timeout_seconds = 30

[api.retry]
# Attempts per page before giving up
max_retries = 5
# Exponential backoff: initial_delay_ms * backoff_multiplier^attempt
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

[logging]
# Rotating JSON file output in addition to the console
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_is_valid_toml() {
        let value: toml::Value = toml::from_str(InitArgs::starter_config()).unwrap();
        assert!(value.get("api").is_some());
        assert!(value.get("application").is_some());
    }
}
