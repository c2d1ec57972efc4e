//! Configuration management for Triage.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Triage uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `TRIAGE_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use triage::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("triage.toml")?;
//! println!("Assessment service: {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "triage"
//! log_level = "info"
//!
//! [api]
//! base_url = "https://assessment.example.com/api"
//! api_key = "${TRIAGE_API_KEY}"
//! page_size = 10
//! page_delay_ms = 200
//!
//! [api.retry]
//! max_retries = 5
//! initial_delay_ms = 1000
//! backoff_multiplier = 2.0
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApiConfig, ApplicationConfig, LoggingConfig, RetryConfig, TriageConfig};
pub use secret::{secret_string, SecretString, SecretValue};
