// Triage - Patient Risk Triage Pipeline
// Copyright (c) 2025 Triage Contributors
// Licensed under the MIT License

//! # Triage - Patient Risk Triage Pipeline
//!
//! Triage retrieves paginated patient records from a remote assessment
//! service, computes a deterministic clinical risk score per patient from
//! three vital-sign fields, classifies patients into risk, fever and
//! data-quality cohorts, and submits the aggregated cohort lists back to
//! the service for grading.
//!
//! ## Architecture
//!
//! Triage follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (vital parsing, risk rules, cohorts, pipeline)
//! - [`adapters`] - Assessment service HTTP integration
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use triage::config::load_config;
//! use triage::core::pipeline::TriagePipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("triage.toml")?;
//!
//!     let pipeline = TriagePipeline::new(&config)?;
//!     let summary = pipeline.execute().await?;
//!
//!     println!("Processed {} patients", summary.total_patients);
//!     Ok(())
//! }
//! ```
//!
//! ## Scoring
//!
//! Each patient receives three independent sub-scores from fixed clinical
//! thresholds (blood pressure 0-3, temperature 0-2, age 0-2). Malformed
//! or missing vitals never abort a run: they score 0 and record a
//! data-quality issue, so every fetched record yields a complete
//! [`domain::RiskScore`].
//!
//! ## Error Handling
//!
//! Triage uses the [`domain::TriageError`] type for all errors:
//!
//! ```rust,no_run
//! use triage::domain::TriageError;
//!
//! fn example() -> Result<(), TriageError> {
//!     let config = triage::config::load_config("triage.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Triage uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting run");
//! warn!(patient_id = "P001", "Record has data-quality issues");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
