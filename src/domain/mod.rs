//! Domain models and types for Triage.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Wire-shaped records** ([`PatientRecord`]) keeping raw vital values
//! - **Scoring results** ([`RiskScore`], [`CohortReport`])
//! - **Error types** ([`TriageError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use triage::domain::{Result, TriageError};
//!
//! fn example() -> Result<()> {
//!     let config = triage::config::load_config("triage.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod patient;
pub mod result;
pub mod risk;

// Re-export commonly used types for convenience
pub use errors::{ApiError, TriageError};
pub use patient::{PatientRecord, UNKNOWN_PATIENT_ID};
pub use result::Result;
pub use risk::{CohortReport, RiskScore};
