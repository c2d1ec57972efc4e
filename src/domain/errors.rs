//! Domain error types
//!
//! This module defines the error hierarchy for Triage. All errors are
//! domain-specific and don't expose third-party types such as reqwest errors.

use thiserror::Error;

/// Main Triage error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Assessment API errors (fetch side)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Submission errors (non-200 or transport failure on submit)
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Assessment-API-specific errors
///
/// Errors that occur when talking to the remote patient source. Each
/// variant aborts the current fetch while keeping partial results;
/// transient failures are retried inside the client before one of
/// these surfaces.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response body could not be parsed
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Non-retryable HTTP status
    #[error("Request failed with status {status}: {message}")]
    Fatal { status: u16, message: String },

    /// Retry budget exhausted for a page
    #[error("Retries exhausted after {attempts} attempts for page {page}")]
    RetriesExhausted { page: u32, attempts: usize },
}

impl ApiError {
    /// Whether the error means the retry budget ran out, as opposed to a
    /// hard server rejection. Both truncate the fetch; callers log them
    /// differently.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, ApiError::RetriesExhausted { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        TriageError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        TriageError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TriageError {
    fn from(err: toml::de::Error) -> Self {
        TriageError::Configuration(format!("TOML parse error: {err}"))
    }
}
