//! Assessment service adapter
//!
//! HTTP integration with the remote assessment service: the paginated
//! patient source and the submission sink. The adapter isolates all
//! reqwest usage; the rest of the crate sees domain types and
//! [`crate::domain::ApiError`] only.

pub mod client;
pub mod models;

pub use client::AssessmentClient;
pub use models::{PatientPage, SubmissionOutcome};
