//! Run summary and reporting

use crate::adapters::api::SubmissionOutcome;
use crate::domain::CohortReport;
use std::time::Duration;

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of patient records fetched (after any truncation)
    pub total_patients: usize,

    /// The cohort report built from the fetched records
    pub report: CohortReport,

    /// Grading outcome, `None` when nothing was submitted
    pub submission: Option<SubmissionOutcome>,

    /// Failure message when the submission was attempted and rejected
    pub submission_error: Option<String>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a summary for a run that fetched nothing and submitted nothing
    pub fn empty(duration: Duration) -> Self {
        Self {
            total_patients: 0,
            report: CohortReport::default(),
            submission: None,
            submission_error: None,
            duration,
        }
    }

    /// Whether the run completed with an accepted submission
    pub fn is_success(&self) -> bool {
        self.submission_error.is_none()
            && self
                .submission
                .as_ref()
                .map(|outcome| outcome.success)
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_is_not_success() {
        let summary = RunSummary::empty(Duration::from_secs(1));
        assert_eq!(summary.total_patients, 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_accepted_submission_is_success() {
        let mut summary = RunSummary::empty(Duration::from_secs(1));
        summary.submission = Some(SubmissionOutcome {
            success: true,
            message: None,
            results: None,
        });
        assert!(summary.is_success());
    }

    #[test]
    fn test_submission_error_is_failure() {
        let mut summary = RunSummary::empty(Duration::from_secs(1));
        summary.submission_error = Some("HTTP 503: unavailable".to_string());
        assert!(!summary.is_success());
    }
}
