//! Wire models for the assessment service
//!
//! Request and response shapes for the two endpoints the pipeline
//! consumes: the paginated `/patients` source and the
//! `/submit-assessment` sink. Response models stay permissive — optional
//! containers instead of hard requirements — because a missing `data`
//! array is a pagination stop signal, not a protocol error.

use crate::domain::PatientRecord;
use serde::{Deserialize, Serialize};

/// One page of the `/patients` listing
#[derive(Debug, Clone, Deserialize)]
pub struct PatientPage {
    /// Records on this page; absent means the listing is exhausted
    #[serde(default)]
    pub data: Option<Vec<PatientRecord>>,

    /// Pagination cursor; absent is treated as "no further pages"
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to each page
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    /// Whether another page follows this one
    #[serde(rename = "hasNext", default)]
    pub has_next: bool,
}

/// Grading response returned by `/submit-assessment` on HTTP 200
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionOutcome {
    /// Whether the service accepted and graded the submission
    #[serde(default)]
    pub success: bool,

    /// Service message, usually only set on rejection
    #[serde(default)]
    pub message: Option<String>,

    /// Score breakdown and feedback, present on success
    #[serde(default)]
    pub results: Option<GradingResults>,
}

/// Graded results for a submission
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradingResults {
    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub percentage: f64,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub attempt_number: Option<u32>,

    #[serde(default)]
    pub remaining_attempts: Option<u32>,

    #[serde(default)]
    pub breakdown: Option<ScoreBreakdown>,

    #[serde(default)]
    pub feedback: Option<Feedback>,
}

/// Per-cohort score breakdown
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub high_risk: Option<CategoryScore>,

    #[serde(default)]
    pub fever: Option<CategoryScore>,

    #[serde(default)]
    pub data_quality: Option<CategoryScore>,
}

/// Score detail for one cohort category
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryScore {
    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub max: f64,

    #[serde(default)]
    pub correct: u32,

    #[serde(default)]
    pub submitted: u32,
}

/// Free-form grader feedback
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Feedback {
    #[serde(default)]
    pub strengths: Vec<String>,

    #[serde(default)]
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patient_page_deserializes() {
        let page: PatientPage = serde_json::from_value(json!({
            "data": [
                {"patient_id": "P001", "blood_pressure": "120/80", "temperature": 98.6, "age": 45}
            ],
            "pagination": {"hasNext": true}
        }))
        .unwrap();

        assert_eq!(page.data.as_ref().unwrap().len(), 1);
        assert!(page.pagination.unwrap().has_next);
    }

    #[test]
    fn test_patient_page_without_data_container() {
        let page: PatientPage = serde_json::from_value(json!({"error": "gone"})).unwrap();
        assert!(page.data.is_none());
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_pagination_missing_has_next_defaults_false() {
        let page: PatientPage = serde_json::from_value(json!({
            "data": [],
            "pagination": {}
        }))
        .unwrap();
        assert!(!page.pagination.unwrap().has_next);
    }

    #[test]
    fn test_submission_outcome_full_response() {
        let outcome: SubmissionOutcome = serde_json::from_value(json!({
            "success": true,
            "results": {
                "score": 95.0,
                "percentage": 95.0,
                "status": "PASSED",
                "attempt_number": 1,
                "remaining_attempts": 2,
                "breakdown": {
                    "high_risk": {"score": 40.0, "max": 40.0, "correct": 8, "submitted": 8},
                    "fever": {"score": 30.0, "max": 30.0, "correct": 6, "submitted": 6},
                    "data_quality": {"score": 25.0, "max": 30.0, "correct": 5, "submitted": 6}
                },
                "feedback": {
                    "strengths": ["High-risk cohort exact"],
                    "issues": ["One extra data-quality id"]
                }
            }
        }))
        .unwrap();

        assert!(outcome.success);
        let results = outcome.results.unwrap();
        assert_eq!(results.score, 95.0);
        assert_eq!(results.status.as_deref(), Some("PASSED"));
        let breakdown = results.breakdown.unwrap();
        assert_eq!(breakdown.high_risk.unwrap().correct, 8);
        assert_eq!(results.feedback.unwrap().issues.len(), 1);
    }

    #[test]
    fn test_submission_outcome_rejection() {
        let outcome: SubmissionOutcome = serde_json::from_value(json!({
            "success": false,
            "message": "No attempts remaining"
        }))
        .unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("No attempts remaining"));
        assert!(outcome.results.is_none());
    }
}
