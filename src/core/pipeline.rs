//! Pipeline orchestration
//!
//! Coordinates one full run: fetch all patients, build the cohort
//! report, submit it for grading, and produce a [`RunSummary`]. Each
//! stage runs to completion before the next begins; nothing here is
//! parallel.

use crate::adapters::api::AssessmentClient;
use crate::config::TriageConfig;
use crate::core::cohort::build_report;
use crate::core::summary::RunSummary;
use crate::domain::Result;
use std::time::Instant;

/// Pipeline coordinator
pub struct TriagePipeline {
    client: AssessmentClient,
    /// When set, build and log the report but skip the submission call
    dry_run: bool,
}

impl TriagePipeline {
    /// Creates a pipeline from configuration
    pub fn new(config: &TriageConfig) -> Result<Self> {
        let client = AssessmentClient::new(&config.api)?;
        Ok(Self {
            client,
            dry_run: false,
        })
    }

    /// Enables or disables dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Executes one full run
    ///
    /// Never fails on data quality or submission rejection — those are
    /// recorded in the summary. An `Err` here means the pipeline itself
    /// could not run (for example the HTTP client failed to build).
    pub async fn execute(&self) -> Result<RunSummary> {
        let start = Instant::now();

        let patients = self.client.fetch_all_patients().await;

        if patients.is_empty() {
            tracing::warn!("No patients fetched, skipping classification and submission");
            return Ok(RunSummary::empty(start.elapsed()));
        }

        let report = build_report(&patients);

        tracing::info!(
            total_patients = report.total_patients,
            high_risk = report.high_risk_patients.len(),
            fever = report.fever_patients.len(),
            data_quality = report.data_quality_issues.len(),
            "Built cohort report"
        );

        let mut summary = RunSummary {
            total_patients: patients.len(),
            report,
            submission: None,
            submission_error: None,
            duration: start.elapsed(),
        };

        if self.dry_run {
            tracing::info!("Dry-run mode, skipping submission");
            summary.duration = start.elapsed();
            return Ok(summary);
        }

        match self.client.submit_assessment(&summary.report).await {
            Ok(outcome) => {
                if outcome.success {
                    if let Some(results) = &outcome.results {
                        tracing::info!(
                            score = results.score,
                            percentage = results.percentage,
                            status = results.status.as_deref().unwrap_or("unknown"),
                            "Assessment graded"
                        );
                        if let Some(feedback) = &results.feedback {
                            for strength in &feedback.strengths {
                                tracing::info!(feedback = %strength, "Grader strength");
                            }
                            for issue in &feedback.issues {
                                tracing::warn!(feedback = %issue, "Grader issue");
                            }
                        }
                    }
                } else {
                    tracing::warn!(
                        message = outcome.message.as_deref().unwrap_or("unknown"),
                        "Submission rejected by grader"
                    );
                }
                summary.submission = Some(outcome);
            }
            Err(e) => {
                tracing::error!(error = %e, "Submission failed");
                summary.submission_error = Some(e.to_string());
            }
        }

        summary.duration = start.elapsed();
        Ok(summary)
    }
}
