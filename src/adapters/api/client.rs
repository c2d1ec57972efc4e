//! Assessment service HTTP client
//!
//! Implements the retrying paginated fetch against `/patients` and the
//! one-shot submission to `/submit-assessment`. Transient failures
//! (429/500/503 and transport errors) retry with exponential backoff up
//! to the configured attempt cap; any other non-200 status is fatal for
//! the fetch. Submission is deliberately not retried.

use crate::adapters::api::models::{PatientPage, SubmissionOutcome};
use crate::config::{ApiConfig, RetryConfig};
use crate::domain::{ApiError, CohortReport, PatientRecord, Result, TriageError};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// HTTP statuses worth retrying: rate limit and transient server errors
const RETRYABLE_STATUSES: [u16; 3] = [429, 500, 503];

/// Client for the assessment service
///
/// Holds one reqwest client for the whole run. All credentials and
/// endpoints come from [`ApiConfig`]; nothing here is global, so tests
/// can point the client at a fake server.
///
/// # Example
///
/// ```no_run
/// use triage::adapters::api::AssessmentClient;
/// use triage::config::{ApiConfig, RetryConfig, secret_string};
///
/// # async fn example() -> triage::domain::Result<()> {
/// let config = ApiConfig {
///     base_url: "https://assessment.example.com/api".to_string(),
///     api_key: secret_string("ak_key".to_string()),
///     timeout_seconds: 10,
///     submit_timeout_seconds: 30,
///     page_size: 10,
///     page_delay_ms: 200,
///     retry: RetryConfig::default(),
/// };
/// let client = AssessmentClient::new(&config)?;
/// let patients = client.fetch_all_patients().await;
/// # Ok(())
/// # }
/// ```
pub struct AssessmentClient {
    /// Base URL of the assessment service, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Configuration for paging, timeouts and retry behavior
    config: ApiConfig,
}

impl AssessmentClient {
    /// Creates a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                TriageError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        })
    }

    /// Returns the base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of patients, retrying transient failures
    ///
    /// Retries on transport errors and on 429/500/503 with exponentially
    /// increasing delay, up to `retry.max_retries` attempts. Any other
    /// non-200 status returns [`ApiError::Fatal`] immediately.
    async fn fetch_page(&self, page: u32) -> std::result::Result<PatientPage, ApiError> {
        let url = format!("{}/patients", self.base_url);
        let retry = &self.config.retry;

        for attempt in 0..retry.max_retries {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("page", page.to_string()),
                    ("limit", self.config.page_size.to_string()),
                ])
                .header("x-api-key", self.config.api_key.expose_secret().as_ref())
                .send()
                .await;

            match response {
                Ok(resp) => {
                    let status = resp.status();

                    if status == StatusCode::OK {
                        return resp
                            .json::<PatientPage>()
                            .await
                            .map_err(|e| ApiError::InvalidResponse(e.to_string()));
                    }

                    if RETRYABLE_STATUSES.contains(&status.as_u16()) {
                        let delay = retry.delay_for_attempt(attempt);
                        tracing::warn!(
                            status = status.as_u16(),
                            page = page,
                            attempt = attempt + 1,
                            max_retries = retry.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Transient status from source, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    let body = resp.text().await.unwrap_or_default();
                    return Err(ApiError::Fatal {
                        status: status.as_u16(),
                        message: body,
                    });
                }
                Err(e) => {
                    let delay = retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        page = page,
                        attempt = attempt + 1,
                        max_retries = retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            page,
            attempts: retry.max_retries,
        })
    }

    /// Fetches every patient record, page by page
    ///
    /// Pages concatenate in fetch order; no deduplication happens here.
    /// The loop stops on: a fetch error for a page (partial results are
    /// kept), a response without the `data` array, an empty page, or
    /// pagination reporting no further pages. A small pacing delay runs
    /// between successful pages.
    pub async fn fetch_all_patients(&self) -> Vec<PatientRecord> {
        let mut all_patients = Vec::new();
        let mut page: u32 = 1;

        tracing::info!(page_size = self.config.page_size, "Fetching patient data");

        loop {
            let result = match self.fetch_page(page).await {
                Ok(result) => result,
                Err(e) if e.is_exhaustion() => {
                    tracing::warn!(page = page, error = %e, "Giving up on page, keeping partial results");
                    break;
                }
                Err(e) => {
                    tracing::error!(page = page, error = %e, "Fetch aborted, keeping partial results");
                    break;
                }
            };

            let Some(patients) = result.data else {
                tracing::warn!(page = page, "Response missing data container, stopping");
                break;
            };

            if patients.is_empty() {
                tracing::info!(page = page, "Empty page, no more patients");
                break;
            }

            let fetched = patients.len();
            all_patients.extend(patients);
            tracing::info!(
                page = page,
                fetched = fetched,
                total = all_patients.len(),
                "Fetched page"
            );

            let has_next = result.pagination.map(|p| p.has_next).unwrap_or(false);
            if !has_next {
                tracing::info!("Last page reached");
                break;
            }

            page += 1;
            tokio::time::sleep(Duration::from_millis(self.config.page_delay_ms)).await;
        }

        tracing::info!(total = all_patients.len(), "Fetch complete");
        all_patients
    }

    /// Submits the cohort report for grading
    ///
    /// Sends exactly the three sorted membership lists. Not subject to
    /// the fetch retry policy: a non-200 response or transport failure
    /// comes back as a single [`TriageError::Submission`].
    pub async fn submit_assessment(&self, report: &CohortReport) -> Result<SubmissionOutcome> {
        let url = format!("{}/submit-assessment", self.base_url);

        tracing::info!(
            high_risk = report.high_risk_patients.len(),
            fever = report.fever_patients.len(),
            data_quality = report.data_quality_issues.len(),
            "Submitting assessment results"
        );

        let resp = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.config.submit_timeout_seconds))
            .header("x-api-key", self.config.api_key.expose_secret().as_ref())
            .json(report)
            .send()
            .await
            .map_err(|e| TriageError::Submission(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(TriageError::Submission(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        resp.json::<SubmissionOutcome>()
            .await
            .map_err(|e| TriageError::Submission(format!("Invalid grading response: {e}")))
    }
}
