//! Core business logic for Triage.
//!
//! # Modules
//!
//! - [`vitals`] - Parsing of noisy vital-sign inputs
//! - [`scoring`] - Risk rules engine (sub-scores and issue tracking)
//! - [`cohort`] - Cohort classification and aggregation
//! - [`pipeline`] - Run orchestration: fetch, classify, submit
//! - [`summary`] - Run summary reporting
//!
//! # Pipeline Workflow
//!
//! 1. **Fetch**: retrieve all patient records page by page, retrying
//!    transient source failures
//! 2. **Score**: parse each record's vitals and apply the risk rules
//! 3. **Classify**: fold patients into the high-risk, fever and
//!    data-quality cohorts
//! 4. **Submit**: send the three sorted membership lists for grading
//! 5. **Report**: produce a run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use triage::config::load_config;
//! use triage::core::pipeline::TriagePipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("triage.toml")?;
//! let pipeline = TriagePipeline::new(&config)?;
//! let summary = pipeline.execute().await?;
//!
//! println!("Total patients: {}", summary.total_patients);
//! # Ok(())
//! # }
//! ```

pub mod cohort;
pub mod pipeline;
pub mod scoring;
pub mod summary;
pub mod vitals;
