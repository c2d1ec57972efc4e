//! Run command implementation
//!
//! This module implements the `run` command: fetch all patients, build
//! the cohort report, and submit it for grading.

use crate::config::load_config;
use crate::core::pipeline::TriagePipeline;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Build and print the cohort report without submitting
    #[arg(long)]
    pub dry_run: bool,

    /// Override the number of records requested per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting triage run");

        let mut config = load_config(config_path)?;

        if let Some(page_size) = self.page_size {
            tracing::info!(page_size = page_size, "Overriding page size from CLI");
            config.api.page_size = page_size;
        }

        let pipeline = TriagePipeline::new(&config)?.with_dry_run(self.dry_run);
        let summary = pipeline.execute().await?;

        println!();
        println!("Triage Run Summary");
        println!("------------------");
        println!("Total patients:      {}", summary.total_patients);
        println!(
            "High-risk (>= 4):    {}",
            summary.report.high_risk_patients.len()
        );
        for id in &summary.report.high_risk_patients {
            println!("  {id}");
        }
        println!(
            "Fever (>= 99.6F):    {}",
            summary.report.fever_patients.len()
        );
        for id in &summary.report.fever_patients {
            println!("  {id}");
        }
        println!(
            "Data quality issues: {}",
            summary.report.data_quality_issues.len()
        );
        for id in &summary.report.data_quality_issues {
            println!("  {id}");
        }
        println!("Duration:            {:.1}s", summary.duration.as_secs_f64());

        if summary.total_patients == 0 {
            println!();
            println!("No patients fetched.");
            return Ok(1);
        }

        if self.dry_run {
            println!();
            println!("Dry run - nothing was submitted.");
            return Ok(0);
        }

        match (&summary.submission, &summary.submission_error) {
            (Some(outcome), _) if outcome.success => {
                println!();
                println!("Assessment submitted successfully.");
                if let Some(results) = &outcome.results {
                    println!(
                        "Score: {} ({:.0}%) - {}",
                        results.score,
                        results.percentage,
                        results.status.as_deref().unwrap_or("unknown")
                    );
                }
                Ok(0)
            }
            (Some(outcome), _) => {
                println!();
                println!(
                    "Submission rejected: {}",
                    outcome.message.as_deref().unwrap_or("unknown error")
                );
                Ok(1)
            }
            (None, Some(error)) => {
                println!();
                println!("Submission failed: {error}");
                Ok(1)
            }
            (None, None) => Ok(1),
        }
    }
}
