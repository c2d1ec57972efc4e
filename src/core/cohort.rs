//! Cohort classification and aggregation
//!
//! Folds per-patient risk scores into the three cohort membership lists.
//! Lists are built through `BTreeSet`, so output is sorted and
//! duplicate-free regardless of fetch order.

use crate::core::scoring::score_patient;
use crate::core::vitals::coerce_float;
use crate::domain::{CohortReport, PatientRecord, RiskScore};
use std::collections::BTreeSet;

/// Total score at or above which a patient is high-risk
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Temperature at or above which a patient is counted as febrile
pub const FEVER_THRESHOLD: f64 = 99.6;

/// Cohort membership decision for a single patient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub high_risk: bool,
    pub fever: bool,
    pub data_quality: bool,
}

/// Classifies one patient from its risk score and raw vitals
///
/// The fever screen re-parses the raw temperature as a plain float and
/// silently skips values that don't coerce — independent of the risk
/// engine's own temperature handling, which scores 0 with an issue.
/// A patient may land in zero, one, two, or all three cohorts.
pub fn classify(patient: &PatientRecord, risk: &RiskScore) -> Classification {
    let fever = coerce_float(patient.temperature.as_ref())
        .map(|temp| temp >= FEVER_THRESHOLD)
        .unwrap_or(false);

    Classification {
        high_risk: risk.total_score >= HIGH_RISK_THRESHOLD,
        fever,
        data_quality: risk.has_data_issues,
    }
}

/// Scores and classifies every fetched record into a [`CohortReport`]
///
/// Single pass over the records; duplicate identifiers collapse into one
/// membership entry and the lists come out lexicographically sorted.
pub fn build_report(patients: &[PatientRecord]) -> CohortReport {
    let mut high_risk = BTreeSet::new();
    let mut fever = BTreeSet::new();
    let mut data_quality = BTreeSet::new();

    for patient in patients {
        let risk = score_patient(patient);
        let decision = classify(patient, &risk);
        let id = patient.id();

        tracing::debug!(
            patient_id = %id,
            total_score = risk.total_score,
            high_risk = decision.high_risk,
            fever = decision.fever,
            data_quality = decision.data_quality,
            "Classified patient"
        );

        if decision.high_risk {
            high_risk.insert(id.to_string());
        }
        if decision.fever {
            fever.insert(id.to_string());
        }
        if decision.data_quality {
            data_quality.insert(id.to_string());
        }
    }

    CohortReport {
        high_risk_patients: high_risk.into_iter().collect(),
        fever_patients: fever.into_iter().collect(),
        data_quality_issues: data_quality.into_iter().collect(),
        total_patients: patients.len(),
    }
}
