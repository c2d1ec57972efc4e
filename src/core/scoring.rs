//! Risk rules engine
//!
//! Maps each parsed vital to an integer sub-score using fixed clinical
//! thresholds. Rules evaluate as a first-match-wins ordered sequence of
//! range predicates; invalid readings never error, they score 0 and
//! record an issue.

use crate::core::vitals::{
    parse_age, parse_blood_pressure, parse_temperature, Parsed,
};
use crate::domain::{PatientRecord, RiskScore};
use serde_json::Value;

/// Scores a raw blood pressure value
///
/// Requires both sides of the reading to parse; otherwise scores 0 with
/// an `"Invalid BP: <raw>"` issue. Thresholds:
///
/// | Category | Predicate | Score |
/// |---|---|---|
/// | Normal | systolic < 120 AND diastolic < 80 | 0 |
/// | Elevated | systolic 120-129 AND diastolic < 80 | 1 |
/// | Stage 1 | systolic 130-139 OR diastolic 80-89 | 2 |
/// | Stage 2 | systolic >= 140 OR diastolic >= 90 | 3 |
pub fn calculate_bp_risk(raw: Option<&Value>) -> (u8, Option<String>) {
    let bp = match parse_blood_pressure(raw) {
        Parsed::Valid(bp) => bp,
        Parsed::Invalid(reason) => return (0, Some(reason)),
    };

    if bp.systolic < 120 && bp.diastolic < 80 {
        return (0, None);
    }
    if (120..=129).contains(&bp.systolic) && bp.diastolic < 80 {
        return (1, None);
    }
    if (130..=139).contains(&bp.systolic) || (80..=89).contains(&bp.diastolic) {
        return (2, None);
    }
    if bp.systolic >= 140 || bp.diastolic >= 90 {
        return (3, None);
    }

    // Unreachable for well-formed integer readings, kept as a safety net
    (0, None)
}

/// Scores a raw temperature value
///
/// Invalid or missing readings score 0 with an issue. Valid readings
/// bucket at `<= 99.5` -> 0 and `99.6..=100.9` -> 1; everything that
/// falls through lands in the final branch and scores 2.
pub fn calculate_temp_risk(raw: Option<&Value>) -> (u8, Option<String>) {
    let temp = match parse_temperature(raw) {
        Parsed::Valid(temp) => temp,
        Parsed::Invalid(reason) => return (0, Some(reason)),
    };

    if temp <= 99.5 {
        (0, None)
    } else if (99.6..=100.9).contains(&temp) {
        (1, None)
    } else {
        (2, None)
    }
}

/// Scores a raw age value
///
/// Invalid or missing readings score 0 with an issue. Valid readings
/// bucket at `< 40` -> 0, `40..=65` -> 1, and `> 65` -> 2.
pub fn calculate_age_risk(raw: Option<&Value>) -> (u8, Option<String>) {
    let age = match parse_age(raw) {
        Parsed::Valid(age) => age,
        Parsed::Invalid(reason) => return (0, Some(reason)),
    };

    if age < 40 {
        (0, None)
    } else if age <= 65 {
        (1, None)
    } else {
        (2, None)
    }
}

/// Builds the complete risk score for one patient record
///
/// Runs all three scorers, concatenates issues in BP, temperature, age
/// order, and sums the sub-scores. Always produces a complete
/// [`RiskScore`] — data-quality problems are recorded, never raised.
pub fn score_patient(patient: &PatientRecord) -> RiskScore {
    let mut issues = Vec::new();

    let (bp_score, bp_issue) = calculate_bp_risk(patient.blood_pressure.as_ref());
    if let Some(issue) = bp_issue {
        issues.push(issue);
    }

    let (temp_score, temp_issue) = calculate_temp_risk(patient.temperature.as_ref());
    if let Some(issue) = temp_issue {
        issues.push(issue);
    }

    let (age_score, age_issue) = calculate_age_risk(patient.age.as_ref());
    if let Some(issue) = age_issue {
        issues.push(issue);
    }

    RiskScore {
        bp_score,
        temp_score,
        age_score,
        total_score: bp_score + temp_score + age_score,
        has_data_issues: !issues.is_empty(),
        issues,
    }
}
