//! Risk scoring and cohort result types

use serde::Serialize;

/// Per-patient risk score
///
/// Constructed once by [`crate::core::scoring::score_patient`] and never
/// mutated afterwards. Sub-scores stay within their discrete ranges
/// (BP 0-3, temperature 0-2, age 0-2) and the total is always their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskScore {
    /// Blood pressure sub-score (0-3)
    pub bp_score: u8,

    /// Temperature sub-score (0-2)
    pub temp_score: u8,

    /// Age sub-score (0-2)
    pub age_score: u8,

    /// Sum of the three sub-scores
    pub total_score: u8,

    /// True iff any vital was invalid or missing
    pub has_data_issues: bool,

    /// Human-readable issue descriptions, ordered BP, temperature, age
    pub issues: Vec<String>,
}

/// Aggregated cohort membership for one pipeline run
///
/// Each membership list is lexicographically sorted and duplicate-free,
/// so output is deterministic regardless of fetch order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CohortReport {
    /// Patients with total risk score >= 4
    pub high_risk_patients: Vec<String>,

    /// Patients whose raw temperature parses as a float >= 99.6
    pub fever_patients: Vec<String>,

    /// Patients with at least one invalid or missing vital
    pub data_quality_issues: Vec<String>,

    /// Number of records processed, duplicates included
    #[serde(skip)]
    pub total_patients: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_report_serializes_only_the_three_lists() {
        let report = CohortReport {
            high_risk_patients: vec!["P001".to_string()],
            fever_patients: vec![],
            data_quality_issues: vec!["P002".to_string()],
            total_patients: 7,
        };

        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("high_risk_patients"));
        assert!(obj.contains_key("fever_patients"));
        assert!(obj.contains_key("data_quality_issues"));
        assert!(!obj.contains_key("total_patients"));
    }
}
