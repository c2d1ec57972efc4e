//! Patient record wire model
//!
//! Records arrive from the assessment service in a deliberately noisy shape:
//! every vital may be a string, a number, `null`, or absent entirely. The
//! record keeps the raw [`serde_json::Value`] for each vital so that all
//! coercion policy lives in [`crate::core::vitals`] rather than in
//! deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier used when a record arrives without a `patient_id`
pub const UNKNOWN_PATIENT_ID: &str = "UNKNOWN";

/// A single patient record as received from the source
///
/// Immutable once fetched; scoring never mutates the record.
///
/// # Examples
///
/// ```
/// use triage::domain::PatientRecord;
///
/// let record: PatientRecord = serde_json::from_str(
///     r#"{"patient_id": "P001", "blood_pressure": "120/80", "temperature": "98.6", "age": 45}"#,
/// ).unwrap();
/// assert_eq!(record.id(), "P001");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient identifier; may be absent on malformed records
    #[serde(default)]
    pub patient_id: Option<String>,

    /// Raw blood pressure value, expected "S/D" but frequently garbage
    #[serde(default)]
    pub blood_pressure: Option<Value>,

    /// Raw temperature value: number, numeric string, or sentinel
    #[serde(default)]
    pub temperature: Option<Value>,

    /// Raw age value: number, digit-string, or garbage
    #[serde(default)]
    pub age: Option<Value>,
}

impl PatientRecord {
    /// Returns the patient identifier, falling back to `"UNKNOWN"` when
    /// the source omitted it
    pub fn id(&self) -> &str {
        self.patient_id.as_deref().unwrap_or(UNKNOWN_PATIENT_ID)
    }
}
