//! Vital-sign parsing
//!
//! Converts raw, possibly malformed field values into typed readings. All
//! coercion policy lives here: sentinel strings, type coercion, and the
//! per-vital accepted formats. Parse failures never raise — they are
//! reported as [`Parsed::Invalid`] carrying the issue text the scoring
//! layer records.

use serde_json::Value;

/// Sentinel strings designating "no usable data" rather than a measurement
const SENTINELS: [&str; 5] = ["INVALID", "N/A", "NA", "NULL", "NONE"];

/// Additional sentinel accepted only for temperature readings
const TEMP_ERROR_SENTINEL: &str = "TEMP_ERROR";

/// Outcome of parsing one raw vital
///
/// The tagged-union replacement for ad hoc runtime type inspection:
/// a vital is either a typed value or an invalid reading with the
/// issue text to record.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// Successfully parsed value
    Valid(T),
    /// Unusable value with a human-readable reason
    Invalid(String),
}

impl<T> Parsed<T> {
    /// Returns true for `Valid`
    pub fn is_valid(&self) -> bool {
        matches!(self, Parsed::Valid(_))
    }

    /// Returns the reason text for `Invalid`, `None` otherwise
    pub fn invalid_reason(&self) -> Option<&str> {
        match self {
            Parsed::Valid(_) => None,
            Parsed::Invalid(reason) => Some(reason),
        }
    }
}

/// A parsed blood pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: i64,
    pub diastolic: i64,
}

/// Renders a raw field value for inclusion in issue text
///
/// Strings render without quotes; absent and JSON null both render as
/// `null`; everything else uses its JSON form.
pub fn raw_display(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parses a raw blood pressure value into a systolic/diastolic pair
///
/// Accepts a string `"S/D"` with integer sides; non-string values are
/// coerced to their string form first. Sentinel strings, a missing `/`,
/// more than one `/`, or a non-integer side all make the whole reading
/// invalid.
///
/// # Examples
///
/// ```
/// use triage::core::vitals::{parse_blood_pressure, BloodPressure, Parsed};
/// use serde_json::json;
///
/// let bp = parse_blood_pressure(Some(&json!("120/80")));
/// assert_eq!(
///     bp,
///     Parsed::Valid(BloodPressure { systolic: 120, diastolic: 80 })
/// );
/// ```
pub fn parse_blood_pressure(raw: Option<&Value>) -> Parsed<BloodPressure> {
    let invalid = || Parsed::Invalid(format!("Invalid BP: {}", raw_display(raw)));

    let text = match raw {
        None | Some(Value::Null) => return invalid(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if text.is_empty() || SENTINELS.contains(&text.to_uppercase().as_str()) {
        return invalid();
    }

    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return invalid();
    }

    let systolic = parts[0].trim().parse::<i64>().ok();
    let diastolic = parts[1].trim().parse::<i64>().ok();

    match (systolic, diastolic) {
        (Some(systolic), Some(diastolic)) => Parsed::Valid(BloodPressure {
            systolic,
            diastolic,
        }),
        _ => invalid(),
    }
}

/// Parses a raw temperature value into degrees Fahrenheit
///
/// Missing or empty values report `"Missing temperature"`; sentinel
/// strings (including `TEMP_ERROR`) and non-numeric strings report
/// `"Invalid temperature: <raw>"`. JSON numbers are read directly,
/// strings are trimmed and float-parsed.
pub fn parse_temperature(raw: Option<&Value>) -> Parsed<f64> {
    match raw {
        None | Some(Value::Null) => Parsed::Invalid("Missing temperature".to_string()),
        Some(Value::String(s)) if s.is_empty() => {
            Parsed::Invalid("Missing temperature".to_string())
        }
        Some(Value::String(s)) => {
            let upper = s.to_uppercase();
            if upper == TEMP_ERROR_SENTINEL || SENTINELS.contains(&upper.as_str()) {
                return Parsed::Invalid(format!("Invalid temperature: {s}"));
            }
            match s.trim().parse::<f64>() {
                Ok(temp) => Parsed::Valid(temp),
                Err(_) => Parsed::Invalid(format!("Invalid temperature: {s}")),
            }
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(temp) => Parsed::Valid(temp),
            None => Parsed::Invalid(format!("Invalid temperature: {n}")),
        },
        Some(other) => Parsed::Invalid(format!("Invalid temperature: {}", raw_display(Some(other)))),
    }
}

/// Parses a raw age value into whole years
///
/// String forms must consist solely of decimal digits — no sign, decimal
/// point, or surrounding whitespace — so `"45"` parses while `"45.0"`
/// reports `"Invalid age: 45.0"`. JSON numbers are truncated to an
/// integer.
pub fn parse_age(raw: Option<&Value>) -> Parsed<i64> {
    match raw {
        None | Some(Value::Null) => Parsed::Invalid("Missing age".to_string()),
        Some(Value::String(s)) if s.is_empty() => Parsed::Invalid("Missing age".to_string()),
        Some(Value::String(s)) => {
            if !s.chars().all(|c| c.is_ascii_digit()) {
                return Parsed::Invalid(format!("Invalid age: {s}"));
            }
            match s.parse::<i64>() {
                Ok(age) => Parsed::Valid(age),
                Err(_) => Parsed::Invalid(format!("Invalid age: {s}")),
            }
        }
        Some(Value::Number(n)) => {
            if let Some(age) = n.as_i64() {
                Parsed::Valid(age)
            } else if let Some(age) = n.as_f64() {
                Parsed::Valid(age as i64)
            } else {
                Parsed::Invalid(format!("Invalid age: {n}"))
            }
        }
        Some(other) => Parsed::Invalid(format!("Invalid age: {}", raw_display(Some(other)))),
    }
}

/// Plain float coercion of a raw value, used by the fever screen
///
/// Deliberately looser than [`parse_temperature`]: no sentinel handling,
/// no reasons — a value either coerces or it doesn't. Keeping the two
/// paths separate preserves the source behavior where the fever cohort
/// re-parses the raw temperature independently of the risk engine.
pub fn coerce_float(raw: Option<&Value>) -> Option<f64> {
    match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
