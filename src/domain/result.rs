//! Result type alias for Triage
//!
//! This module provides a convenient Result type alias that uses TriageError
//! as the error type.

use super::errors::TriageError;

/// Result type alias for Triage operations
///
/// This is a convenience type alias that uses `TriageError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use triage::domain::result::Result;
/// use triage::domain::errors::TriageError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TriageError::Other("something went wrong".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::TriageError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(TriageError::Other("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
