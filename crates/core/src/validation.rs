//! Shared field validation helpers.
//!
//! Reusable checks applied by the API layer on create payloads and on the
//! supplied fields of partial updates.

use crate::error::CoreError;

/// Validate that a text field is non-empty after trimming.
///
/// Returns a `CoreError::Validation` naming the field if empty.
pub fn require_non_empty(name: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Validate that a numeric field is strictly positive. NaN is rejected.
pub fn require_positive(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_nan() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a numeric field is zero or greater. NaN is rejected.
pub fn require_non_negative(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_nan() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}
