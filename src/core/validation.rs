//! Parsing of the numeric fields collected by the menu.

use crate::core::errors::{Result, TrackerError};

/// Parses a decimal field such as an amount, budget limit, goal target or progress.
///
/// Surrounding whitespace is ignored. Sign is not checked. `NaN` and the
/// infinities parse as `f64` but cannot be stored as a REAL, so they are refused.
pub fn parse_decimal(field: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TrackerError::InvalidInput(format!(
            "{field} must be a number, got `{trimmed}`"
        ))),
    }
}

/// Parses a record identifier (a whole number).
pub fn parse_id(field: &str, input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| {
        TrackerError::InvalidInput(format!("{field} must be a whole number, got `{trimmed}`"))
    })
}
