//! Input validation helpers.
//!
//! Uses `!is_finite()` to reject NaN, +Inf, and -Inf uniformly.

use crate::error::ParabolaError;

/// Validate that a value is finite (rejects NaN and Inf; allows zero and negatives).
pub(crate) fn validate_finite(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() {
        return Err(ParabolaError::InvalidInput {
            message: format!("{name} must be finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that `start < end` and both are finite.
pub(crate) fn validate_interval(start: f64, end: f64, name: &str) -> crate::error::Result<()> {
    validate_finite(start, name)?;
    validate_finite(end, name)?;
    if start >= end {
        return Err(ParabolaError::InvalidInput {
            message: format!("{name} must satisfy start < end, got [{start}, {end}]"),
        });
    }
    Ok(())
}

/// Validate that a requested size does not exceed `max`.
pub(crate) fn validate_at_most(count: usize, max: usize, name: &str) -> crate::error::Result<usize> {
    if count > max {
        return Err(ParabolaError::InvalidInput {
            message: format!("{name} must be at most {max}, got {count}"),
        });
    }
    Ok(count)
}
