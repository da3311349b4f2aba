//! Boundary validation helpers.
//!
//! Each helper returns `PricingError::InvalidParameter` carrying the
//! parameter name, the offending value and the violated constraint. NaN
//! fails every check.

use super::error::PricingError;

/// Requires `value` to be finite and strictly positive.
///
/// # Examples
/// ```
/// use pricer_core::types::validation::require_positive;
///
/// assert!(require_positive("sigma", 0.2).is_ok());
/// assert!(require_positive("sigma", 0.0).is_err());
/// assert!(require_positive("sigma", f64::NAN).is_err());
/// ```
pub fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            constraint: "must be finite and positive",
        })
    }
}

/// Requires `value` to be finite and `>= 0`.
pub fn require_non_negative(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            constraint: "must be finite and non-negative",
        })
    }
}

/// Requires `value` to be finite (any sign).
pub fn require_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter {
            name,
            value,
            constraint: "must be finite",
        })
    }
}
