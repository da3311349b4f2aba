//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the error every pricing entry point
//! eventually reports. Crate-local errors (model construction, analytic
//! pricing, Monte Carlo configuration) convert into it via `From`.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidParameter`: A scalar input violates its constraint
/// - `UnsupportedContractType`: Unrecognised contract kind or direction
/// - `NumericalInstability`: The estimate is not a finite number
/// - `Cancelled`: Aggregation was aborted by the caller
///
/// Variance excursions below the floor are never reported here; the
/// simulators clamp them silently.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "sigma",
///     value: -0.2,
///     constraint: "must be positive",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'sigma' = -0.2: must be positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Input parameter outside its admissible range.
    #[error("Invalid parameter '{name}' = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name as it appears at the API boundary
        name: &'static str,
        /// The offending value
        value: f64,
        /// Human-readable statement of the violated constraint
        constraint: &'static str,
    },

    /// Contract kind or direction string not recognised.
    #[error("Unsupported contract type: {0}")]
    UnsupportedContractType(String),

    /// Computation produced a non-finite result.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Aggregation aborted before all trials completed.
    #[error("Pricing cancelled after {completed_trials} trials")]
    Cancelled {
        /// Number of trials whose payoffs were fully evaluated
        completed_trials: usize,
        /// Discounted mean over the completed trials, if any completed
        partial_price: Option<f64>,
    },
}

impl PricingError {
    /// Returns the parameter name for `InvalidParameter` errors.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::InvalidParameter { name: "dt", value: 0.0, constraint: "must be positive" };
    /// assert_eq!(err.parameter(), Some("dt"));
    /// assert_eq!(PricingError::UnsupportedContractType("x".into()).parameter(), None);
    /// ```
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PricingError::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns true if the error reports a caller-initiated cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PricingError::Cancelled { .. })
    }
}
