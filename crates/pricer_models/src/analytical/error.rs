//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (negative or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { volatility } => PricingError::InvalidParameter {
                name: "sigma",
                value: volatility,
                constraint: "must be positive",
            },
            AnalyticalError::InvalidSpot { spot } => PricingError::InvalidParameter {
                name: "S",
                value: spot,
                constraint: "must be positive",
            },
            AnalyticalError::InvalidStrike { strike } => PricingError::InvalidParameter {
                name: "K",
                value: strike,
                constraint: "must be positive",
            },
            AnalyticalError::InvalidExpiry { expiry } => PricingError::InvalidParameter {
                name: "T",
                value: expiry,
                constraint: "must be finite and non-negative",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = AnalyticalError::InvalidStrike { strike: 0.0 }.into();
        assert_eq!(err.parameter(), Some("K"));
    }
}
