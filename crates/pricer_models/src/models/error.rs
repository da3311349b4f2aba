//! Model construction errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while validating stochastic process parameters.
///
/// Field names follow the API boundary (`S0`, `sigma`, `vol_var`, ...).
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidCorrelation(1.2);
/// assert!(err.to_string().contains("rho = 1.2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Spot price not strictly positive.
    #[error("Invalid spot price: S0 = {0} (must be positive)")]
    InvalidSpot(f64),

    /// Volatility not strictly positive.
    #[error("Invalid volatility: sigma = {0} (must be positive)")]
    InvalidVolatility(f64),

    /// Volatility of variance not strictly positive.
    #[error("Invalid vol-of-variance: vol_var = {0} (must be positive)")]
    InvalidVolOfVariance(f64),

    /// Correlation outside [-1, 1].
    #[error("Invalid correlation: rho = {0} (must lie in [-1, 1])")]
    InvalidCorrelation(f64),

    /// Initial variance not strictly positive.
    #[error("Invalid initial variance: inst_var0 = {0} (must be positive)")]
    InvalidInitialVariance(f64),

    /// Mean-reversion speed negative.
    #[error("Invalid mean reversion: alpha = {0} (must be non-negative)")]
    InvalidMeanReversion(f64),

    /// Long-run variance negative.
    #[error("Invalid long-run variance: beta = {0} (must be non-negative)")]
    InvalidLongRunVariance(f64),

    /// A drift-like input (mu, r, div) is NaN or infinite.
    #[error("Non-finite parameter: {name} = {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        let (name, value, constraint) = match err {
            ModelError::InvalidSpot(v) => ("S0", v, "must be positive"),
            ModelError::InvalidVolatility(v) => ("sigma", v, "must be positive"),
            ModelError::InvalidVolOfVariance(v) => ("vol_var", v, "must be positive"),
            ModelError::InvalidCorrelation(v) => ("rho", v, "must lie in [-1, 1]"),
            ModelError::InvalidInitialVariance(v) => ("inst_var0", v, "must be positive"),
            ModelError::InvalidMeanReversion(v) => ("alpha", v, "must be non-negative"),
            ModelError::InvalidLongRunVariance(v) => ("beta", v, "must be non-negative"),
            ModelError::NonFinite { name, value } => (name, value, "must be finite"),
        };
        PricingError::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_parameter_name() {
        let err: PricingError = ModelError::InvalidVolOfVariance(-0.3).into();
        assert_eq!(err.parameter(), Some("vol_var"));
        assert!(err.to_string().contains("-0.3"));
    }

    #[test]
    fn test_non_finite_conversion() {
        let err: PricingError = ModelError::NonFinite {
            name: "mu",
            value: f64::INFINITY,
        }
        .into();
        assert_eq!(err.parameter(), Some("mu"));
    }
}
