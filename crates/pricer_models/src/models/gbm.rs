//! Geometric Brownian Motion (GBM) model.
//!
//! GBM describes the asset price by:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//!
//! ## Euler discretisation
//!
//! Paths are advanced with the plain Euler update rather than the
//! log-space exact solution:
//! ```text
//! S(k+1) = S(k) + S(k)*mu*dt + S(k)*sigma*Z*sqrt(dt),   Z ~ N(0, 1)
//! ```
//! For risk-neutral pricing choose `mu = r - q`.

use pricer_core::traits::Float;

use super::error::ModelError;
use super::stochastic::{SingleState, StochasticModel};

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams<T: Float> {
    /// Initial spot price (S0)
    pub spot: T,
    /// Drift (mu, annualised)
    pub drift: T,
    /// Volatility (sigma, annualised)
    pub volatility: T,
}

impl<T: Float> GbmParams<T> {
    /// Create new GBM parameters with validation.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if spot <= 0
    /// - `ModelError::InvalidVolatility` if volatility <= 0
    /// - `ModelError::NonFinite` if drift is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::GbmParams;
    ///
    /// assert!(GbmParams::new(100.0_f64, 0.01, 0.2).is_ok());
    /// assert!(GbmParams::new(100.0_f64, 0.01, 0.0).is_err());
    /// ```
    pub fn new(spot: T, drift: T, volatility: T) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            drift,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate the parameter set.
    pub fn validate(&self) -> Result<(), ModelError> {
        let zero = T::zero();
        if !(self.spot.is_finite() && self.spot > zero) {
            return Err(ModelError::InvalidSpot(to_f64(self.spot)));
        }
        if !(self.volatility.is_finite() && self.volatility > zero) {
            return Err(ModelError::InvalidVolatility(to_f64(self.volatility)));
        }
        if !self.drift.is_finite() {
            return Err(ModelError::NonFinite {
                name: "mu",
                value: to_f64(self.drift),
            });
        }
        Ok(())
    }
}

impl<T: Float> Default for GbmParams<T> {
    fn default() -> Self {
        Self {
            spot: T::from(100.0).unwrap_or(T::one()),
            drift: T::from(0.01).unwrap_or(T::zero()),
            volatility: T::from(0.2).unwrap_or(T::one()),
        }
    }
}

/// Geometric Brownian Motion model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmModel<T: Float> {
    params: GbmParams<T>,
}

impl<T: Float> GbmModel<T> {
    /// Create a model from validated parameters.
    pub fn new(params: GbmParams<T>) -> Self {
        Self { params }
    }

    /// Model parameters.
    #[inline]
    pub fn params(&self) -> &GbmParams<T> {
        &self.params
    }

    /// Copy of this model with the volatility replaced.
    ///
    /// Used by bump-and-revalue sensitivities.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, ModelError> {
        let params = GbmParams::new(self.params.spot, self.params.drift, volatility)?;
        Ok(Self { params })
    }
}

impl<T: Float> StochasticModel<T> for GbmModel<T> {
    type State = SingleState<T>;

    fn initial_state(&self) -> Self::State {
        SingleState(self.params.spot)
    }

    fn evolve_step(&self, state: Self::State, dt: T, dw: &[T]) -> Self::State {
        let s = state.0;
        let ds = s * self.params.drift * dt + s * self.params.volatility * dw[0] * dt.sqrt();
        SingleState(s + ds)
    }

    fn brownian_dim() -> usize {
        1
    }

    fn model_name() -> &'static str {
        "GBM"
    }

    fn with_spot(&self, spot: T) -> Self {
        let mut params = self.params;
        params.spot = spot;
        Self { params }
    }
}

#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> GbmModel<f64> {
        GbmModel::new(GbmParams::new(100.0, 0.05, 0.2).unwrap())
    }

    // ================================================================
    // Parameter validation
    // ================================================================

    #[test]
    fn test_params_reject_non_positive_spot() {
        assert_eq!(
            GbmParams::new(0.0_f64, 0.05, 0.2),
            Err(ModelError::InvalidSpot(0.0))
        );
    }

    #[test]
    fn test_params_reject_negative_volatility() {
        assert!(matches!(
            GbmParams::new(100.0_f64, 0.05, -0.2),
            Err(ModelError::InvalidVolatility(_))
        ));
    }

    #[test]
    fn test_params_reject_nan_drift() {
        assert!(matches!(
            GbmParams::new(100.0_f64, f64::NAN, 0.2),
            Err(ModelError::NonFinite { name: "mu", .. })
        ));
    }

    // ================================================================
    // Euler step
    // ================================================================

    #[test]
    fn test_zero_shock_step_is_pure_drift() {
        let next = model().evolve_step(SingleState(100.0), 0.1, &[0.0]);
        // 100 + 100 * 0.05 * 0.1
        assert_relative_eq!(next.0, 100.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_shock_step() {
        let next = model().evolve_step(SingleState(100.0), 0.25, &[1.0]);
        // 100 + 100*0.05*0.25 + 100*0.2*1*0.5
        assert_relative_eq!(next.0, 111.25, epsilon = 1e-12);
    }

    #[test]
    fn test_initial_state_is_spot() {
        assert_eq!(model().initial_state(), SingleState(100.0));
    }

    #[test]
    fn test_with_spot_keeps_other_params() {
        let moved = model().with_spot(80.0);
        assert_eq!(moved.params().spot, 80.0);
        assert_eq!(moved.params().volatility, 0.2);
        assert_eq!(moved.params().drift, 0.05);
    }

    #[test]
    fn test_with_volatility_validates() {
        assert!(model().with_volatility(0.25).is_ok());
        assert!(model().with_volatility(0.0).is_err());
    }

    #[test]
    fn test_model_metadata() {
        assert_eq!(GbmModel::<f64>::brownian_dim(), 1);
        assert_eq!(GbmModel::<f64>::model_name(), "GBM");
    }
}
