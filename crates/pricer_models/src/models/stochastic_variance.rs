//! Two-factor stochastic-variance model (Heston-style dynamics).
//!
//! ```text
//! dS = (r - q) * S * dt + sqrt(V) * S * dW1
//! dV = alpha * (beta - V) * dt + vol_var * sqrt(V) * dW2
//! d<W1, W2> = rho * dt
//! ```
//!
//! ## Euler scheme with lagged variance
//!
//! Each step draws independent `z1, z2 ~ N(0, 1)` and correlates them by
//! Cholesky decomposition: `e1 = z1`, `e2 = rho*z1 + sqrt(1 - rho^2)*z2`.
//! Both the price and the variance update read the variance at the start
//! of the step:
//! ```text
//! S(k+1) = S(k) + (r-q)*S(k)*dt + S(k)*sqrt(V(k)*dt)*e1
//! V(k+1) = max(V(k) + alpha*(beta - V(k))*dt + vol_var*sqrt(V(k)*dt)*e2, 1e-7)
//! ```
//! The floor keeps the square root defined after negative excursions; the
//! clamp is silent.

use pricer_core::traits::Float;

use super::error::ModelError;
use super::gbm::to_f64;
use super::stochastic::{StochasticModel, TwoFactorState};

/// Lower bound applied to the variance after every update.
pub const VARIANCE_FLOOR: f64 = 1e-7;

/// Stochastic-variance model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StochasticVarianceParams<T: Float> {
    /// Initial spot price (S0)
    pub spot: T,
    /// Risk-free rate (r)
    pub rate: T,
    /// Continuous dividend yield (div)
    pub dividend: T,
    /// Mean-reversion speed (alpha)
    pub mean_reversion: T,
    /// Long-run variance (beta)
    pub long_run_variance: T,
    /// Price/variance correlation (rho)
    pub correlation: T,
    /// Volatility of variance (vol_var)
    pub vol_of_variance: T,
    /// Variance at time zero (inst_var0)
    pub initial_variance: T,
}

impl<T: Float> StochasticVarianceParams<T> {
    /// Create validated parameters.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::StochasticVarianceParams;
    ///
    /// let ok = StochasticVarianceParams::new(100.0_f64, 0.01, 0.0, 2.0, 0.04, -0.7, 0.3, 0.04);
    /// assert!(ok.is_ok());
    ///
    /// let bad_rho = StochasticVarianceParams::new(100.0_f64, 0.01, 0.0, 2.0, 0.04, -1.5, 0.3, 0.04);
    /// assert!(bad_rho.is_err());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        rate: T,
        dividend: T,
        mean_reversion: T,
        long_run_variance: T,
        correlation: T,
        vol_of_variance: T,
        initial_variance: T,
    ) -> Result<Self, ModelError> {
        let params = Self {
            spot,
            rate,
            dividend,
            mean_reversion,
            long_run_variance,
            correlation,
            vol_of_variance,
            initial_variance,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate the parameter set.
    pub fn validate(&self) -> Result<(), ModelError> {
        let zero = T::zero();
        let one = T::one();

        if !(self.spot.is_finite() && self.spot > zero) {
            return Err(ModelError::InvalidSpot(to_f64(self.spot)));
        }
        if !(self.vol_of_variance.is_finite() && self.vol_of_variance > zero) {
            return Err(ModelError::InvalidVolOfVariance(to_f64(self.vol_of_variance)));
        }
        if !(self.correlation >= -one && self.correlation <= one) {
            return Err(ModelError::InvalidCorrelation(to_f64(self.correlation)));
        }
        if !(self.initial_variance.is_finite() && self.initial_variance > zero) {
            return Err(ModelError::InvalidInitialVariance(to_f64(
                self.initial_variance,
            )));
        }
        if !(self.mean_reversion.is_finite() && self.mean_reversion >= zero) {
            return Err(ModelError::InvalidMeanReversion(to_f64(self.mean_reversion)));
        }
        if !(self.long_run_variance.is_finite() && self.long_run_variance >= zero) {
            return Err(ModelError::InvalidLongRunVariance(to_f64(
                self.long_run_variance,
            )));
        }
        for (name, value) in [("r", self.rate), ("div", self.dividend)] {
            if !value.is_finite() {
                return Err(ModelError::NonFinite {
                    name,
                    value: to_f64(value),
                });
            }
        }
        Ok(())
    }

    /// Feller condition `2 * alpha * beta >= vol_var^2`.
    ///
    /// When it fails the continuous process can reach zero and the Euler
    /// scheme leans on the variance floor more often.
    pub fn satisfies_feller(&self) -> bool {
        let two = T::one() + T::one();
        two * self.mean_reversion * self.long_run_variance
            >= self.vol_of_variance * self.vol_of_variance
    }
}

/// Stochastic-variance model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StochasticVarianceModel<T: Float> {
    params: StochasticVarianceParams<T>,
    variance_floor: T,
}

impl<T: Float> StochasticVarianceModel<T> {
    /// Create a model from validated parameters with the default floor.
    pub fn new(params: StochasticVarianceParams<T>) -> Self {
        Self {
            params,
            variance_floor: T::from(VARIANCE_FLOOR).unwrap_or(T::epsilon()),
        }
    }

    /// Model parameters.
    #[inline]
    pub fn params(&self) -> &StochasticVarianceParams<T> {
        &self.params
    }

    /// Variance floor in effect.
    #[inline]
    pub fn variance_floor(&self) -> T {
        self.variance_floor
    }

    /// Correlate two independent standard normals.
    ///
    /// Returns `(e1, e2)` with `e1 = z1` and
    /// `e2 = rho * z1 + sqrt(1 - rho^2) * z2`.
    #[inline]
    pub fn correlated_normals(&self, z1: T, z2: T) -> (T, T) {
        let rho = self.params.correlation;
        let orthogonal = (T::one() - rho * rho).max(T::zero()).sqrt();
        (z1, rho * z1 + orthogonal * z2)
    }
}

impl<T: Float> StochasticModel<T> for StochasticVarianceModel<T> {
    type State = TwoFactorState<T>;

    fn initial_state(&self) -> Self::State {
        TwoFactorState {
            first: self.params.spot,
            second: self.params.initial_variance,
        }
    }

    fn evolve_step(&self, state: Self::State, dt: T, dw: &[T]) -> Self::State {
        let p = &self.params;
        let (e1, e2) = self.correlated_normals(dw[0], dw[1]);

        let s = state.first;
        let v = state.second;
        let diffusion_scale = (v * dt).sqrt();

        let s_next = s + (p.rate - p.dividend) * s * dt + s * diffusion_scale * e1;
        let v_next = v
            + p.mean_reversion * (p.long_run_variance - v) * dt
            + p.vol_of_variance * diffusion_scale * e2;

        TwoFactorState {
            first: s_next,
            second: v_next.max(self.variance_floor),
        }
    }

    fn brownian_dim() -> usize {
        2
    }

    fn model_name() -> &'static str {
        "StochasticVariance"
    }

    fn with_spot(&self, spot: T) -> Self {
        let mut next = *self;
        next.params.spot = spot;
        next
    }
}
