//! Static dispatch enum over the supported stochastic processes.
//!
//! [`StochasticProcess`] is the process selector consumed by the Monte Carlo
//! engine: every contract kind is simulated through the same `match`-based
//! dispatch whether the underlying follows GBM or the stochastic-variance
//! model.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{GbmParams, StochasticProcess};
//!
//! let process = StochasticProcess::gbm(GbmParams::new(100.0_f64, 0.01, 0.2).unwrap());
//!
//! assert_eq!(process.model_name(), "GBM");
//! assert_eq!(process.brownian_dim(), 1);
//! assert!(!process.is_two_factor());
//!
//! let state = process.initial_state();
//! let next = process.evolve_step(state, 0.01, &[0.0]);
//! assert!(next.price() > 100.0);
//! ```

use pricer_core::traits::Float;

use super::error::ModelError;
use super::gbm::{GbmModel, GbmParams};
use super::stochastic::{SingleState, StochasticModel, StochasticState, TwoFactorState};
use super::stochastic_variance::{StochasticVarianceModel, StochasticVarianceParams};

/// Unified state type for all processes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProcessState<T: Float> {
    /// Single-factor state (GBM)
    Single(SingleState<T>),
    /// Two-factor state (stochastic variance)
    TwoFactor(TwoFactorState<T>),
}

impl<T: Float> ProcessState<T> {
    /// Price component.
    #[inline]
    pub fn price(&self) -> T {
        match self {
            ProcessState::Single(s) => s.price(),
            ProcessState::TwoFactor(s) => s.price(),
        }
    }

    /// Variance component, `None` for single-factor states.
    #[inline]
    pub fn variance(&self) -> Option<T> {
        match self {
            ProcessState::Single(s) => s.variance(),
            ProcessState::TwoFactor(s) => s.variance(),
        }
    }
}

/// Process selector.
///
/// Supplying stochastic-variance parameters selects the two-factor model;
/// otherwise GBM drives the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StochasticProcess<T: Float> {
    /// Geometric Brownian Motion
    Gbm(GbmModel<T>),
    /// Heston-style stochastic variance
    StochasticVariance(StochasticVarianceModel<T>),
}

impl<T: Float> StochasticProcess<T> {
    /// GBM process from validated parameters.
    pub fn gbm(params: GbmParams<T>) -> Self {
        StochasticProcess::Gbm(GbmModel::new(params))
    }

    /// Stochastic-variance process from validated parameters.
    pub fn stochastic_variance(params: StochasticVarianceParams<T>) -> Self {
        StochasticProcess::StochasticVariance(StochasticVarianceModel::new(params))
    }

    /// Re-validate the wrapped parameters.
    ///
    /// Parameter fields are public, so a process assembled by hand may
    /// bypass the checks in the constructors.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            StochasticProcess::Gbm(m) => m.params().validate(),
            StochasticProcess::StochasticVariance(m) => m.params().validate(),
        }
    }

    /// Model name.
    pub fn model_name(&self) -> &'static str {
        match self {
            StochasticProcess::Gbm(_) => GbmModel::<T>::model_name(),
            StochasticProcess::StochasticVariance(_) => {
                StochasticVarianceModel::<T>::model_name()
            }
        }
    }

    /// Standard normal draws consumed per step.
    pub fn brownian_dim(&self) -> usize {
        match self {
            StochasticProcess::Gbm(_) => GbmModel::<T>::brownian_dim(),
            StochasticProcess::StochasticVariance(_) => {
                StochasticVarianceModel::<T>::brownian_dim()
            }
        }
    }

    /// Whether the process carries a variance state.
    pub fn is_two_factor(&self) -> bool {
        matches!(self, StochasticProcess::StochasticVariance(_))
    }

    /// Initial spot price.
    pub fn spot(&self) -> T {
        match self {
            StochasticProcess::Gbm(m) => m.params().spot,
            StochasticProcess::StochasticVariance(m) => m.params().spot,
        }
    }

    /// State at time zero.
    pub fn initial_state(&self) -> ProcessState<T> {
        match self {
            StochasticProcess::Gbm(m) => ProcessState::Single(m.initial_state()),
            StochasticProcess::StochasticVariance(m) => ProcessState::TwoFactor(m.initial_state()),
        }
    }

    /// Evolve state by one time step.
    ///
    /// A state that does not belong to this process is returned unchanged.
    pub fn evolve_step(&self, state: ProcessState<T>, dt: T, dw: &[T]) -> ProcessState<T> {
        match (self, state) {
            (StochasticProcess::Gbm(m), ProcessState::Single(s)) => {
                ProcessState::Single(m.evolve_step(s, dt, dw))
            }
            (StochasticProcess::StochasticVariance(m), ProcessState::TwoFactor(s)) => {
                ProcessState::TwoFactor(m.evolve_step(s, dt, dw))
            }
            _ => state,
        }
    }

    /// Same process restarted from `spot`.
    ///
    /// All other parameters, including the initial variance, are carried
    /// over unchanged.
    pub fn with_spot(&self, spot: T) -> Self {
        match self {
            StochasticProcess::Gbm(m) => StochasticProcess::Gbm(m.with_spot(spot)),
            StochasticProcess::StochasticVariance(m) => {
                StochasticProcess::StochasticVariance(m.with_spot(spot))
            }
        }
    }
}
