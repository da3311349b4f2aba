//! StochasticModel trait for a unified stochastic process interface.
//!
//! Models only describe how a state moves over one time step given a
//! vector of standard normal draws. Random number generation, time grids
//! and path storage belong to the Monte Carlo engine, so every model here
//! is deterministic given its inputs.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: processes are selected through the
//!   [`StochasticProcess`](super::StochasticProcess) enum, not `Box<dyn Trait>`
//! - **Generic Float type**: the same step function serves `f64` and `f32`

use pricer_core::traits::Float;

/// State representation for stochastic models.
///
/// - GBM: price only
/// - Stochastic variance: price and instantaneous variance
pub trait StochasticState<T: Float>: Clone + Copy {
    /// Number of state variables.
    fn dimension() -> usize;

    /// Asset price component.
    fn price(&self) -> T;

    /// Instantaneous variance component, if the model carries one.
    fn variance(&self) -> Option<T> {
        None
    }
}

/// Single-factor state (GBM price).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleState<T: Float>(pub T);

impl<T: Float> StochasticState<T> for SingleState<T> {
    fn dimension() -> usize {
        1
    }

    fn price(&self) -> T {
        self.0
    }
}

/// Two-factor state: `first` is the price, `second` the variance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoFactorState<T: Float> {
    /// Asset price
    pub first: T,
    /// Instantaneous variance
    pub second: T,
}

impl<T: Float> StochasticState<T> for TwoFactorState<T> {
    fn dimension() -> usize {
        2
    }

    fn price(&self) -> T {
        self.first
    }

    fn variance(&self) -> Option<T> {
        Some(self.second)
    }
}

/// Unified trait interface for stochastic process models.
///
/// - `initial_state`: state at time zero (never emitted as a path point)
/// - `evolve_step`: advance the state by `dt`
/// - `brownian_dim`: number of independent standard normals per step
/// - `with_spot`: same parameters restarted from another spot, used to
///   continue a path past its original horizon
pub trait StochasticModel<T: Float>: Sized {
    /// Model-specific state type.
    type State: StochasticState<T>;

    /// State at time zero.
    fn initial_state(&self) -> Self::State;

    /// Evolve state by one time step.
    ///
    /// # Arguments
    /// * `state` - Current state
    /// * `dt` - Time step size (positive)
    /// * `dw` - Independent standard normal draws, `brownian_dim()` of them
    fn evolve_step(&self, state: Self::State, dt: T, dw: &[T]) -> Self::State;

    /// Number of standard normal draws consumed per step.
    fn brownian_dim() -> usize;

    /// Short model identifier for logs.
    fn model_name() -> &'static str;

    /// Copy of this model with the initial spot replaced.
    fn with_spot(&self, spot: T) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_state_accessors() {
        let s = SingleState(101.5_f64);
        assert_eq!(SingleState::<f64>::dimension(), 1);
        assert_eq!(s.price(), 101.5);
        assert_eq!(s.variance(), None);
    }

    #[test]
    fn test_two_factor_state_accessors() {
        let s = TwoFactorState {
            first: 99.0_f64,
            second: 0.04,
        };
        assert_eq!(TwoFactorState::<f64>::dimension(), 2);
        assert_eq!(s.price(), 99.0);
        assert_eq!(s.variance(), Some(0.04));
    }
}
