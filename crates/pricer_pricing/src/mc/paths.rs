//! Path generation for Monte Carlo simulation.
//!
//! A path holds the simulated price after each grid step; the initial spot
//! is not part of it, so a grid of `n` steps yields exactly `n` points.
//! Two-factor processes also record the variance after each step.
//!
//! [`simulate_into`] refills a caller-owned [`SimulationPath`], letting a
//! worker reuse one buffer for every trial it runs.

use pricer_models::models::{ProcessState, StochasticProcess};

use super::grid::TimeGrid;
use crate::rng::PricerRng;

/// Largest number of standard normal draws any process consumes per step.
const MAX_BROWNIAN_DIM: usize = 2;

/// Simulated price (and variance) sequence of one trial.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{GbmParams, StochasticProcess};
/// use pricer_pricing::mc::{simulate_path, TimeGrid};
/// use pricer_pricing::rng::PricerRng;
///
/// let process = StochasticProcess::gbm(GbmParams::new(100.0, 0.01, 0.2).unwrap());
/// let grid = TimeGrid::new(0.01, 1.0).unwrap();
/// let path = simulate_path(&process, &grid, &mut PricerRng::from_seed(1));
///
/// assert_eq!(path.len(), 100);
/// assert!(path.variances().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationPath {
    prices: Vec<f64>,
    variances: Option<Vec<f64>>,
}

impl SimulationPath {
    /// Empty path with room for `n_steps` points.
    pub fn with_capacity(n_steps: usize, two_factor: bool) -> Self {
        Self {
            prices: Vec::with_capacity(n_steps),
            variances: two_factor.then(|| Vec::with_capacity(n_steps)),
        }
    }

    /// Path built from already simulated prices.
    pub fn from_prices(prices: Vec<f64>) -> Self {
        Self {
            prices,
            variances: None,
        }
    }

    /// Removes all points, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.prices.clear();
        if let Some(v) = self.variances.as_mut() {
            v.clear();
        }
    }

    /// Appends the state reached after one step.
    #[inline]
    pub fn push(&mut self, state: ProcessState<f64>) {
        self.prices.push(state.price());
        match (state.variance(), self.variances.as_mut()) {
            (Some(var), Some(v)) => v.push(var),
            (Some(var), None) => {
                let mut v = Vec::with_capacity(self.prices.capacity());
                v.push(var);
                self.variances = Some(v);
            }
            _ => {}
        }
    }

    /// Simulated prices, one per step.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Simulated variances for two-factor processes.
    #[inline]
    pub fn variances(&self) -> Option<&[f64]> {
        self.variances.as_deref()
    }

    /// Price at the final step.
    #[inline]
    pub fn terminal(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Simulates one trial of `process` over `grid` into `path`.
///
/// Each step draws `process.brownian_dim()` standard normals from `rng`.
pub fn simulate_into(
    process: &StochasticProcess<f64>,
    grid: &TimeGrid,
    rng: &mut PricerRng,
    path: &mut SimulationPath,
) {
    path.clear();
    let dim = process.brownian_dim().min(MAX_BROWNIAN_DIM);
    let mut dw = [0.0; MAX_BROWNIAN_DIM];
    let mut state = process.initial_state();

    for dt in grid.steps() {
        rng.fill_normal(&mut dw[..dim]);
        state = process.evolve_step(state, dt, &dw[..dim]);
        path.push(state);
    }
}

/// Allocating variant of [`simulate_into`].
pub fn simulate_path(
    process: &StochasticProcess<f64>,
    grid: &TimeGrid,
    rng: &mut PricerRng,
) -> SimulationPath {
    let mut path = SimulationPath::with_capacity(grid.n_steps(), process.is_two_factor());
    simulate_into(process, grid, rng, &mut path);
    path
}
