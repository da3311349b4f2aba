//! Simulation time grid.
//!
//! A horizon `T` is split into `n = ceil(T / dt)` steps. Every step but the
//! last has length `dt`; the last is shortened so the steps sum to `T`
//! exactly. Ratios within a relative `1e-9` of an integer are rounded to
//! that integer first, so `T = 0.3, dt = 0.1` yields three full steps
//! rather than a fourth of length ~1e-17.

use pricer_core::types::validation::require_positive;
use pricer_core::types::PricingError;

/// Upper bound on steps per path.
pub const MAX_STEPS: usize = 1_000_000;

/// Relative tolerance when rounding `T / dt` to a whole step count.
const STEP_TOLERANCE: f64 = 1e-9;

/// Fixed-step time grid over `[0, horizon]`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TimeGrid;
///
/// let grid = TimeGrid::new(0.3, 1.0).unwrap();
/// assert_eq!(grid.n_steps(), 4);
///
/// let steps: Vec<f64> = grid.steps().collect();
/// assert!((steps[3] - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    horizon: f64,
    n_steps: usize,
    last_dt: f64,
}

impl TimeGrid {
    /// Builds the grid for step `dt` over `horizon`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` naming `dt` or `T` when either is not finite
    ///   and positive
    /// - `InvalidParameter` naming `dt` when the grid would need more than
    ///   [`MAX_STEPS`] steps
    pub fn new(dt: f64, horizon: f64) -> Result<Self, PricingError> {
        require_positive("dt", dt)?;
        require_positive("T", horizon)?;

        let ratio = horizon / dt;
        let rounded = ratio.round();
        let steps = if (ratio - rounded).abs() <= STEP_TOLERANCE * ratio.max(1.0) {
            rounded.max(1.0)
        } else {
            ratio.ceil()
        };
        if steps > MAX_STEPS as f64 {
            return Err(PricingError::InvalidParameter {
                name: "dt",
                value: dt,
                constraint: "needs more than 1_000_000 steps to reach the horizon",
            });
        }

        let n_steps = steps as usize;
        let last_dt = horizon - (n_steps - 1) as f64 * dt;
        Ok(Self {
            dt,
            horizon,
            n_steps,
            last_dt,
        })
    }

    /// Number of steps (and emitted path points).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Nominal step length.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Total length covered by the grid.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Length of step `index`.
    #[inline]
    pub fn step_size(&self, index: usize) -> f64 {
        if index + 1 == self.n_steps {
            self.last_dt
        } else {
            self.dt
        }
    }

    /// Step lengths in order.
    pub fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_steps).map(move |i| self.step_size(i))
    }
}
