//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and its builder for the
//! parallel Monte Carlo aggregator.

use super::error::ConfigError;
use super::grid::TimeGrid;
use pricer_core::types::PricingError;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Trials simulated per work unit.
///
/// Each chunk owns one random stream, so the chunk size (not the thread
/// count) fixes which draws each trial receives.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(10_000)
///     .dt(0.01)
///     .maturity(1.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of independent trials.
    n_trials: usize,
    /// Nominal time step in years.
    dt: f64,
    /// Maturity in years.
    maturity: f64,
    /// Base seed for all random streams.
    seed: u64,
    /// Trials per work unit.
    chunk_size: usize,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the nominal time step.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the maturity.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of trials per work unit.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of work units needed to cover all trials.
    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_trials.div_ceil(self.chunk_size)
    }

    /// Time grid from zero to maturity.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming `dt` when the grid would
    /// exceed [`MAX_STEPS`](crate::mc::MAX_STEPS).
    pub fn grid(&self) -> Result<TimeGrid, PricingError> {
        TimeGrid::new(self.dt, self.maturity)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_trials` is 0 or greater than 10,000,000
    /// - `chunk_size` is 0
    /// - `dt` or `maturity` is not finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        for (name, value) in [("dt", self.dt), ("T", self.maturity)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_trials`, `dt` and `maturity` are required. The seed defaults to 0
/// and the chunk size to [`DEFAULT_CHUNK_SIZE`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_trials: Option<usize>,
    dt: Option<f64>,
    maturity: Option<f64>,
    seed: Option<u64>,
    chunk_size: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials.
    ///
    /// # Arguments
    ///
    /// * `n_trials` - Number of trials in [1, 10_000_000]
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the nominal time step in years.
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of trials per work unit.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required field is unset or any value is
    /// out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_trials = self.n_trials.ok_or(ConfigError::MissingParameter("n"))?;
        let dt = self.dt.ok_or(ConfigError::MissingParameter("dt"))?;
        let maturity = self.maturity.ok_or(ConfigError::MissingParameter("T"))?;

        let config = MonteCarloConfig {
            n_trials,
            dt,
            maturity,
            seed: self.seed.unwrap_or(0),
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}
