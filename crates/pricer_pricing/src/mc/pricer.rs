//! Monte Carlo pricing engine.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`](crate::rng::PricerRng))
//! 2. Path simulation (via [`simulate_into`](super::simulate_into))
//! 3. Payoff evaluation (via [`PathPayoff`](crate::path_dependent::PathPayoff))
//! 4. Discounting and aggregation
//! 5. Greeks via bump-and-revalue
//!
//! # Parallel aggregation
//!
//! Trials are split into chunks of [`MonteCarloConfig::chunk_size`]. Chunk
//! `c` draws from stream `c` of the configured seed and accumulates
//! `(sum, sum_sq, count)` locally. Chunk results are collected in chunk
//! order and folded sequentially, so the estimate for a given seed is
//! identical whatever the size of the rayon pool.

use pricer_core::math::discount_factor;
use pricer_core::types::validation::require_finite;
use pricer_core::types::PricingError;
use pricer_models::models::StochasticProcess;
use rayon::prelude::*;
use tracing::debug;

use super::cancel::CancelToken;
use super::config::MonteCarloConfig;
use super::grid::TimeGrid;
use super::paths::{simulate_into, SimulationPath};
use crate::path_dependent::{ContractSpec, PathPayoff};
use crate::rng::PricerRng;

/// Relative spot bump for Delta and Gamma.
const SPOT_BUMP: f64 = 0.01;

/// Absolute volatility bump for Vega.
const VOL_BUMP: f64 = 0.01;

/// Greek type for selection.
///
/// - `Delta`: ∂V/∂S - Sensitivity to spot price
/// - `Gamma`: ∂²V/∂S² - Convexity with respect to spot
/// - `Vega`: ∂V/∂σ - Sensitivity to volatility (GBM only)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Greek {
    /// Delta: ∂V/∂S (sensitivity to spot price)
    Delta,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot)
    Gamma,
    /// Vega: ∂V/∂σ (sensitivity to volatility)
    Vega,
}

/// Pricing result with optional Greeks.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     n_trials: 10_000,
///     ..Default::default()
/// };
///
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of trials aggregated.
    pub n_trials: usize,
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: Option<f64>,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: Option<f64>,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: Option<f64>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running payoff moments of one chunk.
#[derive(Clone, Copy, Debug, Default)]
struct ChunkStats {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl ChunkStats {
    #[inline]
    fn push(&mut self, sample: f64) {
        self.sum += sample;
        self.sum_sq += sample * sample;
        self.count += 1;
    }

    #[inline]
    fn merge(&mut self, other: &ChunkStats) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    #[inline]
    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Standard error of the mean; zero for a single sample.
    fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean = self.mean();
        let variance = ((self.sum_sq - self.sum * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// Monte Carlo pricing engine.
///
/// The pricer is immutable and `Sync`; all per-trial state lives in the
/// workers, so one instance can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_models::models::{GbmParams, StochasticProcess};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::path_dependent::ContractSpec;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(20_000)
///     .dt(0.01)
///     .maturity(1.0)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let process = StochasticProcess::gbm(GbmParams::new(100.0, 0.01, 0.2).unwrap());
/// let contract = ContractSpec::vanilla(OptionType::Call, 100.0);
/// let result = pricer.price(&process, &contract, 0.01).unwrap();
///
/// assert!((result.price - 8.43).abs() < 4.0 * result.std_error + 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    grid: TimeGrid,
}

impl MonteCarloPricer {
    /// Creates a pricer for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if the configuration or the
    /// time grid it implies is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate().map_err(PricingError::from)?;
        let grid = config.grid()?;
        Ok(Self { config, grid })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the time grid from zero to maturity.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Prices `contract` under `process`, discounting at `rate`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for invalid process parameters, contract terms
    ///   or a non-finite rate
    /// - `NumericalInstability` if the estimate is not finite
    pub fn price(
        &self,
        process: &StochasticProcess<f64>,
        contract: &ContractSpec,
        rate: f64,
    ) -> Result<PricingResult, PricingError> {
        self.price_with_cancel(process, contract, rate, &CancelToken::new())
    }

    /// Like [`price`](Self::price), polling `cancel` before each chunk.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`price`](Self::price), returns
    /// `PricingError::Cancelled` with the trials completed so far and their
    /// discounted mean once cancellation is observed.
    pub fn price_with_cancel(
        &self,
        process: &StochasticProcess<f64>,
        contract: &ContractSpec,
        rate: f64,
        cancel: &CancelToken,
    ) -> Result<PricingResult, PricingError> {
        process.validate().map_err(PricingError::from)?;
        contract.validate()?;
        require_finite("r", rate)?;
        let extension_grid = contract
            .extension()
            .map(|extension| extension_grid(self.config.dt(), extension))
            .transpose()?;

        debug!(
            model = process.model_name(),
            contract = contract.kind.name(),
            option_type = %contract.option_type,
            n_trials = self.config.n_trials(),
            n_steps = self.grid.n_steps(),
            n_chunks = self.config.n_chunks(),
            "starting Monte Carlo aggregation"
        );

        let chunks = self.run_chunks(process, contract, extension_grid.as_ref(), cancel);

        let mut total = ChunkStats::default();
        let mut cancelled = false;
        for chunk in &chunks {
            match chunk {
                Some(stats) => total.merge(stats),
                None => cancelled = true,
            }
        }

        let df = discount_factor(rate, self.config.maturity());

        if cancelled {
            debug!(
                completed_trials = total.count,
                "Monte Carlo aggregation cancelled"
            );
            return Err(PricingError::Cancelled {
                completed_trials: total.count,
                partial_price: (total.count > 0).then(|| total.mean() * df),
            });
        }

        let price = total.mean() * df;
        let std_error = total.std_error() * df;
        if !price.is_finite() || !std_error.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "non-finite estimate (price = {}, std_error = {}) for {} {}",
                price,
                std_error,
                contract.option_type,
                contract.kind.name()
            )));
        }

        debug!(price, std_error, n_trials = total.count, "Monte Carlo aggregation finished");

        Ok(PricingResult {
            price,
            std_error,
            n_trials: total.count,
            ..Default::default()
        })
    }

    /// Prices with selected Greeks.
    ///
    /// Each bumped revaluation reuses the configured seed, so every
    /// scenario sees the same random numbers. Spot bumps are 1% of spot,
    /// the volatility bump is 0.01 absolute. Vega is only available for
    /// GBM and is left `None` for the stochastic-variance process.
    ///
    /// # Errors
    ///
    /// Same as [`price`](Self::price).
    pub fn price_with_greeks(
        &self,
        process: &StochasticProcess<f64>,
        contract: &ContractSpec,
        rate: f64,
        greeks: &[Greek],
    ) -> Result<PricingResult, PricingError> {
        self.price_with_greeks_cancellable(process, contract, rate, greeks, &CancelToken::new())
    }

    /// [`price_with_greeks`](Self::price_with_greeks) with every
    /// revaluation polling `cancel`.
    ///
    /// # Errors
    ///
    /// Same as [`price_with_cancel`](Self::price_with_cancel). When the
    /// cancellation lands in a bumped revaluation, the `Cancelled` error
    /// carries the completed unbumped estimate: `completed_trials` equals
    /// the configured trial count and `partial_price` is the base price.
    pub fn price_with_greeks_cancellable(
        &self,
        process: &StochasticProcess<f64>,
        contract: &ContractSpec,
        rate: f64,
        greeks: &[Greek],
        cancel: &CancelToken,
    ) -> Result<PricingResult, PricingError> {
        let mut result = self.price_with_cancel(process, contract, rate, cancel)?;
        let base = result;
        let reprice = |bumped: &StochasticProcess<f64>| {
            self.price_with_cancel(bumped, contract, rate, cancel)
                .map(|r| r.price)
                .map_err(|err| report_base_on_cancel(err, &base))
        };

        let wants = |g: Greek| greeks.contains(&g);
        if wants(Greek::Delta) || wants(Greek::Gamma) {
            let spot = process.spot();
            let bump = SPOT_BUMP * spot;
            let up = reprice(&process.with_spot(spot + bump))?;
            let down = reprice(&process.with_spot(spot - bump))?;

            if wants(Greek::Delta) {
                result.delta = Some((up - down) / (2.0 * bump));
            }
            if wants(Greek::Gamma) {
                result.gamma = Some((up - 2.0 * result.price + down) / (bump * bump));
            }
        }

        if wants(Greek::Vega) {
            if let StochasticProcess::Gbm(model) = process {
                let sigma = model.params().volatility;
                let bumped_up = StochasticProcess::Gbm(
                    model.with_volatility(sigma + VOL_BUMP).map_err(PricingError::from)?,
                );
                let up = reprice(&bumped_up)?;
                // forward difference when sigma is too small to bump down
                result.vega = Some(match model.with_volatility(sigma - VOL_BUMP) {
                    Ok(down_model) => {
                        let down = reprice(&StochasticProcess::Gbm(down_model))?;
                        (up - down) / (2.0 * VOL_BUMP)
                    }
                    Err(_) => (up - result.price) / VOL_BUMP,
                });
            }
        }

        Ok(result)
    }

    /// Runs all chunks on the rayon pool; `None` marks a skipped chunk.
    fn run_chunks(
        &self,
        process: &StochasticProcess<f64>,
        contract: &ContractSpec,
        extension_grid: Option<&TimeGrid>,
        cancel: &CancelToken,
    ) -> Vec<Option<ChunkStats>> {
        let n_trials = self.config.n_trials();
        let chunk_size = self.config.chunk_size();
        let seed = self.config.seed();
        let grid = &self.grid;
        let two_factor = process.is_two_factor();

        (0..self.config.n_chunks())
            .into_par_iter()
            .map(|chunk| {
                if cancel.is_cancelled() {
                    return None;
                }
                let start = chunk * chunk_size;
                let len = chunk_size.min(n_trials - start);

                let mut rng = PricerRng::for_stream(seed, chunk as u64);
                let mut path = SimulationPath::with_capacity(grid.n_steps(), two_factor);
                let mut continuation_path = SimulationPath::with_capacity(
                    extension_grid.map_or(0, TimeGrid::n_steps),
                    two_factor,
                );
                let mut stats = ChunkStats::default();

                for _ in 0..len {
                    simulate_into(process, grid, &mut rng, &mut path);
                    let mut continuation = |spot: f64| match extension_grid {
                        Some(ext) => {
                            let restarted = process.with_spot(spot);
                            simulate_into(&restarted, ext, &mut rng, &mut continuation_path);
                            continuation_path.terminal().unwrap_or(spot)
                        }
                        None => spot,
                    };
                    stats.push(contract.evaluate(path.prices(), &mut continuation));
                }
                Some(stats)
            })
            .collect()
    }
}

/// Continuation grid for an extendible; failures name `extension`, the
/// term the caller has to change.
fn extension_grid(dt: f64, extension: f64) -> Result<TimeGrid, PricingError> {
    TimeGrid::new(dt, extension).map_err(|err| match err {
        PricingError::InvalidParameter { constraint, .. } => PricingError::InvalidParameter {
            name: "extension",
            value: extension,
            constraint,
        },
        other => other,
    })
}

/// A bumped revaluation's partial estimate belongs to a shifted scenario;
/// once the base run has finished, cancellation reports that instead.
fn report_base_on_cancel(err: PricingError, base: &PricingResult) -> PricingError {
    match err {
        PricingError::Cancelled { .. } => PricingError::Cancelled {
            completed_trials: base.n_trials,
            partial_price: Some(base.price),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;
    use pricer_models::models::{GbmParams, StochasticVarianceParams};

    fn config(n_trials: usize, chunk_size: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_trials(n_trials)
            .dt(0.01)
            .maturity(1.0)
            .seed(7)
            .chunk_size(chunk_size)
            .build()
            .unwrap()
    }

    fn gbm() -> StochasticProcess<f64> {
        StochasticProcess::gbm(GbmParams::new(100.0, 0.01, 0.2).unwrap())
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    #[test]
    fn test_chunk_stats_moments() {
        let mut stats = ChunkStats::default();
        for x in [1.0, 2.0, 3.0, 4.0] {
            stats.push(x);
        }
        assert_relative_eq!(stats.mean(), 2.5);
        // sample variance 5/3, se = sqrt(5/12)
        assert_relative_eq!(stats.std_error(), (5.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_std_error() {
        let mut stats = ChunkStats::default();
        stats.push(3.0);
        assert_eq!(stats.std_error(), 0.0);
    }

    #[test]
    fn test_single_trial_is_discounted_payoff() {
        let pricer = MonteCarloPricer::new(config(1, 16)).unwrap();
        let contract = ContractSpec::vanilla(OptionType::Call, 100.0);
        let result = pricer.price(&gbm(), &contract, 0.01).unwrap();

        let mut rng = PricerRng::for_stream(7, 0);
        let path = super::super::paths::simulate_path(&gbm(), pricer.grid(), &mut rng);
        let payoff = (path.terminal().unwrap() - 100.0).max(0.0);

        assert_eq!(result.n_trials, 1);
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.price, payoff * (-0.01_f64).exp());
    }

    #[test]
    fn test_result_is_independent_of_pool_size() {
        let pricer = MonteCarloPricer::new(config(5_000, 256)).unwrap();
        let contract = ContractSpec::asian(OptionType::Put, 100.0);

        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| pricer.price(&gbm(), &contract, 0.01).unwrap());
        let many = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| pricer.price(&gbm(), &contract, 0.01).unwrap());

        assert_eq!(single, many);
    }

    #[test]
    fn test_cancelled_before_start() {
        let pricer = MonteCarloPricer::new(config(1_000, 100)).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = pricer
            .price_with_cancel(&gbm(), &ContractSpec::vanilla(OptionType::Call, 100.0), 0.01, &cancel)
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::Cancelled {
                completed_trials: 0,
                partial_price: None
            }
        );
    }

    #[test]
    fn test_rejects_invalid_inputs_before_simulation() {
        let pricer = MonteCarloPricer::new(config(100, 100)).unwrap();
        let err = pricer
            .price(&gbm(), &ContractSpec::extendible(OptionType::Call, 100.0, -1.0), 0.01)
            .unwrap_err();
        assert_eq!(err.parameter(), Some("extension"));

        let err = pricer
            .price(&gbm(), &ContractSpec::vanilla(OptionType::Call, 100.0), f64::NAN)
            .unwrap_err();
        assert_eq!(err.parameter(), Some("r"));
    }

    #[test]
    fn test_overlong_extension_names_extension() {
        let pricer = MonteCarloPricer::new(config(10, 10)).unwrap();
        // 20_000 years at dt = 0.01 needs two million continuation steps
        let contract = ContractSpec::extendible(OptionType::Call, 100.0, 20_000.0);
        let err = pricer.price(&gbm(), &contract, 0.01).unwrap_err();
        assert_eq!(err.parameter(), Some("extension"));
        assert!(matches!(
            err,
            PricingError::InvalidParameter { value, .. } if value == 20_000.0
        ));
    }

    #[test]
    fn test_non_finite_payout_is_rejected() {
        let pricer = MonteCarloPricer::new(config(10, 10)).unwrap();
        let contract = ContractSpec::binary(OptionType::Call, 100.0, f64::INFINITY);
        assert!(pricer.price(&gbm(), &contract, 0.0).is_err());
    }

    // ========================================================================
    // Greeks
    // ========================================================================

    #[test]
    fn test_greeks_have_expected_signs() {
        let pricer = MonteCarloPricer::new(config(20_000, 4096)).unwrap();
        let contract = ContractSpec::vanilla(OptionType::Call, 100.0);
        let result = pricer
            .price_with_greeks(&gbm(), &contract, 0.01, &[Greek::Delta, Greek::Gamma, Greek::Vega])
            .unwrap();

        let delta = result.delta.unwrap();
        assert!(delta > 0.45 && delta < 0.67, "delta = {}", delta);
        assert!(result.gamma.is_some());
        let vega = result.vega.unwrap();
        assert!(vega > 30.0 && vega < 50.0, "vega = {}", vega);
    }

    #[test]
    fn test_vega_not_reported_for_stochastic_variance() {
        let process = StochasticProcess::stochastic_variance(
            StochasticVarianceParams::new(100.0, 0.01, 0.0, 2.0, 0.04, -0.5, 0.3, 0.04).unwrap(),
        );
        let pricer = MonteCarloPricer::new(config(500, 500)).unwrap();
        let result = pricer
            .price_with_greeks(
                &process,
                &ContractSpec::vanilla(OptionType::Call, 100.0),
                0.01,
                &[Greek::Vega, Greek::Delta],
            )
            .unwrap();
        assert!(result.vega.is_none());
        assert!(result.delta.is_some());
    }

    #[test]
    fn test_cancelled_bump_reports_base_estimate() {
        let base = PricingResult {
            price: 8.45,
            std_error: 0.04,
            n_trials: 1_000,
            ..Default::default()
        };
        let bumped = PricingError::Cancelled {
            completed_trials: 243,
            partial_price: Some(8.99),
        };
        assert_eq!(
            report_base_on_cancel(bumped, &base),
            PricingError::Cancelled {
                completed_trials: 1_000,
                partial_price: Some(8.45)
            }
        );

        let other = PricingError::NumericalInstability("NaN".to_string());
        assert_eq!(report_base_on_cancel(other.clone(), &base), other);
    }

    #[test]
    fn test_cancel_during_greeks_never_reports_bumped_price() {
        let config = MonteCarloConfig::builder()
            .n_trials(100_000)
            .dt(0.01)
            .maturity(1.0)
            .seed(7)
            .chunk_size(256)
            .build()
            .unwrap();
        let pricer = MonteCarloPricer::new(config).unwrap();
        let contract = ContractSpec::vanilla(OptionType::Call, 100.0);
        let base = pricer.price(&gbm(), &contract, 0.01).unwrap();

        let started = std::time::Instant::now();
        pricer.price(&gbm(), &contract, 0.01).unwrap();
        let base_time = started.elapsed();

        // fire partway through the first bumped revaluation
        let cancel = CancelToken::new();
        let trigger = cancel.clone();
        let canceller = std::thread::spawn(move || {
            std::thread::sleep(base_time.mul_f64(1.5));
            trigger.cancel();
        });
        let outcome = pricer.price_with_greeks_cancellable(
            &gbm(),
            &contract,
            0.01,
            &[Greek::Delta, Greek::Gamma],
            &cancel,
        );
        canceller.join().unwrap();

        match outcome {
            Ok(result) => assert_eq!(result.price, base.price),
            Err(PricingError::Cancelled {
                completed_trials,
                partial_price,
            }) if completed_trials == base.n_trials => {
                assert_eq!(partial_price, Some(base.price));
            }
            Err(PricingError::Cancelled {
                completed_trials, ..
            }) => assert!(completed_trials < base.n_trials),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unrequested_greeks_are_none() {
        let pricer = MonteCarloPricer::new(config(100, 100)).unwrap();
        let result = pricer
            .price_with_greeks(&gbm(), &ContractSpec::vanilla(OptionType::Put, 100.0), 0.01, &[])
            .unwrap();
        assert_eq!(result.delta, None);
        assert_eq!(result.gamma, None);
        assert_eq!(result.vega, None);
    }
}
