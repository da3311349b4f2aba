//! Function-call pricing API.
//!
//! One entry point per contract kind. Each validates every input before
//! any trial runs, selects the process from [`SimulationInputs`] and hands
//! the contract to the [`MonteCarloPricer`].
//!
//! # Example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_pricing::api::{price_barrier, price_vanilla, SimulationInputs};
//!
//! let inputs = SimulationInputs {
//!     n_trials: 5_000,
//!     seed: 11,
//!     ..SimulationInputs::default()
//! };
//!
//! let vanilla = price_vanilla(OptionType::Call, 100.0, &inputs).unwrap();
//! let up_and_out = price_barrier(OptionType::Call, 100.0, 130.0, true, true, &inputs).unwrap();
//! assert!(up_and_out.price <= vanilla.price);
//! ```

use pricer_core::types::validation::require_positive;
use pricer_core::types::{OptionType, PricingError};
use pricer_models::models::{GbmParams, StochasticProcess, StochasticVarianceParams};

use crate::mc::{CancelToken, Greek, MonteCarloConfig, MonteCarloPricer, PricingResult, DEFAULT_CHUNK_SIZE};
use crate::path_dependent::ContractSpec;

/// Parameters of the stochastic-variance process.
///
/// Supplying these in [`SimulationInputs::variance_model`] switches the
/// simulation from GBM to the two-factor model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceModelInputs {
    /// Continuous dividend yield
    pub dividend: f64,
    /// Mean-reversion speed of the variance (alpha)
    pub mean_reversion: f64,
    /// Long-run variance level (beta)
    pub long_run_variance: f64,
    /// Correlation between price and variance shocks (rho)
    pub correlation: f64,
    /// Volatility of variance (vol_var)
    pub vol_of_variance: f64,
    /// Variance at time zero (inst_var0)
    pub initial_variance: f64,
}

impl Default for VarianceModelInputs {
    fn default() -> Self {
        Self {
            dividend: 0.0,
            mean_reversion: 2.0,
            long_run_variance: 0.04,
            correlation: -0.7,
            vol_of_variance: 0.3,
            initial_variance: 0.04,
        }
    }
}

/// Market, model and simulation inputs shared by every contract kind.
///
/// `drift` drives GBM paths; the stochastic-variance process drifts at
/// `rate - dividend` and ignores it. `volatility` is validated in both
/// cases.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationInputs {
    /// Number of trials (n)
    pub n_trials: usize,
    /// Risk-free rate used for discounting (r)
    pub rate: f64,
    /// Initial spot price (S0)
    pub spot: f64,
    /// GBM drift (mu)
    pub drift: f64,
    /// GBM volatility (sigma)
    pub volatility: f64,
    /// Nominal time step
    pub dt: f64,
    /// Maturity in years (T)
    pub maturity: f64,
    /// Stochastic-variance parameters; `None` selects GBM
    pub variance_model: Option<VarianceModelInputs>,
    /// Base seed for the random streams
    pub seed: u64,
    /// Trials per work unit
    pub chunk_size: usize,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            n_trials: 10_000,
            rate: 0.01,
            spot: 100.0,
            drift: 0.01,
            volatility: 0.2,
            dt: 0.01,
            maturity: 1.0,
            variance_model: None,
            seed: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SimulationInputs {
    /// Builds the process selected by these inputs.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming the first invalid model
    /// parameter.
    pub fn process(&self) -> Result<StochasticProcess<f64>, PricingError> {
        require_positive("sigma", self.volatility)?;
        match self.variance_model {
            None => Ok(StochasticProcess::gbm(GbmParams::new(
                self.spot,
                self.drift,
                self.volatility,
            )?)),
            Some(vm) => Ok(StochasticProcess::stochastic_variance(
                StochasticVarianceParams::new(
                    self.spot,
                    self.rate,
                    vm.dividend,
                    vm.mean_reversion,
                    vm.long_run_variance,
                    vm.correlation,
                    vm.vol_of_variance,
                    vm.initial_variance,
                )?,
            )),
        }
    }

    /// Builds the Monte Carlo configuration.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` for an out-of-range trial count,
    /// time step or maturity.
    pub fn config(&self) -> Result<MonteCarloConfig, PricingError> {
        Ok(MonteCarloConfig::builder()
            .n_trials(self.n_trials)
            .dt(self.dt)
            .maturity(self.maturity)
            .seed(self.seed)
            .chunk_size(self.chunk_size)
            .build()?)
    }
}

/// Prices any contract.
///
/// # Errors
///
/// - `InvalidParameter` for any invalid input, before simulation starts
/// - `NumericalInstability` if the estimate is not finite
pub fn price_contract(
    contract: &ContractSpec,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract_with(contract, inputs, &[], &CancelToken::new())
}

/// Prices any contract with optional Greeks and cancellation.
///
/// # Errors
///
/// As [`price_contract`], plus `PricingError::Cancelled` once `cancel`
/// fires.
pub fn price_contract_with(
    contract: &ContractSpec,
    inputs: &SimulationInputs,
    greeks: &[Greek],
    cancel: &CancelToken,
) -> Result<PricingResult, PricingError> {
    let config = inputs.config()?;
    let process = inputs.process()?;
    let pricer = MonteCarloPricer::new(config)?;

    pricer.price_with_greeks_cancellable(&process, contract, inputs.rate, greeks, cancel)
}

/// European vanilla option.
pub fn price_vanilla(
    option_type: OptionType,
    strike: f64,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract(&ContractSpec::vanilla(option_type, strike), inputs)
}

/// Cash-or-nothing binary option paying `payout`.
pub fn price_binary(
    option_type: OptionType,
    strike: f64,
    payout: f64,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract(&ContractSpec::binary(option_type, strike, payout), inputs)
}

/// Discretely monitored barrier option.
///
/// `up` selects an up barrier (touched by `S >= barrier`), otherwise a down
/// barrier (touched by `S <= barrier`). `knock_out` selects knock-out,
/// otherwise knock-in.
pub fn price_barrier(
    option_type: OptionType,
    strike: f64,
    barrier: f64,
    up: bool,
    knock_out: bool,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract(
        &ContractSpec::barrier(option_type, strike, barrier, up, knock_out),
        inputs,
    )
}

/// Arithmetic-average Asian option.
pub fn price_asian(
    option_type: OptionType,
    strike: f64,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract(&ContractSpec::asian(option_type, strike), inputs)
}

/// Holder-extendible option.
///
/// Out of the money at maturity, the option is extended by `extension`
/// years. The payoff is still discounted over the original maturity only.
pub fn price_extendible(
    option_type: OptionType,
    strike: f64,
    extension: f64,
    inputs: &SimulationInputs,
) -> Result<PricingResult, PricingError> {
    price_contract(
        &ContractSpec::extendible(option_type, strike, extension),
        inputs,
    )
}
