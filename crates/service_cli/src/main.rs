//! Pricer CLI - Monte Carlo option pricing from the command line
//!
//! # Commands
//!
//! - `pricer price <vanilla|binary|barrier|asian|extendible>` - Monte Carlo price
//! - `pricer analytic` - Black-Scholes price and Greeks
//! - `pricer check` - Report configuration and run a convergence smoke test
//!
//! Simulation settings not given on the command line fall back to the
//! configuration file (`--config`, default `pricer.toml`) and `PRICER__*`
//! environment variables.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_core::types::OptionType;
use pricer_pricing::api::{SimulationInputs, VarianceModelInputs};
use pricer_pricing::path_dependent::{BarrierType, ContractSpec};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{CliConfig, PricingConfig};
pub use error::{CliError, Result};

/// Monte Carlo option pricer CLI
#[derive(Parser, Debug)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a contract by Monte Carlo simulation
    Price {
        #[command(flatten)]
        sim: SimArgs,

        /// Also estimate delta, gamma and vega by bump-and-revalue
        #[arg(long, global = true)]
        greeks: bool,

        /// Output format
        #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(subcommand)]
        contract: ContractCommand,
    },

    /// Black-Scholes price and Greeks of a European option
    Analytic {
        /// Call or put
        #[arg(value_name = "call|put")]
        option_type: OptionType,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Initial spot price
        #[arg(long, default_value_t = 100.0)]
        spot: f64,

        /// Volatility
        #[arg(long, default_value_t = 0.2)]
        volatility: f64,

        /// Time to expiry in years
        #[arg(short = 't', long, default_value_t = 1.0)]
        maturity: f64,

        /// Risk-free rate
        #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
        rate: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check configuration and run a small convergence test
    Check,
}

/// Contract to price, with its kind-specific terms.
#[derive(Subcommand, Debug)]
enum ContractCommand {
    /// European option on the terminal price
    Vanilla {
        #[command(flatten)]
        terms: BaseTerms,
    },
    /// Cash-or-nothing option on the terminal price
    Binary {
        #[command(flatten)]
        terms: BaseTerms,
        /// Cash paid when the option finishes in the money
        #[arg(long, default_value_t = 1.0)]
        payout: f64,
    },
    /// Knock-in or knock-out option monitored at every step
    Barrier {
        #[command(flatten)]
        terms: BaseTerms,
        /// Barrier level
        #[arg(short, long)]
        barrier: f64,
        /// up-and-in, up-and-out, down-and-in or down-and-out
        #[arg(long = "type", value_name = "TYPE")]
        barrier_type: BarrierType,
    },
    /// Arithmetic-average price option
    Asian {
        #[command(flatten)]
        terms: BaseTerms,
    },
    /// Option whose holder extends an out-of-the-money position
    Extendible {
        #[command(flatten)]
        terms: BaseTerms,
        /// Extension period in years
        #[arg(short, long)]
        extension: f64,
    },
}

/// Direction and strike shared by every contract.
#[derive(Args, Debug)]
struct BaseTerms {
    /// Call or put
    #[arg(value_name = "call|put")]
    option_type: OptionType,

    /// Strike price
    #[arg(short = 'k', long)]
    strike: f64,
}

impl ContractCommand {
    fn to_contract(&self) -> ContractSpec {
        match *self {
            Self::Vanilla { ref terms } => ContractSpec::vanilla(terms.option_type, terms.strike),
            Self::Binary { ref terms, payout } => {
                ContractSpec::binary(terms.option_type, terms.strike, payout)
            }
            Self::Barrier {
                ref terms,
                barrier,
                barrier_type,
            } => ContractSpec::barrier(
                terms.option_type,
                terms.strike,
                barrier,
                barrier_type.is_up(),
                barrier_type.is_knock_out(),
            ),
            Self::Asian { ref terms } => ContractSpec::asian(terms.option_type, terms.strike),
            Self::Extendible {
                ref terms,
                extension,
            } => ContractSpec::extendible(terms.option_type, terms.strike, extension),
        }
    }
}

/// Market, model and simulation arguments for `price`.
#[derive(Args, Debug)]
struct SimArgs {
    /// Number of trials [default: pricing.default_trials]
    #[arg(short = 'n', long, global = true)]
    trials: Option<usize>,

    /// Base seed [default: pricing.seed]
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Initial spot price
    #[arg(long, global = true, default_value_t = 100.0)]
    spot: f64,

    /// Risk-free rate used for discounting
    #[arg(long, global = true, default_value_t = 0.01, allow_negative_numbers = true)]
    rate: f64,

    /// GBM drift
    #[arg(long, global = true, default_value_t = 0.01, allow_negative_numbers = true)]
    drift: f64,

    /// GBM volatility
    #[arg(long, global = true, default_value_t = 0.2)]
    volatility: f64,

    /// Time step in years
    #[arg(long, global = true, default_value_t = 0.01)]
    dt: f64,

    /// Maturity in years
    #[arg(short = 't', long, global = true, default_value_t = 1.0)]
    maturity: f64,

    /// Simulate the stochastic-variance process instead of GBM
    #[arg(long, global = true)]
    stochastic_variance: bool,

    /// Continuous dividend yield (stochastic variance)
    #[arg(long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    dividend: f64,

    /// Variance mean-reversion speed (stochastic variance)
    #[arg(long, global = true, default_value_t = 2.0)]
    mean_reversion: f64,

    /// Long-run variance (stochastic variance)
    #[arg(long, global = true, default_value_t = 0.04)]
    long_run_variance: f64,

    /// Price/variance correlation (stochastic variance)
    #[arg(long, global = true, default_value_t = -0.7, allow_negative_numbers = true)]
    correlation: f64,

    /// Volatility of variance (stochastic variance)
    #[arg(long, global = true, default_value_t = 0.3)]
    vol_of_variance: f64,

    /// Initial variance (stochastic variance)
    #[arg(long, global = true, default_value_t = 0.04)]
    initial_variance: f64,
}

impl SimArgs {
    fn to_inputs(&self, pricing: &PricingConfig) -> SimulationInputs {
        let variance_model = self.stochastic_variance.then_some(VarianceModelInputs {
            dividend: self.dividend,
            mean_reversion: self.mean_reversion,
            long_run_variance: self.long_run_variance,
            correlation: self.correlation,
            vol_of_variance: self.vol_of_variance,
            initial_variance: self.initial_variance,
        });

        SimulationInputs {
            n_trials: self.trials.unwrap_or(pricing.default_trials),
            rate: self.rate,
            spot: self.spot,
            drift: self.drift,
            volatility: self.volatility,
            dt: self.dt,
            maturity: self.maturity,
            variance_model,
            seed: self.seed.unwrap_or(pricing.seed),
            chunk_size: pricing.chunk_size,
        }
    }
}

/// How command results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = CliConfig::load(&cli.config)?;

    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.verbose {
            "debug"
        } else {
            settings.general.log_level.as_str()
        };
        tracing_subscriber::EnvFilter::new(level)
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config, ?settings, "configuration loaded");

    rayon::ThreadPoolBuilder::new()
        .num_threads(settings.pricing.num_threads)
        .build_global()?;

    match cli.command {
        Commands::Price {
            sim,
            greeks,
            format,
            contract,
        } => commands::price::run(
            &contract.to_contract(),
            &sim.to_inputs(&settings.pricing),
            greeks,
            format,
            settings.pricing.timeout_secs,
        ),
        Commands::Analytic {
            option_type,
            strike,
            spot,
            volatility,
            maturity,
            rate,
            format,
        } => commands::analytic::run(option_type, strike, spot, volatility, maturity, rate, format),
        Commands::Check => commands::check::run(&settings),
    }
}
