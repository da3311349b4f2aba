//! Monte Carlo simulation and aggregation.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (trials, dt, maturity, seed, chunk size)
//! ├── TimeGrid          (step lengths from 0 to maturity)
//! ├── SimulationPath    (per-worker reusable path buffer)
//! ├── PricerRng         (one stream per chunk)
//! └── Orchestration
//!     ├── simulate_into()
//!     ├── PathPayoff::evaluate()
//!     └── chunked (sum, sum_sq, count) reduction
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_models::models::{GbmParams, StochasticProcess};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::path_dependent::ContractSpec;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_trials(5_000)
//!     .dt(1.0 / 52.0)
//!     .maturity(1.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let process = StochasticProcess::gbm(GbmParams::new(100.0, 0.01, 0.2).unwrap());
//! let asian = pricer
//!     .price(&process, &ContractSpec::asian(OptionType::Call, 100.0), 0.01)
//!     .unwrap();
//! let vanilla = pricer
//!     .price(&process, &ContractSpec::vanilla(OptionType::Call, 100.0), 0.01)
//!     .unwrap();
//!
//! assert!(asian.price < vanilla.price);
//! ```

mod cancel;
mod config;
mod error;
mod grid;
mod paths;
mod pricer;

pub use cancel::CancelToken;
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_TRIALS};
pub use error::ConfigError;
pub use grid::{TimeGrid, MAX_STEPS};
pub use paths::{simulate_into, simulate_path, SimulationPath};
pub use pricer::{Greek, MonteCarloPricer, PricingResult};
