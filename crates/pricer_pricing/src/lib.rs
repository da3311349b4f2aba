//! # Pricer Engine: Monte Carlo pricing
//!
//! ## Engine Role
//!
//! pricer_pricing turns a stochastic process from `pricer_models` and a
//! contract description into a discounted price estimate:
//! - Seeded, per-chunk random streams (`rng`)
//! - Time grids, path simulation and parallel aggregation (`mc`)
//! - Vanilla, binary, barrier, Asian and extendible payoffs (`path_dependent`)
//! - One function per contract kind (`api`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_pricing::api::{price_vanilla, SimulationInputs};
//!
//! let inputs = SimulationInputs {
//!     n_trials: 20_000,
//!     seed: 42,
//!     ..SimulationInputs::default()
//! };
//! let result = price_vanilla(OptionType::Call, 100.0, &inputs).unwrap();
//!
//! // Black-Scholes value is 8.4333
//! assert!((result.price - 8.4333).abs() < 4.0 * result.std_error + 0.1);
//! ```
//!
//! ## Reproducibility
//!
//! The same inputs and seed produce bit-identical results regardless of
//! the number of rayon worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod api;
pub mod mc;
pub mod path_dependent;
pub mod rng;

// Re-export commonly used items for convenience
pub use api::{
    price_asian, price_barrier, price_binary, price_contract, price_extendible, price_vanilla,
    SimulationInputs, VarianceModelInputs,
};
pub use mc::{CancelToken, Greek, MonteCarloConfig, MonteCarloPricer, PricingResult};
pub use path_dependent::{BarrierType, ContractKind, ContractSpec};
