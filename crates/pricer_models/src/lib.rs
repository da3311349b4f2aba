//! # pricer_models: Stochastic processes and analytic pricing
//!
//! ## Models Layer Role
//!
//! pricer_models sits between the foundation (`pricer_core`) and the Monte
//! Carlo engine (`pricer_pricing`) and provides:
//! - Stochastic process models stepped from standard normal draws (`models`)
//! - The process selector `StochasticProcess` (GBM or stochastic variance)
//! - Black-Scholes closed-form prices and Greeks (`analytical`)
//!
//! Models never own a random source; the engine supplies the draws.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_models::analytical::price_and_greeks;
//! use pricer_models::models::{GbmParams, StochasticProcess};
//!
//! let process = StochasticProcess::gbm(GbmParams::new(100.0_f64, 0.01, 0.2).unwrap());
//! let next = process.evolve_step(process.initial_state(), 0.01, &[0.5]);
//! assert!(next.price() > 100.0);
//!
//! let bs = price_and_greeks(100.0_f64, 0.2, 100.0, 1.0, 0.01, OptionType::Call).unwrap();
//! assert!(bs.price > 8.0);
//! ```

#![deny(missing_docs)]

pub mod analytical;
pub mod models;
