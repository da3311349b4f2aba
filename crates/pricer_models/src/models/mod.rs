//! Stochastic process models.
//!
//! - `StochasticModel` trait: one-step state evolution from normal draws
//! - `GbmModel`: Geometric Brownian Motion (Euler)
//! - `StochasticVarianceModel`: Heston-style price and variance
//! - `StochasticProcess`: static dispatch selector used by the engine
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{StochasticProcess, StochasticVarianceParams};
//!
//! let params = StochasticVarianceParams::new(100.0_f64, 0.01, 0.0, 2.0, 0.04, -0.7, 0.3, 0.04)
//!     .unwrap();
//! let process = StochasticProcess::stochastic_variance(params);
//!
//! let mut state = process.initial_state();
//! for dw in [[0.1, -0.2], [0.3, 0.0], [-1.0, 0.5]] {
//!     state = process.evolve_step(state, 0.01, &dw);
//! }
//! assert!(state.variance().unwrap() >= 1e-7);
//! ```

mod error;
pub mod gbm;
pub mod model_enum;
pub mod stochastic;
pub mod stochastic_variance;

pub use error::ModelError;
pub use gbm::{GbmModel, GbmParams};
pub use model_enum::{ProcessState, StochasticProcess};
pub use stochastic::{SingleState, StochasticModel, StochasticState, TwoFactorState};
pub use stochastic_variance::{StochasticVarianceModel, StochasticVarianceParams, VARIANCE_FLOOR};
