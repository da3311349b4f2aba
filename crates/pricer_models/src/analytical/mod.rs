//! Closed-form pricing.
//!
//! - [`BlackScholes`]: European prices and Greeks under lognormal dynamics
//! - [`price_and_greeks`]: one-call price, delta, gamma, vega and theta
//! - [`distributions`]: standard normal CDF and PDF

mod black_scholes;
pub mod distributions;
mod error;

pub use black_scholes::{price_and_greeks, AnalyticGreeks, BlackScholes};
pub use error::AnalyticalError;
