//! Arithmetic-average Asian option payoff.
//!
//! The average runs over every emitted path point (the initial spot is not
//! one of them) and is compared against the strike like a vanilla terminal.

use pricer_core::math::arithmetic_mean;
use pricer_core::types::OptionType;

use super::terminal::vanilla_payoff;

/// Asian payoff on the arithmetic mean of `prices`; zero for an empty path.
#[inline]
pub fn asian_payoff(option_type: OptionType, strike: f64, prices: &[f64]) -> f64 {
    arithmetic_mean(prices).map_or(0.0, |avg| vanilla_payoff(option_type, strike, avg))
}
