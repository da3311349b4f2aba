//! Payoffs that depend only on the terminal price.

use pricer_core::types::OptionType;

/// European vanilla payoff: `max(S_T - K, 0)` or `max(K - S_T, 0)`.
#[inline]
pub fn vanilla_payoff(option_type: OptionType, strike: f64, terminal: f64) -> f64 {
    option_type.intrinsic(terminal, strike)
}

/// Cash-or-nothing payoff.
///
/// Pays `payout` when `S_T >= K` (call) or `S_T <= K` (put). Ties at the
/// strike pay for both directions.
#[inline]
pub fn binary_payoff(option_type: OptionType, strike: f64, payout: f64, terminal: f64) -> f64 {
    if option_type.is_in_the_money(terminal, strike) {
        payout
    } else {
        0.0
    }
}
