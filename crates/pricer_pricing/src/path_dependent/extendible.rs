//! Holder-extendible option payoff.
//!
//! At the original maturity an in-the-money option is exercised as a
//! vanilla. Otherwise the holder extends it: a continuation of length
//! `extension` is simulated from the maturity price and the vanilla payoff
//! is taken on the continuation's terminal price instead.

use pricer_core::types::OptionType;

use super::payoff::PathContinuation;
use super::terminal::vanilla_payoff;

/// Extendible payoff given the terminal price at the original maturity.
///
/// `continuation` is only consulted when the option finishes out of the
/// money (at-the-strike counts as in the money and pays zero).
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_pricing::path_dependent::extendible_payoff;
///
/// // in the money: exercised immediately
/// assert_eq!(extendible_payoff(OptionType::Call, 100.0, 110.0, &mut |_: f64| -> f64 { unreachable!() }), 10.0);
/// // out of the money: extended to a continuation ending at 125
/// assert_eq!(extendible_payoff(OptionType::Call, 100.0, 90.0, &mut |_: f64| 125.0), 25.0);
/// ```
pub fn extendible_payoff<C: PathContinuation>(
    option_type: OptionType,
    strike: f64,
    terminal: f64,
    continuation: &mut C,
) -> f64 {
    if option_type.is_in_the_money(terminal, strike) {
        vanilla_payoff(option_type, strike, terminal)
    } else {
        let extended = continuation.continue_from(terminal);
        vanilla_payoff(option_type, strike, extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_the_money_skips_continuation() {
        let mut calls = 0;
        let mut continuation = |s: f64| {
            calls += 1;
            s
        };
        let payoff = extendible_payoff(OptionType::Put, 100.0, 80.0, &mut continuation);
        assert_eq!(payoff, 20.0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_out_of_the_money_extends_from_terminal() {
        let mut seen = None;
        let mut continuation = |s: f64| {
            seen = Some(s);
            70.0
        };
        let payoff = extendible_payoff(OptionType::Put, 100.0, 120.0, &mut continuation);
        assert_eq!(payoff, 30.0);
        assert_eq!(seen, Some(120.0));
    }

    #[test]
    fn test_extension_can_still_expire_worthless() {
        let payoff = extendible_payoff(OptionType::Call, 100.0, 90.0, &mut |_: f64| 95.0);
        assert_eq!(payoff, 0.0);
    }

    #[test]
    fn test_at_the_strike_is_exercised() {
        let payoff = extendible_payoff(OptionType::Call, 100.0, 100.0, &mut |_: f64| 150.0);
        assert_eq!(payoff, 0.0);
    }
}
