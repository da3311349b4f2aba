//! Barrier option payoffs.
//!
//! - **Up-and-In**: pays vanilla only if the path reaches the barrier from below
//! - **Up-and-Out**: pays vanilla only if the path never reaches it
//! - **Down-and-In**: pays vanilla only if the path reaches the barrier from above
//! - **Down-and-Out**: pays vanilla only if the path never reaches it
//!
//! The barrier is monitored discretely at every emitted path point, and
//! touching the level counts as crossing it.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionType, PricingError};

use super::terminal::vanilla_payoff;

/// Barrier type enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BarrierType {
    /// Up-and-In: activates when price reaches the barrier from below
    UpIn,
    /// Up-and-Out: deactivates when price reaches the barrier from below
    UpOut,
    /// Down-and-In: activates when price reaches the barrier from above
    DownIn,
    /// Down-and-Out: deactivates when price reaches the barrier from above
    DownOut,
}

impl BarrierType {
    /// Builds the barrier type from direction and knock flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::path_dependent::BarrierType;
    ///
    /// assert_eq!(BarrierType::from_flags(true, true), BarrierType::UpOut);
    /// assert_eq!(BarrierType::from_flags(false, false), BarrierType::DownIn);
    /// ```
    #[inline]
    pub fn from_flags(up: bool, knock_out: bool) -> Self {
        match (up, knock_out) {
            (true, true) => BarrierType::UpOut,
            (true, false) => BarrierType::UpIn,
            (false, true) => BarrierType::DownOut,
            (false, false) => BarrierType::DownIn,
        }
    }

    /// Returns true if this is an "up" barrier.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// Returns true if this is a knock-out barrier.
    #[inline]
    pub fn is_knock_out(&self) -> bool {
        matches!(self, BarrierType::UpOut | BarrierType::DownOut)
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierType::UpIn => "up-and-in",
            BarrierType::UpOut => "up-and-out",
            BarrierType::DownIn => "down-and-in",
            BarrierType::DownOut => "down-and-out",
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarrierType {
    type Err = PricingError;

    /// Accepts `up-and-in`, `up-in` or `ui` style names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up-and-in" | "up-in" | "ui" => Ok(BarrierType::UpIn),
            "up-and-out" | "up-out" | "uo" => Ok(BarrierType::UpOut),
            "down-and-in" | "down-in" | "di" => Ok(BarrierType::DownIn),
            "down-and-out" | "down-out" | "do" => Ok(BarrierType::DownOut),
            _ => Err(PricingError::UnsupportedContractType(s.to_string())),
        }
    }
}

/// Whether any point of `prices` reaches `level`.
///
/// Up barriers are touched by a point `>= level`, down barriers by a point
/// `<= level`. The scan stops at the first touch.
#[inline]
pub fn barrier_touched(prices: &[f64], level: f64, up: bool) -> bool {
    if up {
        prices.iter().any(|&s| s >= level)
    } else {
        prices.iter().any(|&s| s <= level)
    }
}

/// Barrier payoff on a discretely monitored path.
pub fn barrier_payoff(
    option_type: OptionType,
    strike: f64,
    level: f64,
    barrier_type: BarrierType,
    prices: &[f64],
) -> f64 {
    let Some(&terminal) = prices.last() else {
        return 0.0;
    };
    let touched = barrier_touched(prices, level, barrier_type.is_up());
    if touched != barrier_type.is_knock_out() {
        vanilla_payoff(option_type, strike, terminal)
    } else {
        0.0
    }
}
