//! Option direction (call or put).

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Direction of an option payoff.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: pays max(S - K, 0)
    Call,
    /// Right to sell: pays max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns true for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let diff = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        diff.max(T::zero())
    }

    /// Whether `spot` finishes on the paying side of `strike`.
    ///
    /// The boundary counts as in-the-money for both directions, which is
    /// how binary payoffs settle at the strike.
    #[inline]
    pub fn is_in_the_money<T: Float>(&self, spot: T, strike: T) -> bool {
        match self {
            OptionType::Call => spot >= strike,
            OptionType::Put => spot <= strike,
        }
    }

    /// Lower-case name used on the command line and in serialised output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::UnsupportedContractType(format!(
                "unknown option direction '{}': expected call or put",
                other
            ))),
        }
    }
}
