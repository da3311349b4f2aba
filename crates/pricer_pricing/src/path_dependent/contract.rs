//! Contract description and payoff dispatch.
//!
//! [`ContractSpec`] pairs the direction and strike shared by every contract
//! with a [`ContractKind`] carrying the kind-specific terms. Evaluation is
//! static dispatch over the kind, mirroring how the engine dispatches over
//! stochastic processes.

use pricer_core::types::validation::{require_non_negative, require_positive};
use pricer_core::types::{OptionType, PricingError};

use super::asian::asian_payoff;
use super::barrier::{barrier_payoff, BarrierType};
use super::extendible::extendible_payoff;
use super::payoff::{PathContinuation, PathPayoff};
use super::terminal::{binary_payoff, vanilla_payoff};

/// Kind-specific contract terms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ContractKind {
    /// European vanilla
    Vanilla,
    /// Cash-or-nothing binary
    Binary {
        /// Cash amount paid when in the money
        payout: f64,
    },
    /// Discretely monitored barrier
    Barrier {
        /// Barrier level
        level: f64,
        /// Direction and knock behaviour
        barrier_type: BarrierType,
    },
    /// Arithmetic-average Asian
    Asian,
    /// Holder-extendible
    Extendible {
        /// Length of the continuation in years
        extension: f64,
    },
}

impl ContractKind {
    /// Lower-case kind name.
    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::Vanilla => "vanilla",
            ContractKind::Binary { .. } => "binary",
            ContractKind::Barrier { .. } => "barrier",
            ContractKind::Asian => "asian",
            ContractKind::Extendible { .. } => "extendible",
        }
    }
}

/// A priceable contract.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_pricing::path_dependent::{ContractSpec, NoContinuation, PathPayoff};
///
/// let contract = ContractSpec::barrier(OptionType::Call, 100.0, 120.0, true, true);
/// assert_eq!(contract.evaluate(&[105.0, 115.0], &mut NoContinuation), 15.0);
/// assert_eq!(contract.evaluate(&[105.0, 125.0, 115.0], &mut NoContinuation), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractSpec {
    /// Call or put
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Kind-specific terms
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ContractKind,
}

impl ContractSpec {
    /// European vanilla option.
    pub fn vanilla(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
            kind: ContractKind::Vanilla,
        }
    }

    /// Cash-or-nothing binary option.
    pub fn binary(option_type: OptionType, strike: f64, payout: f64) -> Self {
        Self {
            option_type,
            strike,
            kind: ContractKind::Binary { payout },
        }
    }

    /// Barrier option from the `(up, knock_out)` flags.
    pub fn barrier(option_type: OptionType, strike: f64, level: f64, up: bool, knock_out: bool) -> Self {
        Self {
            option_type,
            strike,
            kind: ContractKind::Barrier {
                level,
                barrier_type: BarrierType::from_flags(up, knock_out),
            },
        }
    }

    /// Arithmetic-average Asian option.
    pub fn asian(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
            kind: ContractKind::Asian,
        }
    }

    /// Holder-extendible option.
    pub fn extendible(option_type: OptionType, strike: f64, extension: f64) -> Self {
        Self {
            option_type,
            strike,
            kind: ContractKind::Extendible { extension },
        }
    }

    /// Continuation length for extendible contracts.
    #[inline]
    pub fn extension(&self) -> Option<f64> {
        match self.kind {
            ContractKind::Extendible { extension } => Some(extension),
            _ => None,
        }
    }
}

impl PathPayoff for ContractSpec {
    fn evaluate<C: PathContinuation>(&self, prices: &[f64], continuation: &mut C) -> f64 {
        let Some(&terminal) = prices.last() else {
            return 0.0;
        };
        match self.kind {
            ContractKind::Vanilla => vanilla_payoff(self.option_type, self.strike, terminal),
            ContractKind::Binary { payout } => {
                binary_payoff(self.option_type, self.strike, payout, terminal)
            }
            ContractKind::Barrier {
                level,
                barrier_type,
            } => barrier_payoff(self.option_type, self.strike, level, barrier_type, prices),
            ContractKind::Asian => asian_payoff(self.option_type, self.strike, prices),
            ContractKind::Extendible { .. } => {
                extendible_payoff(self.option_type, self.strike, terminal, continuation)
            }
        }
    }

    fn validate(&self) -> Result<(), PricingError> {
        require_non_negative("strike", self.strike)?;
        match self.kind {
            ContractKind::Vanilla | ContractKind::Asian => Ok(()),
            ContractKind::Binary { payout } => require_non_negative("payout", payout),
            ContractKind::Barrier { level, .. } => require_positive("barrier", level),
            ContractKind::Extendible { extension } => require_positive("extension", extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::payoff::NoContinuation;
    use super::*;

    const PATH: [f64; 4] = [95.0, 112.0, 104.0, 108.0];

    #[test]
    fn test_dispatch_matches_payoff_functions() {
        let mut none = NoContinuation;
        assert_eq!(
            ContractSpec::vanilla(OptionType::Call, 100.0).evaluate(&PATH, &mut none),
            8.0
        );
        assert_eq!(
            ContractSpec::binary(OptionType::Put, 100.0, 3.0).evaluate(&PATH, &mut none),
            0.0
        );
        assert_eq!(
            ContractSpec::barrier(OptionType::Call, 100.0, 110.0, true, false)
                .evaluate(&PATH, &mut none),
            8.0
        );
        assert_eq!(
            ContractSpec::asian(OptionType::Call, 100.0).evaluate(&PATH, &mut none),
            4.75
        );
    }

    #[test]
    fn test_extendible_uses_continuation() {
        let contract = ContractSpec::extendible(OptionType::Put, 100.0, 0.5);
        let mut continuation = |s: f64| s - 20.0;
        // terminal 108 is out of the money for the put; extended to 88
        assert_eq!(contract.evaluate(&PATH, &mut continuation), 12.0);
        assert_eq!(contract.extension(), Some(0.5));
        assert_eq!(ContractSpec::asian(OptionType::Put, 1.0).extension(), None);
    }

    #[test]
    fn test_empty_path_pays_nothing() {
        let contract = ContractSpec::binary(OptionType::Call, 0.0, 1.0);
        assert_eq!(contract.evaluate(&[], &mut NoContinuation), 0.0);
    }

    #[test]
    fn test_validation_names_offending_term() {
        let cases = [
            (ContractSpec::vanilla(OptionType::Call, -1.0), "strike"),
            (ContractSpec::binary(OptionType::Call, 100.0, f64::INFINITY), "payout"),
            (ContractSpec::binary(OptionType::Put, 100.0, -5.0), "payout"),
            (ContractSpec::barrier(OptionType::Call, 100.0, 0.0, true, true), "barrier"),
            (ContractSpec::extendible(OptionType::Call, 100.0, 0.0), "extension"),
        ];
        for (contract, name) in cases {
            assert_eq!(contract.validate().unwrap_err().parameter(), Some(name));
        }
        assert!(ContractSpec::asian(OptionType::Put, 100.0).validate().is_ok());
    }

    #[test]
    fn test_zero_payout_binary_is_valid() {
        assert!(ContractSpec::binary(OptionType::Call, 100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ContractSpec::asian(OptionType::Call, 1.0).kind.name(), "asian");
        assert_eq!(
            ContractSpec::extendible(OptionType::Call, 1.0, 1.0).kind.name(),
            "extendible"
        );
    }
}
