//! Payoff trait and the continuation hook used by extendible contracts.

use pricer_core::types::PricingError;

/// Source of continuation terminals for contracts that extend past maturity.
///
/// Given the price at the original maturity, returns the terminal price of
/// a freshly simulated continuation. The continuation horizon is fixed by
/// whoever builds the hook. Any `FnMut(f64) -> f64` closure qualifies.
pub trait PathContinuation {
    /// Terminal price of a continuation starting at `spot`.
    fn continue_from(&mut self, spot: f64) -> f64;
}

impl<F> PathContinuation for F
where
    F: FnMut(f64) -> f64,
{
    #[inline]
    fn continue_from(&mut self, spot: f64) -> f64 {
        self(spot)
    }
}

/// Continuation for contracts that never extend.
///
/// Returns its input unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContinuation;

impl PathContinuation for NoContinuation {
    #[inline]
    fn continue_from(&mut self, spot: f64) -> f64 {
        spot
    }
}

/// Undiscounted payoff of one simulated trial.
///
/// `prices` holds the simulated points after each step, the initial spot
/// excluded. An empty path pays zero.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for parallel Monte Carlo.
pub trait PathPayoff: Send + Sync {
    /// Computes the payoff of one trial.
    fn evaluate<C: PathContinuation>(&self, prices: &[f64], continuation: &mut C) -> f64;

    /// Checks the contract terms.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming the offending term.
    fn validate(&self) -> Result<(), PricingError>;
}
