//! Black-Scholes pricing model for European options.
//!
//! Closed-form prices and Greeks for European calls and puts under
//! lognormal dynamics. The Monte Carlo engine is checked against these
//! values when no path dependence is involved.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Expiries at or below this are priced at intrinsic value.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call);
/// let put = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot > zero) {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(volatility > zero) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn expired(expiry: T) -> bool {
        expiry <= T::from(EXPIRY_EPSILON).unwrap_or_else(T::zero)
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        let sigma_sqrt_t = self.volatility * expiry.sqrt();
        ((self.spot / strike).ln() + (self.rate + half * self.volatility * self.volatility) * expiry)
            / sigma_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European option price.
    ///
    /// Expired options are worth their intrinsic value.
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if Self::expired(expiry) {
            return option_type.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Delta (∂V/∂S): N(d₁) for calls, N(d₁) - 1 for puts.
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let one = T::one();
        let zero = T::zero();

        if Self::expired(expiry) {
            return match option_type {
                OptionType::Call if self.spot > strike => one,
                OptionType::Put if self.spot < strike => -one,
                _ => zero,
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - one,
        }
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T), identical for calls and puts.
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega (∂V/∂σ) = S·√T·φ(d₁), identical for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        self.spot * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// Theta (∂V/∂t), per year and usually negative.
    ///
    /// - Call: -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put: -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let two = T::one() + T::one();
        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * expiry.sqrt());
        let carry = self.rate * strike * (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }
}

/// Price and first-order Greeks of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticGreeks<T: Float> {
    /// Present value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (per year)
    pub theta: T,
}

/// Closed-form price and Greeks for a European option.
///
/// # Arguments
/// * `spot` - Current asset price (S)
/// * `volatility` - Annualised volatility (σ)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
/// * `rate` - Continuously-compounded risk-free rate (r)
/// * `option_type` - Call or put
///
/// # Errors
/// Non-positive spot, volatility or strike, and negative expiry.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::price_and_greeks;
///
/// let g = price_and_greeks(100.0_f64, 0.2, 100.0, 1.0, 0.01, OptionType::Call).unwrap();
/// assert!((g.price - 8.433).abs() < 1e-3);
/// assert!(g.delta > 0.5 && g.delta < 0.6);
/// ```
pub fn price_and_greeks<T: Float>(
    spot: T,
    volatility: T,
    strike: T,
    expiry: T,
    rate: T,
    option_type: OptionType,
) -> Result<AnalyticGreeks<T>, AnalyticalError> {
    if !(strike > T::zero()) {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !(expiry >= T::zero() && expiry.is_finite()) {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }

    let bs = BlackScholes::new(spot, rate, volatility)?;
    Ok(AnalyticGreeks {
        price: bs.price(strike, expiry, option_type),
        delta: bs.delta(strike, expiry, option_type),
        gamma: bs.gamma(strike, expiry),
        vega: bs.vega(strike, expiry),
        theta: bs.theta(strike, expiry, option_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ========================================================================
    // Reference case: S=100, σ=0.2, K=100, T=1, r=0.01
    // ========================================================================

    #[test]
    fn test_reference_call() {
        let g = price_and_greeks(100.0_f64, 0.2, 100.0, 1.0, 0.01, OptionType::Call).unwrap();
        assert_relative_eq!(g.price, 8.433_318, epsilon = 1e-4);
        assert_relative_eq!(g.delta, 0.559_618, epsilon = 1e-5);
        assert_relative_eq!(g.gamma, 0.019_724, epsilon = 1e-5);
        assert_relative_eq!(g.vega, 39.447_933, epsilon = 1e-4);
        assert_relative_eq!(g.theta, -4.420_082, epsilon = 1e-4);
    }

    #[test]
    fn test_reference_put() {
        let g = price_and_greeks(100.0_f64, 0.2, 100.0, 1.0, 0.01, OptionType::Put).unwrap();
        // P = C - S + K e^{-rT}
        assert_relative_eq!(g.price, 8.433_318 - 100.0 + 99.004_983, epsilon = 1e-4);
        assert_relative_eq!(g.delta, 0.559_618 - 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_call_put_share_gamma_and_vega() {
        let bs = BlackScholes::new(105.0_f64, 0.03, 0.25).unwrap();
        let call = price_and_greeks(105.0, 0.25, 95.0, 0.5, 0.03, OptionType::Call).unwrap();
        let put = price_and_greeks(105.0, 0.25, 95.0, 0.5, 0.03, OptionType::Put).unwrap();
        assert_relative_eq!(call.gamma, put.gamma);
        assert_relative_eq!(call.vega, put.vega);
        assert_relative_eq!(call.gamma, bs.gamma(95.0, 0.5));
    }

    // ========================================================================
    // Degenerate inputs
    // ========================================================================

    #[test]
    fn test_zero_expiry_is_intrinsic() {
        let g = price_and_greeks(110.0_f64, 0.2, 100.0, 0.0, 0.05, OptionType::Call).unwrap();
        assert_eq!(g.price, 10.0);
        assert_eq!(g.delta, 1.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(matches!(
            price_and_greeks(100.0_f64, 0.0, 100.0, 1.0, 0.01, OptionType::Call),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            price_and_greeks(-1.0_f64, 0.2, 100.0, 1.0, 0.01, OptionType::Call),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            price_and_greeks(100.0_f64, 0.2, 0.0, 1.0, 0.01, OptionType::Call),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            price_and_greeks(100.0_f64, 0.2, 100.0, -1.0, 0.01, OptionType::Call),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 50.0f64..150.0,
            strike in 50.0f64..150.0,
            vol in 0.05f64..0.8,
            rate in -0.02f64..0.1,
            expiry in 0.05f64..3.0,
        ) {
            let bs = BlackScholes::new(spot, rate, vol).unwrap();
            let lhs = bs.price(strike, expiry, OptionType::Call) - bs.price(strike, expiry, OptionType::Put);
            let rhs = spot - strike * (-rate * expiry).exp();
            prop_assert!((lhs - rhs).abs() < 1e-5);
        }

        #[test]
        fn prop_call_bounded_by_spot(
            spot in 50.0f64..150.0,
            strike in 50.0f64..150.0,
            vol in 0.05f64..0.8,
            expiry in 0.05f64..3.0,
        ) {
            let bs = BlackScholes::new(spot, 0.02, vol).unwrap();
            let call = bs.price(strike, expiry, OptionType::Call);
            prop_assert!(call >= -1e-6);
            prop_assert!(call <= spot + 1e-6);
        }
    }
}
