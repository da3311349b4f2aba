//! Small numeric helpers shared by models and the pricing engine.

/// Continuously-compounded discount factor `exp(-r * t)`.
///
/// # Examples
/// ```
/// use pricer_core::math::discount_factor;
///
/// assert_eq!(discount_factor(0.0_f64, 5.0), 1.0);
/// assert!((discount_factor(0.01_f64, 1.0) - 0.990_049_834).abs() < 1e-9);
/// ```
#[inline]
pub fn discount_factor<T: crate::traits::Float>(rate: T, time: T) -> T {
    (-rate * time).exp()
}

/// Arithmetic mean of a slice; `None` when empty.
///
/// # Examples
/// ```
/// use pricer_core::math::arithmetic_mean;
///
/// assert_eq!(arithmetic_mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(arithmetic_mean(&[]), None);
/// ```
#[inline]
pub fn arithmetic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_decreases_with_time() {
        let short = discount_factor(0.05_f64, 0.5);
        let long = discount_factor(0.05_f64, 2.0);
        assert!(long < short);
        assert_relative_eq!(short * short, discount_factor(0.05_f64, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_rate_discount_above_one() {
        assert!(discount_factor(-0.01_f64, 1.0) > 1.0);
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(arithmetic_mean(&[42.0]), Some(42.0));
    }
}
