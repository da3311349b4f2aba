//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

use pricer_core::types::PricingError;

/// Error taxonomy is reachable from both the module and the re-export.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::PricingError as ModulePath;

    let err: ModulePath = PricingError::NumericalInstability("NaN".to_string());
    assert!(err.to_string().starts_with("Numerical instability"));
}

/// Option direction parses and evaluates intrinsic value.
#[test]
fn test_option_type_exports() {
    use pricer_core::types::option_type::OptionType;

    let put: OptionType = "put".parse().unwrap();
    assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
}

/// Validation helpers carry the parameter name into the error.
#[test]
fn test_validation_exports() {
    use pricer_core::types::validation::{require_non_negative, require_positive};

    let err = require_positive("dt", 0.0).unwrap_err();
    assert_eq!(err.parameter(), Some("dt"));
    assert!(require_non_negative("payout", 0.0).is_ok());
}

/// Numeric helpers work through the re-exported `Float` trait.
#[test]
fn test_math_exports() {
    use pricer_core::math::{arithmetic_mean, discount_factor};
    use pricer_core::traits::Float;

    fn generic_df<T: Float>(r: T, t: T) -> T {
        discount_factor(r, t)
    }

    assert_eq!(generic_df(0.0_f32, 1.0), 1.0);
    assert_eq!(arithmetic_mean(&[2.0, 4.0]), Some(3.0));
}
