//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to Black-Scholes
//! values where a closed form exists.
//!
//! # Test Categories
//!
//! 1. **Vanilla Options**: MC vs Black-Scholes price and delta
//! 2. **Binary Options**: MC vs discounted `N(d2)`
//! 3. **Stochastic Variance**: degenerate variance process vs Black-Scholes
//! 4. **Convergence Tests**: standard error shrinks as `1/sqrt(n)`

use approx::assert_relative_eq;
use pricer_core::types::OptionType;
use pricer_models::analytical::distributions::norm_cdf;
use pricer_models::analytical::{price_and_greeks, BlackScholes};
use pricer_pricing::api::{
    price_binary, price_contract_with, price_vanilla, SimulationInputs, VarianceModelInputs,
};
use pricer_pricing::mc::{CancelToken, Greek};
use pricer_pricing::path_dependent::ContractSpec;

/// Standard test parameters: S0=100, K=100, r=mu=0.01, sigma=0.2, T=1.
fn standard_inputs(n_trials: usize) -> SimulationInputs {
    SimulationInputs {
        n_trials,
        rate: 0.01,
        spot: 100.0,
        drift: 0.01,
        volatility: 0.2,
        dt: 0.01,
        maturity: 1.0,
        variance_model: None,
        seed: 42,
        ..SimulationInputs::default()
    }
}

// ============================================================================
// Vanilla Option Tests
// ============================================================================

#[test]
fn test_vanilla_call_mc_vs_black_scholes() {
    let analytical = price_and_greeks(100.0, 0.2, 100.0, 1.0, 0.01, OptionType::Call)
        .unwrap()
        .price;
    assert_relative_eq!(analytical, 8.433_318_690, epsilon = 1e-6);

    let result = price_vanilla(OptionType::Call, 100.0, &standard_inputs(100_000)).unwrap();

    let tolerance = 4.0 * result.std_error;
    let error = (result.price - analytical).abs();
    assert!(
        error < tolerance.max(0.2),
        "Vanilla Call: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        result.price,
        analytical,
        error,
        tolerance
    );
}

#[test]
fn test_vanilla_put_mc_vs_black_scholes() {
    let bs = BlackScholes::new(100.0, 0.01, 0.2).unwrap();
    let analytical = bs.price(100.0, 1.0, OptionType::Put);

    let result = price_vanilla(OptionType::Put, 100.0, &standard_inputs(100_000)).unwrap();

    let tolerance = 4.0 * result.std_error;
    let error = (result.price - analytical).abs();
    assert!(
        error < tolerance.max(0.2),
        "Vanilla Put: MC={:.4}, Analytical={:.4}, Error={:.4}",
        result.price,
        analytical,
        error
    );
}

#[test]
fn test_put_call_parity_on_shared_paths() {
    // Same seed, same paths: C - P is the discounted mean of S_T - K.
    let inputs = standard_inputs(100_000);
    let call = price_vanilla(OptionType::Call, 100.0, &inputs).unwrap();
    let put = price_vanilla(OptionType::Put, 100.0, &inputs).unwrap();

    let df = (-0.01_f64).exp();
    let forward_value = 100.0 - 100.0 * df;
    // sd(S_T) is about 20, so the sampling error of the mean forward is ~0.06
    let tolerance = 4.0 * 20.0 * df / (inputs.n_trials as f64).sqrt() + 0.01;
    let error = (call.price - put.price - forward_value).abs();
    assert!(
        error < tolerance,
        "Parity: C={:.4}, P={:.4}, C-P={:.4}, expected {:.4}",
        call.price,
        put.price,
        call.price - put.price,
        forward_value
    );
}

#[test]
fn test_delta_mc_vs_black_scholes() {
    let analytical = price_and_greeks(100.0, 0.2, 100.0, 1.0, 0.01, OptionType::Call).unwrap();

    let result = price_contract_with(
        &ContractSpec::vanilla(OptionType::Call, 100.0),
        &standard_inputs(50_000),
        &[Greek::Delta, Greek::Vega],
        &CancelToken::new(),
    )
    .unwrap();

    let delta = result.delta.unwrap();
    assert!(
        (delta - analytical.delta).abs() < 0.03,
        "Delta: MC={:.4}, Analytical={:.4}",
        delta,
        analytical.delta
    );
    let vega = result.vega.unwrap();
    assert!(
        (vega - analytical.vega).abs() < 3.0,
        "Vega: MC={:.4}, Analytical={:.4}",
        vega,
        analytical.vega
    );
}

// ============================================================================
// Binary Option Tests
// ============================================================================

#[test]
fn test_binary_call_mc_vs_discounted_probability() {
    let bs = BlackScholes::new(100.0, 0.01, 0.2).unwrap();
    let d2 = bs.d2(100.0, 1.0);
    let df = (-0.01_f64).exp();
    let analytical = df * norm_cdf(d2);

    let result = price_binary(OptionType::Call, 100.0, 1.0, &standard_inputs(100_000)).unwrap();

    let tolerance = 4.0 * result.std_error;
    let error = (result.price - analytical).abs();
    assert!(
        error < tolerance.max(0.01),
        "Binary Call: MC={:.5}, Analytical={:.5}, Error={:.5}",
        result.price,
        analytical,
        error
    );
}

// ============================================================================
// Stochastic Variance Tests
// ============================================================================

#[test]
fn test_degenerate_variance_process_matches_black_scholes() {
    // Variance pinned at sigma^2 = 0.04 with negligible vol of variance.
    let inputs = SimulationInputs {
        variance_model: Some(VarianceModelInputs {
            dividend: 0.0,
            mean_reversion: 1.0,
            long_run_variance: 0.04,
            correlation: 0.0,
            vol_of_variance: 1e-6,
            initial_variance: 0.04,
        }),
        ..standard_inputs(100_000)
    };
    let analytical = BlackScholes::new(100.0, 0.01, 0.2)
        .unwrap()
        .price(100.0, 1.0, OptionType::Call);

    let result = price_vanilla(OptionType::Call, 100.0, &inputs).unwrap();

    let tolerance = 4.0 * result.std_error;
    let error = (result.price - analytical).abs();
    assert!(
        error < tolerance.max(0.2),
        "Degenerate SV Call: MC={:.4}, Analytical={:.4}, Error={:.4}",
        result.price,
        analytical,
        error
    );
}

#[test]
fn test_put_call_parity_with_dividend_under_stochastic_variance() {
    // Price drifts at r - div: C - P = S0*exp(-div*T) - K*exp(-r*T).
    let inputs = SimulationInputs {
        variance_model: Some(VarianceModelInputs {
            dividend: 0.03,
            ..VarianceModelInputs::default()
        }),
        ..standard_inputs(100_000)
    };
    let call = price_vanilla(OptionType::Call, 100.0, &inputs).unwrap();
    let put = price_vanilla(OptionType::Put, 100.0, &inputs).unwrap();

    let forward_value = 100.0 * (-0.03_f64).exp() - 100.0 * (-0.01_f64).exp();
    // sd(S_T) is about 20, so the sampling error of the mean forward is ~0.06
    let tolerance = 4.0 * 20.0 / (inputs.n_trials as f64).sqrt() + 0.01;
    let error = (call.price - put.price - forward_value).abs();
    assert!(
        error < tolerance,
        "SV parity: C={:.4}, P={:.4}, C-P={:.4}, expected {:.4}",
        call.price,
        put.price,
        call.price - put.price,
        forward_value
    );
    // a dividend-blind drift would land near 100 - 100*exp(-r), about +1.0
    assert!(call.price - put.price < 0.0);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_std_error_scales_with_sqrt_n() {
    let small = price_vanilla(OptionType::Call, 100.0, &standard_inputs(10_000)).unwrap();
    let large = price_vanilla(OptionType::Call, 100.0, &standard_inputs(40_000)).unwrap();

    let ratio = large.std_error / small.std_error;
    assert!(
        (ratio - 0.5).abs() < 0.05,
        "std_error ratio for 4x trials = {:.4}",
        ratio
    );
    assert_eq!(large.n_trials, 40_000);
}
