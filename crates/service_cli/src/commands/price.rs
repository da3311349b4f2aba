//! Price command implementation
//!
//! Prices one contract with the Monte Carlo engine, optionally with
//! bump-and-revalue Greeks and a wall-clock limit.

use std::thread;
use std::time::{Duration, Instant};

use pricer_core::types::PricingError;
use pricer_models::models::StochasticProcess;
use pricer_pricing::api::{price_contract_with, SimulationInputs};
use pricer_pricing::mc::{CancelToken, Greek, PricingResult};
use pricer_pricing::path_dependent::ContractSpec;
use serde::Serialize;
use tracing::{info, warn};

use crate::{OutputFormat, Result};

const ALL_GREEKS: [Greek; 3] = [Greek::Delta, Greek::Gamma, Greek::Vega];

#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    contract: &'a ContractSpec,
    inputs: &'a SimulationInputs,
    result: PricingResult,
    confidence_95: f64,
    confidence_99: f64,
    elapsed_ms: u128,
}

/// Run the price command
pub fn run(
    contract: &ContractSpec,
    inputs: &SimulationInputs,
    greeks: bool,
    format: OutputFormat,
    timeout_secs: u64,
) -> Result<()> {
    info!("Starting pricing...");
    info!(
        "  Contract: {} {} K={}",
        contract.kind.name(),
        contract.option_type,
        contract.strike
    );
    info!(
        "  Process: {}",
        if inputs.variance_model.is_some() {
            "stochastic variance"
        } else {
            "GBM"
        }
    );
    info!("  Trials: {} (seed {})", inputs.n_trials, inputs.seed);
    if violates_feller(inputs) {
        warn!(
            "Variance parameters violate the Feller condition 2*alpha*beta >= vol_var^2; \
             paths will lean on the variance floor"
        );
    }

    let cancel = CancelToken::new();
    if timeout_secs > 0 {
        let trigger = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(timeout_secs));
            trigger.cancel();
        });
    }

    let requested: &[Greek] = if greeks { &ALL_GREEKS } else { &[] };
    let started = Instant::now();
    let result = match price_contract_with(contract, inputs, requested, &cancel) {
        Ok(result) => result,
        Err(PricingError::Cancelled {
            completed_trials,
            partial_price,
        }) => {
            if completed_trials == inputs.n_trials {
                warn!(
                    "Timed out after {}s computing Greeks; price {:?} from all {} trials",
                    timeout_secs, partial_price, completed_trials
                );
            } else {
                warn!(
                    "Timed out after {}s with {} of {} trials complete (partial price {:?})",
                    timeout_secs, completed_trials, inputs.n_trials, partial_price
                );
            }
            return Err(PricingError::Cancelled {
                completed_trials,
                partial_price,
            }
            .into());
        }
        Err(err) => return Err(err.into()),
    };
    let elapsed = started.elapsed();
    info!("Pricing complete in {:.3}s", elapsed.as_secs_f64());

    let report = PriceReport {
        contract,
        inputs,
        result,
        confidence_95: result.confidence_95(),
        confidence_99: result.confidence_99(),
        elapsed_ms: elapsed.as_millis(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    Ok(())
}

fn print_table(report: &PriceReport<'_>) {
    let result = &report.result;
    let mut rows = vec![
        ("Price", format!("{:.6}", result.price)),
        ("Std error", format!("{:.6}", result.std_error)),
        ("95% CI", format!("± {:.6}", report.confidence_95)),
        ("99% CI", format!("± {:.6}", report.confidence_99)),
        ("Trials", result.n_trials.to_string()),
    ];
    for (name, value) in [
        ("Delta", result.delta),
        ("Gamma", result.gamma),
        ("Vega", result.vega),
    ] {
        if let Some(value) = value {
            rows.push((name, format!("{:.6}", value)));
        }
    }

    println!("\n┌────────────┬──────────────┐");
    println!("│ Measure    │ Value        │");
    println!("├────────────┼──────────────┤");
    for (name, value) in rows {
        println!("│ {:<10} │ {:>12} │", name, value);
    }
    println!("└────────────┴──────────────┘");
}

/// Whether the selected variance model fails the Feller condition.
///
/// Invalid inputs report `false`; the pricing call names them.
fn violates_feller(inputs: &SimulationInputs) -> bool {
    match inputs.process() {
        Ok(StochasticProcess::StochasticVariance(model)) => !model.params().satisfies_feller(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_pricing::api::VarianceModelInputs;

    fn sv_inputs(vol_of_variance: f64) -> SimulationInputs {
        SimulationInputs {
            variance_model: Some(VarianceModelInputs {
                mean_reversion: 2.0,
                long_run_variance: 0.04,
                vol_of_variance,
                ..VarianceModelInputs::default()
            }),
            ..SimulationInputs::default()
        }
    }

    #[test]
    fn test_feller_check_follows_variance_model() {
        // 2 * 2.0 * 0.04 = 0.16
        assert!(!violates_feller(&sv_inputs(0.3)));
        assert!(violates_feller(&sv_inputs(0.5)));
        assert!(!violates_feller(&SimulationInputs::default()));
    }

    #[test]
    fn test_feller_check_ignores_invalid_inputs() {
        assert!(!violates_feller(&sv_inputs(-1.0)));
    }
}
