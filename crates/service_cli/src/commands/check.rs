//! Check command implementation
//!
//! Reports the effective configuration and prices an at-the-money call
//! against its Black-Scholes value as a smoke test.

use pricer_core::types::{OptionType, PricingError};
use pricer_models::analytical::price_and_greeks;
use pricer_pricing::api::{price_vanilla, SimulationInputs};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

const SMOKE_TRIALS: usize = 20_000;

/// Run the check command
pub fn run(settings: &CliConfig) -> Result<()> {
    info!("Checking system configuration...");

    println!("Pricer System Check");
    println!("===================\n");

    println!("Build:");
    println!("  Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Parallelisation:");
    println!("  Rayon threads: {}", rayon::current_num_threads());
    println!("  CPU cores: {}", num_cpus::get());
    println!();

    let pricing = &settings.pricing;
    println!("Pricing defaults:");
    println!("  Trials: {}", pricing.default_trials);
    println!("  Seed: {}", pricing.seed);
    println!("  Chunk size: {}", pricing.chunk_size);
    match pricing.timeout_secs {
        0 => println!("  Timeout: none"),
        secs => println!("  Timeout: {}s", secs),
    }
    println!();

    let inputs = SimulationInputs {
        n_trials: SMOKE_TRIALS,
        seed: pricing.seed,
        chunk_size: pricing.chunk_size,
        ..SimulationInputs::default()
    };
    let mc = price_vanilla(OptionType::Call, inputs.spot, &inputs)?;
    let analytic = price_and_greeks(
        inputs.spot,
        inputs.volatility,
        inputs.spot,
        inputs.maturity,
        inputs.rate,
        OptionType::Call,
    )
    .map_err(PricingError::from)?;

    let error = (mc.price - analytic.price).abs();
    let within = error <= 4.0 * mc.std_error;
    println!("Convergence ({} trials, ATM call):", SMOKE_TRIALS);
    println!("  Monte Carlo: {:.4} ± {:.4}", mc.price, mc.std_error);
    println!("  Black-Scholes: {:.4}", analytic.price);
    println!(
        "  Status: {}",
        if within { "✓ within 4 standard errors" } else { "✗ outside 4 standard errors" }
    );
    println!();

    if within {
        println!("All checks passed!");
    } else {
        warn!(
            "Monte Carlo price {:.4} deviates from Black-Scholes {:.4}",
            mc.price, analytic.price
        );
    }

    Ok(())
}
