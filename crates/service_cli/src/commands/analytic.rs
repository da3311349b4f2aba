//! Analytic command implementation
//!
//! Prints the Black-Scholes price and Greeks of a European option.

use pricer_core::types::{OptionType, PricingError};
use pricer_models::analytical::price_and_greeks;
use serde::Serialize;
use tracing::info;

use crate::{OutputFormat, Result};

#[derive(Debug, Serialize)]
struct AnalyticReport {
    option_type: OptionType,
    strike: f64,
    spot: f64,
    volatility: f64,
    maturity: f64,
    rate: f64,
    price: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
}

/// Run the analytic command
pub fn run(
    option_type: OptionType,
    strike: f64,
    spot: f64,
    volatility: f64,
    maturity: f64,
    rate: f64,
    format: OutputFormat,
) -> Result<()> {
    info!(
        "Black-Scholes {}: K={} S={} sigma={} T={} r={}",
        option_type, strike, spot, volatility, maturity, rate
    );

    let greeks = price_and_greeks(spot, volatility, strike, maturity, rate, option_type)
        .map_err(PricingError::from)?;

    let report = AnalyticReport {
        option_type,
        strike,
        spot,
        volatility,
        maturity,
        rate,
        price: greeks.price,
        delta: greeks.delta,
        gamma: greeks.gamma,
        vega: greeks.vega,
        theta: greeks.theta,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("\n┌────────────┬──────────────┐");
            println!("│ Measure    │ Value        │");
            println!("├────────────┼──────────────┤");
            for (name, value) in [
                ("Price", report.price),
                ("Delta", report.delta),
                ("Gamma", report.gamma),
                ("Vega", report.vega),
                ("Theta", report.theta),
            ] {
                println!("│ {:<10} │ {:>12.6} │", name, value);
            }
            println!("└────────────┴──────────────┘");
        }
    }

    Ok(())
}
