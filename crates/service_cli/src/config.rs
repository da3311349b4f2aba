//! CLI configuration loading
//!
//! Settings come from an optional TOML file layered under `PRICER__*`
//! environment variables, e.g. `PRICER__PRICING__NUM_THREADS=4`.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::Result;

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Pricing settings
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Number of trials when `--trials` is not given
    #[serde(default = "default_trials")]
    pub default_trials: usize,

    /// Base seed when `--seed` is not given
    #[serde(default)]
    pub seed: u64,

    /// Trials per work unit
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Number of threads for parallel pricing
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,

    /// Cancel a pricing run after this many seconds; 0 disables the limit
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_trials: default_trials(),
            seed: 0,
            chunk_size: default_chunk_size(),
            num_threads: default_num_threads(),
            timeout_secs: 0,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_trials() -> usize {
    10_000
}

fn default_chunk_size() -> usize {
    pricer_pricing::mc::DEFAULT_CHUNK_SIZE
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

impl CliConfig {
    /// Loads the configuration file at `path` (if present) and applies
    /// environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("PRICER").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
