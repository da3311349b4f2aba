//! Error types for the Monte Carlo engine configuration.
//!
//! [`ConfigError`] is raised while building a [`MonteCarloConfig`](super::MonteCarloConfig)
//! and converts into the crate-wide [`PricingError`] at the API boundary.

use std::fmt;

use pricer_core::types::PricingError;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Trial count outside valid range [1, 10_000_000].
    InvalidTrialCount(usize),
    /// Chunk size of zero.
    InvalidChunkSize(usize),
    /// Time step or maturity that is not a finite positive number.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Required builder field left unset.
    MissingParameter(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTrialCount(count) => {
                write!(
                    f,
                    "Invalid trial count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk size {}: must be at least 1", size)
            }
            Self::InvalidParameter { name, value } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: must be finite and > 0",
                    name, value
                )
            }
            Self::MissingParameter(name) => {
                write!(f, "Missing parameter '{}': must be specified", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidTrialCount(count) => PricingError::InvalidParameter {
                name: "n",
                value: count as f64,
                constraint: "must be in range [1, 10_000_000]",
            },
            ConfigError::InvalidChunkSize(size) => PricingError::InvalidParameter {
                name: "chunk_size",
                value: size as f64,
                constraint: "must be at least 1",
            },
            ConfigError::InvalidParameter { name, value } => PricingError::InvalidParameter {
                name,
                value,
                constraint: "must be finite and > 0",
            },
            ConfigError::MissingParameter(name) => PricingError::InvalidParameter {
                name,
                value: f64::NAN,
                constraint: "must be specified",
            },
        }
    }
}
