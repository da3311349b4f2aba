//! # pricer_core: Foundation types for the Monte Carlo pricer
//!
//! ## Foundation Layer Role
//!
//! pricer_core sits at the bottom of the workspace and provides:
//! - Error types: `PricingError` (`types::error`)
//! - Option direction: `OptionType` (`types::option_type`)
//! - Boundary validation helpers (`types::validation`)
//! - Discounting and other small numeric helpers (`math`)
//! - The generic `Float` trait re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! This crate depends on no other pricer_* crate and only on:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::discount_factor;
//! use pricer_core::types::{OptionType, PricingError};
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert!(call.is_call());
//!
//! let df = discount_factor(0.05_f64, 1.0);
//! assert!((df - 0.951229).abs() < 1e-6);
//!
//! let err = "straddle".parse::<OptionType>().unwrap_err();
//! assert!(matches!(err, PricingError::UnsupportedContractType(_)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
