//! Core financial types.
//!
//! This module provides:
//! - `error`: `PricingError`, the workspace-wide error taxonomy
//! - `option_type`: `OptionType` (call or put) with string parsing
//! - `validation`: helpers that turn constraint violations into `PricingError`
//!
//! # Re-exports
//!
//! [`PricingError`] and [`OptionType`] are re-exported at this level.

pub mod error;
pub mod option_type;
pub mod validation;

pub use error::PricingError;
pub use option_type::OptionType;
