//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analytic;
pub mod check;
pub mod price;
