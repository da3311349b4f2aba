//! Contract payoffs.
//!
//! This module turns a simulated path into the undiscounted payoff of one
//! trial for every supported contract kind: vanilla, binary, barrier,
//! Asian and extendible, each as a call or a put.
//!
//! # Key Components
//!
//! - [`ContractSpec`]: direction, strike and kind-specific terms
//! - [`PathPayoff`]: payoff evaluation and term validation
//! - [`PathContinuation`]: hook through which extendible contracts request
//!   a continuation path without knowing which process produced it
//!
//! Payoff functions are pure; discounting is applied once by the
//! aggregator.

mod asian;
mod barrier;
mod contract;
mod extendible;
mod payoff;
mod terminal;

pub use asian::asian_payoff;
pub use barrier::{barrier_payoff, barrier_touched, BarrierType};
pub use contract::{ContractKind, ContractSpec};
pub use extendible::extendible_payoff;
pub use payoff::{NoContinuation, PathContinuation, PathPayoff};
pub use terminal::{binary_payoff, vanilla_payoff};
