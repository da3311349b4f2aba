//! # Random Number Generation Infrastructure
//!
//! Random draws for path simulation. The engine never shares a generator
//! between workers: each chunk of trials opens its own numbered stream with
//! [`PricerRng::for_stream`], so a given seed reproduces the same estimate
//! regardless of how rayon schedules the chunks.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::for_stream(12345, 3);
//! let mut dw = [0.0; 2];
//! rng.fill_normal(&mut dw);
//! ```

mod prng;

pub use prng::PricerRng;
