//! Core numeric traits.
//!
//! Model and analytic code is written against [`Float`] so the same formulas
//! serve `f64` and `f32` callers.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn forward<T: Float>(spot: T, rate: T, time: T) -> T {
///     spot * (rate * time).exp()
/// }
///
/// let fwd: f64 = forward(100.0, 0.05, 1.0);
/// assert!((fwd - 105.127_109_6).abs() < 1e-6);
/// ```
pub use num_traits::Float;
