//! Core numeric traits.
//!
//! All models in this crate are generic over a floating-point element type
//! and use static dispatch. Heterogeneous model sets are expressed with the
//! [`InterpolatorEnum`](crate::math::interpolators::InterpolatorEnum) wrapper
//! rather than runtime type inspection.

/// Generic floating-point trait for numeric computations.
///
/// Re-exported from `num_traits` so that downstream crates can write generic
/// code against the same bound the models use.
///
/// # Precision
/// `f64` is the reference precision: every documented tolerance in this crate
/// assumes 64-bit IEEE 754 arithmetic. `f32` is supported with proportionally
/// looser tolerances.
///
/// # Examples
/// ```
/// use fit_core::traits::Float;
///
/// fn secant<T: Float>(x0: T, y0: T, x1: T, y1: T) -> T {
///     (y1 - y0) / (x1 - x0)
/// }
///
/// let slope: f64 = secant(0.0, 1.0, 2.0, 5.0);
/// assert_eq!(slope, 2.0);
/// ```
pub use num_traits::Float;
