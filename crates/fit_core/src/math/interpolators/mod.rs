//! Interpolation models for curve fitting.
//!
//! This module provides interchangeable interpolation strategies behind a
//! single fit-then-evaluate contract, generic over `T: num_traits::Float`.
//!
//! ## Available Interpolators
//!
//! - [`PchipInterpolator`]: Shape-preserving piecewise cubic Hermite (no overshoot on monotonic data)
//! - [`LinearInterpolator`]: Piecewise linear with forward and inverse lookups
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`InterpolatorEnum`]: Static dispatch over the three, selected by [`InterpolatorKind`]
//!
//! ## Core Trait
//!
//! All interpolators implement the [`InterpolationModel`] trait, which defines:
//! - `set_points(xs, ys) -> Result<(), InterpolationError>`: Fit, replacing previous state
//! - `evaluate(x) -> Result<T, InterpolationError>`: Evaluate the fitted curve
//! - `is_fitted() -> bool`: Whether evaluation is possible
//!
//! ## Example
//!
//! ```
//! use fit_core::math::interpolators::{InterpolationModel, PchipInterpolator};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = PchipInterpolator::from_points(&xs, &ys).unwrap();
//! assert_eq!(interp.evaluate(2.0).unwrap(), 4.0);
//! ```

mod cubic_spline;
mod interpolator_enum;
mod linear;
mod nodes;
mod pchip;
mod traits;

// Re-export public types at module level
pub use cubic_spline::CubicSplineInterpolator;
pub use interpolator_enum::{InterpolatorEnum, InterpolatorKind};
pub use linear::LinearInterpolator;
pub use pchip::PchipInterpolator;
pub use traits::InterpolationModel;
