//! Numerical building blocks.
//!
//! - [`interpolators`]: Interpolation models behind the [`InterpolationModel`](interpolators::InterpolationModel) contract

pub mod interpolators;
