//! Interpolation strategy selection.
//!
//! This module provides:
//! - [`InterpolatorKind`]: Enumeration of the available strategies
//! - [`InterpolatorEnum`]: Static dispatch enum wrapping the concrete models

use super::{CubicSplineInterpolator, InterpolationModel, LinearInterpolator, PchipInterpolator};
use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// Available interpolation strategies.
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::InterpolatorKind;
///
/// let kind: InterpolatorKind = "pchip".parse().unwrap();
/// assert_eq!(kind, InterpolatorKind::Hermite);
/// assert_eq!(kind.as_str(), "hermite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InterpolatorKind {
    /// Natural cubic spline
    Cubic,
    /// Shape-preserving cubic Hermite (PCHIP)
    Hermite,
    /// Piecewise linear
    Linear,
}

impl InterpolatorKind {
    /// All strategies, in report order.
    pub const ALL: [InterpolatorKind; 3] = [
        InterpolatorKind::Cubic,
        InterpolatorKind::Hermite,
        InterpolatorKind::Linear,
    ];

    /// Return the string representation of the strategy.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolatorKind::Cubic => "cubic",
            InterpolatorKind::Hermite => "hermite",
            InterpolatorKind::Linear => "linear",
        }
    }
}

impl std::fmt::Display for InterpolatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InterpolatorKind {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cubic" => Ok(InterpolatorKind::Cubic),
            "hermite" | "pchip" => Ok(InterpolatorKind::Hermite),
            "linear" => Ok(InterpolatorKind::Linear),
            other => Err(InterpolationError::InvalidInput(format!(
                "unknown interpolator '{}'. Supported: cubic, hermite (pchip), linear",
                other
            ))),
        }
    }
}

/// Static dispatch enum wrapping the concrete interpolation models.
///
/// Lets callers hold a heterogeneous, construction-time selected set of
/// models without trait objects.
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::{InterpolationModel, InterpolatorEnum, InterpolatorKind};
///
/// let mut model = InterpolatorEnum::<f64>::from_kind(InterpolatorKind::Linear);
/// model.set_points(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
/// assert!((model.evaluate(1.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub enum InterpolatorEnum<T: Float> {
    /// Natural cubic spline
    Cubic(CubicSplineInterpolator<T>),
    /// Shape-preserving cubic Hermite
    Hermite(PchipInterpolator<T>),
    /// Bidirectional piecewise linear
    Linear(LinearInterpolator<T>),
}

impl<T: Float> InterpolatorEnum<T> {
    /// Create an unfitted model of the given kind.
    pub fn from_kind(kind: InterpolatorKind) -> Self {
        match kind {
            InterpolatorKind::Cubic => InterpolatorEnum::Cubic(CubicSplineInterpolator::new()),
            InterpolatorKind::Hermite => InterpolatorEnum::Hermite(PchipInterpolator::new()),
            InterpolatorKind::Linear => InterpolatorEnum::Linear(LinearInterpolator::new()),
        }
    }

    /// The strategy this model implements.
    pub fn kind(&self) -> InterpolatorKind {
        match self {
            InterpolatorEnum::Cubic(_) => InterpolatorKind::Cubic,
            InterpolatorEnum::Hermite(_) => InterpolatorKind::Hermite,
            InterpolatorEnum::Linear(_) => InterpolatorKind::Linear,
        }
    }
}

impl<T: Float> From<InterpolatorKind> for InterpolatorEnum<T> {
    fn from(kind: InterpolatorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl<T: Float> InterpolationModel<T> for InterpolatorEnum<T> {
    fn set_points(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        match self {
            InterpolatorEnum::Cubic(model) => model.set_points(xs, ys),
            InterpolatorEnum::Hermite(model) => model.set_points(xs, ys),
            InterpolatorEnum::Linear(model) => model.set_points(xs, ys),
        }
    }

    fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        match self {
            InterpolatorEnum::Cubic(model) => model.evaluate(x),
            InterpolatorEnum::Hermite(model) => model.evaluate(x),
            InterpolatorEnum::Linear(model) => model.evaluate(x),
        }
    }

    fn is_fitted(&self) -> bool {
        match self {
            InterpolatorEnum::Cubic(model) => model.is_fitted(),
            InterpolatorEnum::Hermite(model) => model.is_fitted(),
            InterpolatorEnum::Linear(model) => model.is_fitted(),
        }
    }
}
