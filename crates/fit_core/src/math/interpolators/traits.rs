//! The common interpolation model contract.

use crate::types::InterpolationError;
use num_traits::Float;

/// Capability shared by every interpolation strategy.
///
/// A model starts out unfitted. [`set_points`](Self::set_points) replaces the
/// whole node set and every piece of derived state in one step; evaluation is
/// a pure function of the fitted state and the query.
///
/// # Contract
///
/// - `xs` must be strictly increasing and `xs.len() == ys.len() >= 2`,
///   otherwise `set_points` fails with [`InterpolationError::InvalidInput`]
///   and the model is left unfitted.
/// - Evaluating an unfitted model fails with [`InterpolationError::NotReady`].
/// - Queries outside `[xs[0], xs[n-1]]` are extrapolated; how depends on the
///   model.
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::{InterpolationModel, LinearInterpolator};
/// use fit_core::types::InterpolationError;
///
/// fn fit_and_probe<M: InterpolationModel<f64>>(model: &mut M) -> Result<f64, InterpolationError> {
///     model.set_points(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0])?;
///     model.evaluate(0.5)
/// }
///
/// let mut linear = LinearInterpolator::new();
/// assert!((fit_and_probe(&mut linear).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub trait InterpolationModel<T: Float> {
    /// Fit the model to the given nodes, replacing any previous fit.
    fn set_points(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError>;

    /// Evaluate the fitted model at `x`.
    fn evaluate(&self, x: T) -> Result<T, InterpolationError>;

    /// Whether the model currently holds a usable fit.
    fn is_fitted(&self) -> bool;
}
