//! Relative-deviation scoring of fitted models against reference points.
//!
//! For each model and each reference pair `(x, true_y)` the engine computes
//!
//! ```text
//! deviation = (true_y - model(x)) / model(x) * 100
//! ```
//!
//! and tracks the point with the largest absolute deviation. The denominator
//! is the model value, not the reference value, so an exact zero from the
//! model is reported as [`ComparisonError::DivisionByZero`].

use super::ExtremumTracker;
use crate::math::interpolators::InterpolationModel;
use crate::types::ComparisonError;
use num_traits::Float;

#[inline]
fn hundred<T: Float>() -> T {
    T::from(100.0).unwrap_or_else(|| {
        let ten = T::from(10.0).unwrap_or_else(T::one);
        ten * ten
    })
}

/// Signed relative deviation of `true_value` from `model_value`, in percent.
///
/// Returns `None` when `model_value` is exactly zero.
///
/// # Example
///
/// ```
/// use fit_core::analysis::relative_deviation;
///
/// assert_eq!(relative_deviation(11.0, 10.0), Some(10.0));
/// assert_eq!(relative_deviation(1.0, 0.0), None);
/// ```
pub fn relative_deviation<T: Float>(true_value: T, model_value: T) -> Option<T> {
    if model_value == T::zero() {
        return None;
    }
    Some((true_value - model_value) / model_value * hundred())
}

/// Per-model outcome of a comparison pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelReport<T> {
    /// Name the model was registered under
    pub name: String,
    /// Signed deviation in percent, one per reference point, in input order
    pub deviations: Vec<T>,
    /// Index of the first reference point with the largest absolute deviation
    pub worst_index: usize,
    /// Absolute deviation at `worst_index`
    pub worst_deviation: T,
}

impl<T: Float> ModelReport<T> {
    /// Indices whose absolute deviation is strictly greater than `limit`.
    pub fn exceeding(&self, limit: T) -> Vec<usize> {
        self.deviations
            .iter()
            .enumerate()
            .filter(|(_, d)| d.abs() > limit)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the point at `index` is the model's worst point.
    #[inline]
    pub fn is_worst(&self, index: usize) -> bool {
        index == self.worst_index
    }
}

/// Scores a set of fitted models against reference `(x, true_y)` pairs.
///
/// The engine borrows the models; it never refits or mutates them.
///
/// # Example
///
/// ```
/// use fit_core::analysis::FitComparisonEngine;
/// use fit_core::math::interpolators::{InterpolationModel, LinearInterpolator};
///
/// let mut linear = LinearInterpolator::<f64>::new();
/// linear.set_points(&[1.0, 3.0], &[10.0, 30.0]).unwrap();
///
/// let mut engine = FitComparisonEngine::new();
/// engine.add_model("linear", &linear);
///
/// let reports = engine.compare(&[(1.0, 10.0), (2.0, 22.0), (3.0, 30.0)]).unwrap();
/// assert_eq!(reports[0].worst_index, 1);
/// assert!((reports[0].worst_deviation - 10.0).abs() < 1e-9);
/// ```
pub struct FitComparisonEngine<'a, T, M>
where
    T: Float,
    M: InterpolationModel<T> + ?Sized,
{
    models: Vec<(String, &'a M)>,
    _marker: std::marker::PhantomData<T>,
}

impl<'a, T, M> FitComparisonEngine<'a, T, M>
where
    T: Float,
    M: InterpolationModel<T> + ?Sized,
{
    /// Create an engine with no models.
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Register a fitted model under `name`. Reports follow registration order.
    pub fn add_model(&mut self, name: impl Into<String>, model: &'a M) -> &mut Self {
        self.models.push((name.into(), model));
        self
    }

    /// Number of registered models.
    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if no model is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Score every registered model against `reference`.
    ///
    /// # Errors
    ///
    /// - [`ComparisonError::EmptyReference`] if `reference` is empty
    /// - [`ComparisonError::Model`] if a model fails to evaluate (for example
    ///   because it was never fitted)
    /// - [`ComparisonError::DivisionByZero`] if a model evaluates to exactly zero
    pub fn compare(&self, reference: &[(T, T)]) -> Result<Vec<ModelReport<T>>, ComparisonError> {
        if reference.is_empty() {
            return Err(ComparisonError::EmptyReference);
        }

        self.models
            .iter()
            .map(|(name, model)| score_model(name, *model, reference))
            .collect()
    }
}

impl<'a, T, M> Default for FitComparisonEngine<'a, T, M>
where
    T: Float,
    M: InterpolationModel<T> + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

fn score_model<T, M>(
    name: &str,
    model: &M,
    reference: &[(T, T)],
) -> Result<ModelReport<T>, ComparisonError>
where
    T: Float,
    M: InterpolationModel<T> + ?Sized,
{
    let mut worst = ExtremumTracker::new();
    let mut deviations = Vec::with_capacity(reference.len());

    for &(x, true_y) in reference {
        let value = model
            .evaluate(x)
            .map_err(|e| ComparisonError::model(name, e))?;
        let deviation =
            relative_deviation(true_y, value).ok_or_else(|| ComparisonError::DivisionByZero {
                model: name.to_string(),
                x: x.to_f64().unwrap_or(f64::NAN),
            })?;
        worst.add(deviation.abs());
        deviations.push(deviation);
    }

    Ok(ModelReport {
        name: name.to_string(),
        deviations,
        worst_index: worst.get_index().unwrap_or(0),
        worst_deviation: worst.get().unwrap_or_else(T::zero),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolators::{
        InterpolatorEnum, InterpolatorKind, LinearInterpolator, PchipInterpolator,
    };
    use crate::types::InterpolationError;
    use approx::assert_relative_eq;

    // ========================================
    // relative_deviation
    // ========================================

    #[test]
    fn test_relative_deviation_sign_follows_true_value() {
        assert_relative_eq!(relative_deviation(9.0, 10.0).unwrap(), -10.0);
        assert_relative_eq!(relative_deviation(12.5, 10.0).unwrap(), 25.0);
    }

    #[test]
    fn test_relative_deviation_zero_denominator() {
        assert_eq!(relative_deviation(5.0, 0.0), None);
        assert_eq!(relative_deviation(5.0, -0.0), None);
    }

    #[test]
    fn test_relative_deviation_f32() {
        let d: f32 = relative_deviation(2.0f32, 4.0f32).unwrap();
        assert_relative_eq!(d, -50.0f32);
    }

    // ========================================
    // ModelReport
    // ========================================

    #[test]
    fn test_exceeding_is_strict() {
        let report = ModelReport {
            name: "m".to_string(),
            deviations: vec![0.01, -0.02, 0.005, 0.03],
            worst_index: 3,
            worst_deviation: 0.03,
        };
        assert_eq!(report.exceeding(0.01), vec![1, 3]);
        assert!(report.is_worst(3));
        assert!(!report.is_worst(1));
    }

    // ========================================
    // FitComparisonEngine
    // ========================================

    #[test]
    fn test_perfect_linear_fit_has_zero_deviation() {
        let linear = LinearInterpolator::from_points(&[1.0, 3.0], &[10.0, 30.0]).unwrap();
        let mut engine = FitComparisonEngine::new();
        engine.add_model("linear", &linear);

        let reports = engine
            .compare(&[(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)])
            .unwrap();
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.name, "linear");
        for d in &report.deviations {
            assert!(d.abs() < 1e-12);
        }
        assert!(report.worst_index < 3);
        assert!(report.worst_deviation.abs() < 1e-12);
    }

    #[test]
    fn test_worst_point_uses_absolute_deviation() {
        // Model is y = 10x; reference deviates by +5% at x=1 and -20% at x=2.
        let linear = LinearInterpolator::from_points(&[0.0, 4.0], &[0.0, 40.0]).unwrap();
        let mut engine = FitComparisonEngine::new();
        engine.add_model("linear", &linear);

        let reports = engine
            .compare(&[(1.0, 10.5), (2.0, 16.0), (3.0, 30.0)])
            .unwrap();
        let report = &reports[0];
        assert_relative_eq!(report.deviations[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(report.deviations[1], -20.0, epsilon = 1e-9);
        assert_eq!(report.worst_index, 1);
        assert_relative_eq!(report.worst_deviation, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reports_follow_registration_order() {
        let xs = [1.0, 2.0, 4.0];
        let ys = [10.0, 20.0, 40.0];
        let cubic = {
            let mut m = InterpolatorEnum::from_kind(InterpolatorKind::Cubic);
            m.set_points(&xs, &ys).unwrap();
            m
        };
        let linear = {
            let mut m = InterpolatorEnum::from_kind(InterpolatorKind::Linear);
            m.set_points(&xs, &ys).unwrap();
            m
        };

        let mut engine = FitComparisonEngine::new();
        engine.add_model("cubic", &cubic).add_model("linear", &linear);
        assert_eq!(engine.len(), 2);

        let reports = engine.compare(&[(1.0, 10.0), (3.0, 30.0)]).unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["cubic", "linear"]);
    }

    #[test]
    fn test_trait_objects_are_accepted() {
        let pchip = PchipInterpolator::from_points(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
        let linear = LinearInterpolator::from_points(&[1.0, 2.0], &[1.0, 2.0]).unwrap();

        let mut engine: FitComparisonEngine<'_, f64, dyn InterpolationModel<f64>> =
            FitComparisonEngine::new();
        engine.add_model("hermite", &pchip);
        engine.add_model("linear", &linear);

        let reports = engine.compare(&[(1.5, 1.5)]).unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_empty_reference_rejected() {
        let linear = LinearInterpolator::from_points(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
        let mut engine = FitComparisonEngine::new();
        engine.add_model("linear", &linear);
        assert_eq!(engine.compare(&[]), Err(ComparisonError::EmptyReference));
    }

    #[test]
    fn test_model_zero_is_division_by_zero() {
        let linear = LinearInterpolator::from_points(&[-1.0, 1.0], &[-1.0, 1.0]).unwrap();
        let mut engine = FitComparisonEngine::new();
        engine.add_model("linear", &linear);

        let err = engine.compare(&[(1.0, 1.0), (0.0, 0.5)]).unwrap_err();
        assert_eq!(
            err,
            ComparisonError::DivisionByZero {
                model: "linear".to_string(),
                x: 0.0
            }
        );
    }

    #[test]
    fn test_unfitted_model_propagates_not_ready() {
        let pchip = PchipInterpolator::<f64>::new();
        let mut engine = FitComparisonEngine::new();
        engine.add_model("hermite", &pchip);

        let err = engine.compare(&[(1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            ComparisonError::model("hermite", InterpolationError::NotReady)
        );
    }

    #[test]
    fn test_no_models_yields_no_reports() {
        let engine: FitComparisonEngine<'_, f64, LinearInterpolator<f64>> =
            FitComparisonEngine::default();
        assert!(engine.is_empty());
        assert!(engine.compare(&[(1.0, 1.0)]).unwrap().is_empty());
    }
}
