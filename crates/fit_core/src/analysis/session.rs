//! Anchor selection, refitting and scoring over a fixed sample set.
//!
//! A [`FitSession`] owns one sample series and a set of models. The models
//! are fitted on a subset of the samples (the anchor points) and scored
//! against the whole series, which shows how well each strategy
//! reconstructs the points it did not see.

use super::{sample_model, FitComparisonEngine, ModelReport, SamplingGrid};
use crate::math::interpolators::{InterpolationModel, InterpolatorEnum, InterpolatorKind};
use crate::types::{ComparisonError, InterpolationError};

/// Curve sampled from one model of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    /// Strategy that produced the curve
    pub kind: InterpolatorKind,
    /// `(x, y)` pairs in grid order
    pub points: Vec<(f64, f64)>,
}

/// Fitting workflow over a validated sample series.
///
/// # Example
///
/// ```
/// use fit_core::analysis::FitSession;
/// use fit_core::math::interpolators::InterpolatorKind;
///
/// let xs = vec![1.0, 2.0, 3.0, 4.0];
/// let ys = vec![1.0, 4.0, 9.0, 16.0];
/// let mut session = FitSession::new(xs, ys, &InterpolatorKind::ALL).unwrap();
///
/// // Fitted on the end points only until more anchors are chosen.
/// assert_eq!(session.anchors(), vec![1.0, 4.0]);
///
/// session.set_anchors(&[1.0, 2.0, 4.0]).unwrap();
/// let reports = session.score().unwrap();
/// assert_eq!(reports.len(), 3);
/// assert_eq!(reports[0].deviations.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FitSession {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Sorted, unique indices into `xs`
    anchors: Vec<usize>,
    models: Vec<InterpolatorEnum<f64>>,
}

impl FitSession {
    /// Validate the samples, select the end points as anchors and fit
    /// one model per entry of `kinds`.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InvalidInput` if either series is empty,
    /// the lengths differ, there are fewer than two samples, or `xs` is not
    /// strictly increasing.
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        kinds: &[InterpolatorKind],
    ) -> Result<Self, InterpolationError> {
        validate_samples(&xs, &ys)?;

        let mut session = Self {
            anchors: vec![0, xs.len() - 1],
            xs,
            ys,
            models: kinds.iter().map(|&k| InterpolatorEnum::from_kind(k)).collect(),
        };
        session.refit()?;
        Ok(session)
    }

    /// Sample abscissae.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Sample ordinates.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a session holds at least two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Current anchor x values, ascending.
    pub fn anchors(&self) -> Vec<f64> {
        self.anchors.iter().map(|&i| self.xs[i]).collect()
    }

    /// Whether `x` is currently an anchor.
    pub fn is_anchor(&self, x: f64) -> bool {
        self.sample_index(x)
            .is_some_and(|i| self.anchors.binary_search(&i).is_ok())
    }

    /// Fitted models, in construction order.
    pub fn models(&self) -> &[InterpolatorEnum<f64>] {
        &self.models
    }

    /// Replace the anchor set and refit.
    ///
    /// An empty request selects the first and last sample. Duplicates are
    /// ignored and order does not matter.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InvalidInput` if exactly one distinct
    /// anchor is requested or a requested anchor is not a sample x. The
    /// session is unchanged on error.
    pub fn set_anchors(&mut self, requested: &[f64]) -> Result<(), InterpolationError> {
        let mut indices = requested
            .iter()
            .map(|&x| self.sample_index(x).ok_or_else(invalid_anchor))
            .collect::<Result<Vec<_>, _>>()?;
        indices.sort_unstable();
        indices.dedup();

        match indices.len() {
            0 => indices = vec![0, self.xs.len() - 1],
            1 => {
                return Err(InterpolationError::InvalidInput(
                    "not enough anchor points".to_string(),
                ))
            }
            _ => {}
        }

        self.anchors = indices;
        self.refit()
    }

    /// Add (`enabled`) or remove a single anchor and refit.
    ///
    /// Removal is refused while only two anchors remain. Returns whether the
    /// anchor set changed.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InvalidInput` if `x` is not a sample x.
    pub fn toggle_anchor(&mut self, x: f64, enabled: bool) -> Result<bool, InterpolationError> {
        let index = self.sample_index(x).ok_or_else(invalid_anchor)?;

        let changed = match (self.anchors.binary_search(&index), enabled) {
            (Err(pos), true) => {
                self.anchors.insert(pos, index);
                true
            }
            (Ok(pos), false) if self.anchors.len() > 2 => {
                self.anchors.remove(pos);
                true
            }
            _ => false,
        };

        if changed {
            self.refit()?;
        }
        Ok(changed)
    }

    /// Fit every model on the current anchor subset.
    pub fn refit(&mut self) -> Result<(), InterpolationError> {
        let xs: Vec<f64> = self.anchors.iter().map(|&i| self.xs[i]).collect();
        let ys: Vec<f64> = self.anchors.iter().map(|&i| self.ys[i]).collect();
        for model in &mut self.models {
            model.set_points(&xs, &ys)?;
        }
        Ok(())
    }

    /// Score every model against all samples, one report per model.
    ///
    /// Reports are named by [`InterpolatorKind::as_str`].
    pub fn score(&self) -> Result<Vec<ModelReport<f64>>, ComparisonError> {
        let reference: Vec<(f64, f64)> = self
            .xs
            .iter()
            .copied()
            .zip(self.ys.iter().copied())
            .collect();

        let mut engine = FitComparisonEngine::new();
        for model in &self.models {
            engine.add_model(model.kind().as_str(), model);
        }
        engine.compare(&reference)
    }

    /// Evaluate every model on `grid`.
    pub fn sample_curves(
        &self,
        grid: &SamplingGrid<f64>,
    ) -> Result<Vec<SampledCurve>, InterpolationError> {
        self.models
            .iter()
            .map(|model| {
                Ok(SampledCurve {
                    kind: model.kind(),
                    points: sample_model(model, grid)?,
                })
            })
            .collect()
    }

    fn sample_index(&self, x: f64) -> Option<usize> {
        self.xs.iter().position(|&sx| sx == x)
    }
}

fn invalid_anchor() -> InterpolationError {
    InterpolationError::InvalidInput("anchor points are not valid".to_string())
}

fn validate_samples(xs: &[f64], ys: &[f64]) -> Result<(), InterpolationError> {
    let invalid = |msg: &str| Err(InterpolationError::InvalidInput(msg.to_string()));

    if xs.is_empty() || ys.is_empty() {
        return invalid("X or Y array is empty");
    }
    if xs.len() != ys.len() {
        return invalid("X and Y arrays must be same size");
    }
    if xs.len() < 2 {
        return invalid("Not enough points to calculate spline");
    }
    if xs.windows(2).any(|w| !(w[1] > w[0])) {
        return invalid("X array must be strictly increasing sequence");
    }
    Ok(())
}
