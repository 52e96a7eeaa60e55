//! Evaluation of fitted models on an evenly spaced grid.

use crate::math::interpolators::InterpolationModel;
use crate::types::InterpolationError;
use num_traits::Float;

/// Evenly spaced half-open range `[min, max)` of query points.
///
/// In relative mode every sampled value is divided by its `x`. A grid holds
/// at most [`SamplingGrid::MAX_POINTS`] points.
///
/// # Example
///
/// ```
/// use fit_core::analysis::SamplingGrid;
///
/// let grid = SamplingGrid::new(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(grid.points(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid<T> {
    min: T,
    max: T,
    step: T,
    count: usize,
    relative: bool,
}

impl<T: Float> SamplingGrid<T> {
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Create a grid from explicit bounds and step.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InvalidInput` if a bound is not finite,
    /// `max < min`, `step` is not a positive finite number, or the range
    /// would hold more than [`MAX_POINTS`](Self::MAX_POINTS) points.
    pub fn new(min: T, max: T, step: T) -> Result<Self, InterpolationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InterpolationError::InvalidInput(
                "grid bounds must be finite".to_string(),
            ));
        }
        if max < min {
            return Err(InterpolationError::InvalidInput(
                "grid max must not be below min".to_string(),
            ));
        }
        if !(step > T::zero()) || !step.is_finite() {
            return Err(InterpolationError::InvalidInput(
                "grid step must be positive".to_string(),
            ));
        }

        let count = ((max - min) / step)
            .ceil()
            .to_usize()
            .filter(|&count| count <= Self::MAX_POINTS)
            .ok_or_else(|| {
                InterpolationError::InvalidInput(format!(
                    "grid step too small: more than {} points",
                    Self::MAX_POINTS
                ))
            })?;

        Ok(Self {
            min,
            max,
            step,
            count,
            relative: false,
        })
    }

    /// Grid spanning `xs[0]..xs[n-1]` with `divisions` equal steps.
    ///
    /// `xs` is expected to be sorted ascending, as fitted samples are.
    pub fn auto(xs: &[T], divisions: usize) -> Result<Self, InterpolationError> {
        let (first, last) = match (xs.first(), xs.last()) {
            (Some(&first), Some(&last)) if xs.len() >= 2 => (first, last),
            _ => {
                return Err(InterpolationError::InvalidInput(format!(
                    "at least 2 points are required to span a grid, got {}",
                    xs.len()
                )))
            }
        };
        if divisions == 0 {
            return Err(InterpolationError::InvalidInput(
                "grid divisions must be positive".to_string(),
            ));
        }
        let divisions = T::from(divisions).ok_or_else(|| {
            InterpolationError::InvalidInput("grid divisions out of range".to_string())
        })?;
        Self::new(first, last, (last - first) / divisions)
    }

    /// Switch relative mode on or off.
    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (exclusive).
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Distance between consecutive points.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Whether sampled values are divided by their `x`.
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Query points `min + i * step` strictly below `max`.
    pub fn points(&self) -> Vec<T> {
        (0..self.count)
            .map_while(|i| T::from(i))
            .map(|i| self.min + i * self.step)
            .take_while(|&x| x < self.max)
            .collect()
    }
}

/// Evaluate `model` at every grid point, returning `(x, y)` pairs.
///
/// In relative mode `y` is `model(x) / x`; at `x == 0` this is not finite.
///
/// # Example
///
/// ```
/// use fit_core::analysis::{sample_model, SamplingGrid};
/// use fit_core::math::interpolators::LinearInterpolator;
///
/// let line = LinearInterpolator::from_points(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
/// let grid = SamplingGrid::new(1.0, 3.0, 1.0).unwrap().with_relative(true);
/// assert_eq!(sample_model(&line, &grid).unwrap(), vec![(1.0, 2.0), (2.0, 2.0)]);
/// ```
pub fn sample_model<T, M>(model: &M, grid: &SamplingGrid<T>) -> Result<Vec<(T, T)>, InterpolationError>
where
    T: Float,
    M: InterpolationModel<T> + ?Sized,
{
    grid.points()
        .into_iter()
        .map(|x| {
            let y = model.evaluate(x)?;
            Ok((x, if grid.relative { y / x } else { y }))
        })
        .collect()
}
