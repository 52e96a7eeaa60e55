//! Bidirectional piecewise linear interpolation.

use super::nodes::validate_nodes;
use super::InterpolationModel;
use crate::types::InterpolationError;
use num_traits::Float;
use std::cell::OnceCell;

/// Sorted breakpoint table with the line of the segment ending at each key.
///
/// `slopes[i]` / `intercepts[i]` describe the segment `keys[i-1]..keys[i]`;
/// entry 0 has no preceding segment and is never read.
#[derive(Debug, Clone)]
struct Breakpoints<T: Float> {
    keys: Vec<T>,
    slopes: Vec<T>,
    intercepts: Vec<T>,
}

impl<T: Float> Breakpoints<T> {
    /// Build from `(key, value)` pairs sorted by key.
    fn build<I>(pairs: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut keys = Vec::new();
        let mut slopes = Vec::new();
        let mut intercepts = Vec::new();
        let mut previous: Option<(T, T)> = None;

        for (key, value) in pairs {
            let (k, b) = match previous {
                None => (T::zero(), T::zero()),
                Some((k1, v1)) => {
                    let run = key - k1;
                    if run == T::zero() {
                        return Err(InterpolationError::DivisionByZero {
                            at: key.to_f64().unwrap_or(f64::NAN),
                        });
                    }
                    let slope = (value - v1) / run;
                    (slope, v1 - slope * k1)
                }
            };
            keys.push(key);
            slopes.push(k);
            intercepts.push(b);
            previous = Some((key, value));
        }

        Ok(Self {
            keys,
            slopes,
            intercepts,
        })
    }

    /// Evaluate the line that governs `q`.
    ///
    /// Inside the key range this is the bounding segment (an exact key uses
    /// the segment ending at it, the first key uses the first segment);
    /// outside it is the nearest edge segment, giving linear extrapolation.
    fn evaluate(&self, q: T) -> T {
        // lower_bound: first key not less than q
        let pos = self.keys.partition_point(|&k| k < q);
        let idx = pos.clamp(1, self.keys.len() - 1);
        self.slopes[idx] * q + self.intercepts[idx]
    }
}

/// Piecewise linear interpolator supporting forward (`x → y`) and inverse
/// (`y → x`) lookups.
///
/// Nodes are kept sorted and unique by `x`. The forward and inverse breakpoint
/// tables are built lazily on first use and discarded on every mutation, so a
/// model that is only ever queried forward never pays for the inverse table.
///
/// Queries outside the data range are extrapolated along the nearest edge
/// segment.
///
/// The inverse lookup requires `y` to be strictly monotonic (increasing or
/// decreasing) across all nodes; otherwise it fails with
/// [`InterpolationError::NonMonotonicData`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::{InterpolationModel, LinearInterpolator};
///
/// let mut linear = LinearInterpolator::<f64>::new();
/// linear.set_points(&[0.0, 1.0, 3.0], &[0.0, 2.0, 3.0]).unwrap();
///
/// assert!((linear.evaluate(2.0).unwrap() - 2.5).abs() < 1e-12);
/// assert!((linear.evaluate_inverse(2.5).unwrap() - 2.0).abs() < 1e-12);
///
/// // Extrapolation beyond the last node follows the last segment.
/// assert!((linear.evaluate(5.0).unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Nodes sorted by strictly increasing x
    points: Vec<(T, T)>,
    forward: OnceCell<Result<Breakpoints<T>, InterpolationError>>,
    inverse: OnceCell<Result<Breakpoints<T>, InterpolationError>>,
}

impl<T: Float> Default for LinearInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearInterpolator<T> {
    /// Create an empty interpolator.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            forward: OnceCell::new(),
            inverse: OnceCell::new(),
        }
    }

    /// Create an interpolator fitted to the given nodes.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Fewer than 2 points, mismatched
    ///   lengths, or `xs` not strictly increasing
    ///
    /// # Example
    ///
    /// ```
    /// use fit_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::from_points(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(LinearInterpolator::from_points(&[0.0], &[0.0]).is_err());
    /// ```
    pub fn from_points(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut model = Self::new();
        model.set_points(xs, ys)?;
        Ok(model)
    }

    /// Insert a single node, keeping the node set sorted by `x`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - `x` is not finite or already present
    pub fn add(&mut self, x: T, y: T) -> Result<(), InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::InvalidInput(
                "node key must be finite".to_string(),
            ));
        }
        let pos = self.points.partition_point(|&(px, _)| px < x);
        if pos < self.points.len() && self.points[pos].0 == x {
            return Err(InterpolationError::InvalidInput(format!(
                "duplicate node key at index {}",
                pos
            )));
        }
        self.points.insert(pos, (x, y));
        self.invalidate();
        Ok(())
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Nodes as `(x, y)` pairs sorted by `x`.
    #[inline]
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the interpolator has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inverse lookup: the `x` at which the interpolated line reaches `y`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::NotReady` - Fewer than 2 nodes
    /// * `InterpolationError::NonMonotonicData` - `y` changes direction across the nodes
    /// * `InterpolationError::DivisionByZero` - Two consecutive nodes share the same `y`
    pub fn evaluate_inverse(&self, y: T) -> Result<T, InterpolationError> {
        self.ensure_ready()?;
        let table = self
            .inverse
            .get_or_init(|| Self::build_inverse(&self.points))
            .as_ref()
            .map_err(Clone::clone)?;
        Ok(table.evaluate(y))
    }

    fn ensure_ready(&self) -> Result<(), InterpolationError> {
        if self.points.len() < 2 {
            return Err(InterpolationError::NotReady);
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.forward = OnceCell::new();
        self.inverse = OnceCell::new();
    }

    /// Inverse table keyed by `y`, after checking strict monotonicity.
    fn build_inverse(points: &[(T, T)]) -> Result<Breakpoints<T>, InterpolationError> {
        let zero = T::zero();
        let increasing = points[1].1 > points[0].1;

        for (i, pair) in points.windows(2).enumerate() {
            let rise = pair[1].1 - pair[0].1;
            if rise == zero {
                return Err(InterpolationError::DivisionByZero {
                    at: pair[1].1.to_f64().unwrap_or(f64::NAN),
                });
            }
            if rise.is_nan() || (rise > zero) != increasing {
                return Err(InterpolationError::NonMonotonicData { index: i + 1 });
            }
        }

        let swapped = points.iter().map(|&(x, y)| (y, x));
        if increasing {
            Breakpoints::build(swapped)
        } else {
            Breakpoints::build(swapped.rev())
        }
    }
}

impl<T: Float> InterpolationModel<T> for LinearInterpolator<T> {
    /// Replace all nodes. On error the interpolator is left empty.
    fn set_points(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        self.clear();
        validate_nodes(xs, ys)?;
        self.points = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(())
    }

    /// Forward lookup using the line of the governing segment.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = k*x + b,  k = (y2 - y1)/(x2 - x1),  b = y1 - k*x1
    /// ```
    fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        self.ensure_ready()?;
        let table = self
            .forward
            .get_or_init(|| Breakpoints::build(self.points.iter().copied()))
            .as_ref()
            .map_err(Clone::clone)?;
        Ok(table.evaluate(x))
    }

    fn is_fitted(&self) -> bool {
        self.points.len() >= 2
    }
}
