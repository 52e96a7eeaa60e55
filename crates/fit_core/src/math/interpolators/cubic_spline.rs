//! Natural cubic spline interpolation.

use super::nodes::{find_segment, validate_nodes};
use super::InterpolationModel;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    /// Constant term (y value at segment start)
    a: T,
    /// Linear coefficient
    b: T,
    /// Quadratic coefficient
    c: T,
    /// Cubic coefficient
    d: T,
}

impl<T: Float> SplineCoeffs<T> {
    #[inline]
    fn value(&self, dx: T) -> T {
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }

    #[inline]
    fn slope(&self, dx: T) -> T {
        let two = T::one() + T::one();
        let three = two + T::one();
        self.b + dx * (two * self.c + three * self.d * dx)
    }
}

#[derive(Debug, Clone)]
struct SplineFit<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Second derivatives vanish at both end nodes. Outside the node range the
/// spline continues as a straight line with the boundary slope, which is the
/// natural continuation of a curve with zero end curvature.
///
/// Two nodes give the straight line through them.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::{CubicSplineInterpolator, InterpolationModel};
///
/// let mut spline = CubicSplineInterpolator::new();
/// spline.set_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
///
/// let y = spline.evaluate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    fit: Option<SplineFit<T>>,
}

impl<T: Float> Default for CubicSplineInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Create an unfitted spline.
    pub fn new() -> Self {
        Self { fit: None }
    }

    /// Create a spline fitted to the given nodes.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Fewer than 2 points, mismatched
    ///   lengths, or `xs` not strictly increasing
    pub fn from_points(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        let mut model = Self::new();
        model.set_points(xs, ys)?;
        Ok(model)
    }

    /// Fitted node x-coordinates (empty when unfitted).
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.fit.as_ref().map_or(&[], |fit| fit.xs.as_slice())
    }

    /// Returns the number of fitted nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs().len()
    }

    /// Returns true if the spline holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fit.is_none()
    }

    /// Compute natural cubic spline coefficients using Thomas algorithm.
    ///
    /// Solves the tridiagonal system for second derivatives (M values),
    /// then computes polynomial coefficients for each segment.
    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::one() + T::one();
        let six = two * (two + T::one());

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        // Natural boundary: M[0] = M[n-1] = 0
        let mut m: Vec<T> = vec![T::zero(); n];
        let interior = n - 2;

        if interior > 0 {
            // Row r couples M[r], M[r+1], M[r+2]:
            //   h[r]*M[r] + 2*(h[r]+h[r+1])*M[r+1] + h[r+1]*M[r+2] = rhs[r]
            let mut c_prime: Vec<T> = Vec::with_capacity(interior);
            let mut d_prime: Vec<T> = Vec::with_capacity(interior);

            for r in 0..interior {
                let diag = two * (h[r] + h[r + 1]);
                let sup = if r + 1 < interior { h[r + 1] } else { T::zero() };
                let rhs = six * ((ys[r + 2] - ys[r + 1]) / h[r + 1] - (ys[r + 1] - ys[r]) / h[r]);

                // Thomas algorithm - forward elimination
                let (denom, carried) = if r == 0 {
                    (diag, T::zero())
                } else {
                    (diag - h[r] * c_prime[r - 1], h[r] * d_prime[r - 1])
                };
                c_prime.push(sup / denom);
                d_prime.push((rhs - carried) / denom);
            }

            // Thomas algorithm - back substitution
            m[interior] = d_prime[interior - 1];
            for r in (0..interior - 1).rev() {
                m[r + 1] = d_prime[r] - c_prime[r] * m[r + 2];
            }
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
                c: m[i] / two,
                d: (m[i + 1] - m[i]) / (six * h[i]),
            })
            .collect()
    }
}

impl<T: Float> InterpolationModel<T> for CubicSplineInterpolator<T> {
    /// Fit the spline, replacing any previous fit. On error the spline is
    /// left unfitted.
    fn set_points(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        if let Err(err) = validate_nodes(xs, ys) {
            self.fit = None;
            return Err(err);
        }
        let coeffs = Self::compute_coefficients(xs, ys);
        self.fit = Some(SplineFit {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            coeffs,
        });
        Ok(())
    }

    /// Evaluate the spline at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³
    /// ```
    ///
    /// Outside `[xs[0], xs[n-1]]` the boundary tangent line is used.
    fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        let fit = self.fit.as_ref().ok_or(InterpolationError::NotReady)?;
        let last = fit.xs.len() - 1;

        if x < fit.xs[0] {
            let first = &fit.coeffs[0];
            return Ok(first.a + first.b * (x - fit.xs[0]));
        }
        if x == fit.xs[last] {
            return Ok(fit.ys[last]);
        }
        if x > fit.xs[last] {
            let edge = &fit.coeffs[last - 1];
            let slope = edge.slope(fit.xs[last] - fit.xs[last - 1]);
            return Ok(fit.ys[last] + slope * (x - fit.xs[last]));
        }

        let i = find_segment(&fit.xs, x);
        Ok(fit.coeffs[i].value(x - fit.xs[i]))
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_from_points_with_multiple_points() {
        let interp =
            CubicSplineInterpolator::from_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])
                .unwrap();
        assert_eq!(interp.len(), 4);
        assert!(interp.is_fitted());
    }

    #[test]
    fn test_from_points_one_point_rejected() {
        let result = CubicSplineInterpolator::from_points(&[0.0], &[0.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_from_points_mismatched_lengths() {
        let result = CubicSplineInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_unfitted_is_not_ready() {
        let interp = CubicSplineInterpolator::<f64>::new();
        assert_eq!(interp.evaluate(0.0), Err(InterpolationError::NotReady));
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_knot_points() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 2.0, 1.0, 3.0, 2.5];
        let interp = CubicSplineInterpolator::from_points(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.evaluate(x).unwrap(), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_points_is_straight_line() {
        let interp = CubicSplineInterpolator::from_points(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        for &x in &[-1.0, 1.0, 2.0, 2.5, 3.0, 7.0] {
            assert_relative_eq!(interp.evaluate(x).unwrap(), 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_three_points_single_interior_unknown() {
        // y = x^2 at 0,1,2: M1 = 6*(3 - 1)/(2*2) = 3
        let interp =
            CubicSplineInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        // Segment 0: b = 1 - (0 + 3)/6 = 0.5, c = 0, d = 3/6 = 0.5
        assert_relative_eq!(interp.evaluate(0.5).unwrap(), 0.25 + 0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_reproduces_linear_data() {
        let xs = [0.0, 0.5, 2.0, 3.0, 7.0];
        let ys: Vec<f64> = xs.iter().map(|x| 10.0 * x + 10.0).collect();
        let interp = CubicSplineInterpolator::from_points(&xs, &ys).unwrap();
        for i in 0..=90 {
            let x = -1.0 + i as f64 * 0.1;
            assert_relative_eq!(interp.evaluate(x).unwrap(), 10.0 * x + 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_c1_continuity_at_interior_knots() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        let interp = CubicSplineInterpolator::from_points(&xs, &ys).unwrap();

        for &knot in &xs[1..xs.len() - 1] {
            let h = 1e-6;
            let y_left = interp.evaluate(knot - h).unwrap();
            let y_mid = interp.evaluate(knot).unwrap();
            let y_right = interp.evaluate(knot + h).unwrap();

            let d_left = (y_mid - y_left) / h;
            let d_right = (y_right - y_mid) / h;
            assert!(
                (d_right - d_left).abs() < 1e-3,
                "First derivative discontinuity at knot {}: left={}, right={}",
                knot,
                d_left,
                d_right
            );
        }
    }

    #[test]
    fn test_natural_boundary_conditions() {
        let interp =
            CubicSplineInterpolator::from_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])
                .unwrap();

        let h = 0.01;
        let y0 = interp.evaluate(0.0).unwrap();
        let y1 = interp.evaluate(h).unwrap();
        let y2 = interp.evaluate(2.0 * h).unwrap();

        let d2 = (y2 - 2.0 * y1 + y0) / (h * h);
        assert!(
            d2.abs() < 0.5,
            "Second derivative at boundary should be near zero, got {}",
            d2
        );
    }

    #[test]
    fn test_extrapolation_is_tangent_line() {
        let interp =
            CubicSplineInterpolator::from_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])
                .unwrap();
        let h = 1e-6;
        let slope_right = (interp.evaluate(3.0).unwrap() - interp.evaluate(3.0 - h).unwrap()) / h;
        let beyond = interp.evaluate(4.0).unwrap();
        assert_relative_eq!(beyond, 9.0 + slope_right, epsilon = 1e-4);

        let slope_left = (interp.evaluate(h).unwrap() - interp.evaluate(0.0).unwrap()) / h;
        let before = interp.evaluate(-1.0).unwrap();
        assert_relative_eq!(before, -slope_left, epsilon = 1e-4);
    }

    #[test]
    fn test_with_f32() {
        let interp =
            CubicSplineInterpolator::from_points(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 1.0, 4.0])
                .unwrap();
        assert!(interp.evaluate(1.5_f32).unwrap().is_finite());
    }
}
