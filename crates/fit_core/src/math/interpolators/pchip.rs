//! Piecewise cubic Hermite interpolation (PCHIP).
//!
//! Node derivatives follow the Fritsch–Butland scheme with Brodlie's
//! modification for interior nodes and a shape-preserving non-centred
//! three-point formula at the ends. The resulting curve never introduces an
//! extremum between two samples that are locally monotonic.

use super::nodes::{find_segment, validate_nodes};
use super::InterpolationModel;
use crate::types::InterpolationError;
use num_traits::Float;

/// Relationship between the signs of two numbers.
///
/// Equivalent to `sign(a * b)` without performing the multiplication, which
/// could overflow for large slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignProduct {
    /// At least one operand is exactly zero
    Zero,
    /// Both operands share a sign
    Same,
    /// Operands have opposite signs
    Opposite,
}

impl SignProduct {
    #[inline]
    fn of<T: Float>(a: T, b: T) -> Self {
        let zero = T::zero();
        if a == zero || b == zero {
            SignProduct::Zero
        } else if (a > zero) == (b > zero) {
            SignProduct::Same
        } else {
            SignProduct::Opposite
        }
    }
}

/// Fitted state: nodes, derivatives and per-segment cubic coefficients.
#[derive(Debug, Clone)]
struct PchipFit<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    /// Derivative estimate at each node
    derivatives: Vec<T>,
    /// Quadratic coefficient of each segment
    c2: Vec<T>,
    /// Cubic coefficient of each segment
    c3: Vec<T>,
}

/// Shape-preserving piecewise cubic Hermite interpolator.
///
/// On each segment `[x[i], x[i+1]]` the curve is the cubic
///
/// ```text
/// y(x) = y[i] + t*(d[i] + t*(c2[i] + t*c3[i])),   t = x - x[i]
/// ```
///
/// matching the node values and the derivative estimates `d`. Derivatives
/// are chosen so that monotonic data stays monotonic and no overshoot occurs.
///
/// Queries outside the node range extend the first or last cubic.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use fit_core::math::interpolators::{InterpolationModel, PchipInterpolator};
///
/// let mut pchip = PchipInterpolator::new();
/// pchip.set_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 2.0]).unwrap();
///
/// // Flat data between x = 1 and x = 2 stays flat: no overshoot.
/// let y = pchip.evaluate(1.5).unwrap();
/// assert_eq!(y, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PchipInterpolator<T: Float> {
    fit: Option<PchipFit<T>>,
}

impl<T: Float> Default for PchipInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PchipInterpolator<T> {
    /// Create an unfitted interpolator.
    pub fn new() -> Self {
        Self { fit: None }
    }

    /// Create an interpolator fitted to the given nodes.
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
    pub fn xs(&self) -> &[T] {
        self.fit.as_ref().map_or(&[], |fit| fit.xs.as_slice())
    }

    /// Fitted node y-values (empty when unfitted).
    pub fn ys(&self) -> &[T] {
        self.fit.as_ref().map_or(&[], |fit| fit.ys.as_slice())
    }

    /// Derivative estimates at the nodes (empty when unfitted).
    pub fn derivatives(&self) -> &[T] {
        self.fit.as_ref().map_or(&[], |fit| fit.derivatives.as_slice())
    }

    /// Number of fitted nodes.
    pub fn len(&self) -> usize {
        self.xs().len()
    }

    /// Returns true if the interpolator holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.fit.is_none()
    }

    /// Build the complete fitted state for validated nodes.
    fn build(xs: &[T], ys: &[T]) -> PchipFit<T> {
        let n = xs.len();
        let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let secants: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        let derivatives = Self::estimate_derivatives(&h, &secants);

        let mut c2 = Vec::with_capacity(n - 1);
        let mut c3 = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let delta1 = (derivatives[i] - secants[i]) / h[i];
            let delta2 = (derivatives[i + 1] - secants[i]) / h[i];
            c2.push(-(delta1 + delta1 + delta2));
            c3.push((delta1 + delta2) / h[i]);
        }

        PchipFit {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            derivatives,
            c2,
            c3,
        }
    }

    /// Shape-preserving derivative estimates for every node.
    fn estimate_derivatives(h: &[T], secants: &[T]) -> Vec<T> {
        let n = h.len() + 1;

        // Two nodes: the straight line through both.
        if n == 2 {
            return vec![secants[0], secants[0]];
        }

        let mut d = vec![T::zero(); n];
        d[0] = Self::endpoint_derivative(h[0], h[1], secants[0], secants[1]);
        for i in 1..n - 1 {
            d[i] = Self::interior_derivative(h[i - 1], h[i], secants[i - 1], secants[i]);
        }
        d[n - 1] = Self::endpoint_derivative(h[n - 2], h[n - 3], secants[n - 2], secants[n - 3]);
        d
    }

    /// Non-centred three-point estimate at an end node.
    ///
    /// `near` is the segment touching the end node, `far` its neighbour.
    fn endpoint_derivative(h_near: T, h_far: T, s_near: T, s_far: T) -> T {
        let three = T::from(3.0).unwrap_or_else(|| T::one() + T::one() + T::one());
        let hsum = h_near + h_far;
        let w_near = (h_near + hsum) / hsum;
        let w_far = -h_near / hsum;
        let d = w_near * s_near + w_far * s_far;

        if SignProduct::of(d, s_near) != SignProduct::Same {
            return T::zero();
        }

        // Only needed when monotonicity switches across the two segments.
        if SignProduct::of(s_near, s_far) == SignProduct::Opposite {
            let dmax = three * s_near;
            if dmax.abs() < d.abs() {
                return dmax;
            }
        }
        d
    }

    /// Brodlie modification of the Butland formula at an interior node.
    ///
    /// Zero unless both adjacent secants are non-zero with the same sign;
    /// otherwise a weighted harmonic mean bounded by the two secants.
    fn interior_derivative(h_prev: T, h_next: T, s_prev: T, s_next: T) -> T {
        if SignProduct::of(s_prev, s_next) != SignProduct::Same {
            return T::zero();
        }

        let three = T::from(3.0).unwrap_or_else(|| T::one() + T::one() + T::one());
        let hsum = h_prev + h_next;
        let hsumt3 = three * hsum;
        let w1 = (hsum + h_prev) / hsumt3;
        let w2 = (hsum + h_next) / hsumt3;
        let dmax = s_prev.abs().max(s_next.abs());
        let dmin = s_prev.abs().min(s_next.abs());
        let drat1 = s_prev / dmax;
        let drat2 = s_next / dmax;
        dmin / (w1 * drat1 + w2 * drat2)
    }
}

impl<T: Float> InterpolationModel<T> for PchipInterpolator<T> {
    /// Fit the spline, replacing any previous fit.
    ///
    /// The new state is built completely before it is swapped in; on error
    /// the interpolator is left unfitted.
    fn set_points(&mut self, xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        if let Err(err) = validate_nodes(xs, ys) {
            self.fit = None;
            return Err(err);
        }
        self.fit = Some(Self::build(xs, ys));
        Ok(())
    }

    /// Evaluate the spline at `x` using Horner's scheme on the local offset.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - Interpolated (or extrapolated) value; exactly `ys[i]` at node `xs[i]`
    /// * `Err(InterpolationError::NotReady)` - The interpolator has not been fitted
    fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        let fit = self.fit.as_ref().ok_or(InterpolationError::NotReady)?;

        let last = fit.xs.len() - 1;
        if x == fit.xs[last] {
            return Ok(fit.ys[last]);
        }

        let i = find_segment(&fit.xs, x);
        let t = x - fit.xs[i];
        // Coefficients may overflow on very steep secants; nodes stay exact.
        if t == T::zero() {
            return Ok(fit.ys[i]);
        }
        Ok(fit.ys[i] + t * (fit.derivatives[i] + t * (fit.c2[i] + t * fit.c3[i])))
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
    // Sign Product Tests
    // ========================================

    #[test]
    fn test_sign_product_cases() {
        assert_eq!(SignProduct::of(0.0, 5.0), SignProduct::Zero);
        assert_eq!(SignProduct::of(-2.0, 0.0), SignProduct::Zero);
        assert_eq!(SignProduct::of(2.0, 5.0), SignProduct::Same);
        assert_eq!(SignProduct::of(-2.0, -5.0), SignProduct::Same);
        assert_eq!(SignProduct::of(-2.0, 5.0), SignProduct::Opposite);
    }

    #[test]
    fn test_sign_product_does_not_overflow() {
        assert_eq!(SignProduct::of(f64::MAX, f64::MAX), SignProduct::Same);
        assert_eq!(SignProduct::of(f64::MAX, -f64::MAX), SignProduct::Opposite);
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_is_unfitted() {
        let pchip = PchipInterpolator::<f64>::new();
        assert!(!pchip.is_fitted());
        assert!(pchip.is_empty());
        assert_eq!(pchip.len(), 0);
    }

    #[test]
    fn test_evaluate_unfitted_fails_not_ready() {
        let pchip = PchipInterpolator::<f64>::default();
        assert_eq!(pchip.evaluate(1.0), Err(InterpolationError::NotReady));
    }

    #[test]
    fn test_set_points_rejects_unsorted() {
        let mut pchip = PchipInterpolator::new();
        let result = pchip.set_points(&[1.0, 3.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_set_points_rejects_single_point() {
        let mut pchip = PchipInterpolator::new();
        let result = pchip.set_points(&[1.0], &[1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_failed_refit_leaves_model_unfitted() {
        let mut pchip = PchipInterpolator::from_points(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(pchip.set_points(&[0.0, 0.0], &[0.0, 1.0]).is_err());
        assert!(!pchip.is_fitted());
        assert_eq!(pchip.evaluate(0.5), Err(InterpolationError::NotReady));
    }

    #[test]
    fn test_refit_replaces_state() {
        let mut pchip = PchipInterpolator::from_points(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        pchip.set_points(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(pchip.len(), 3);
        assert_eq!(pchip.evaluate(0.5).unwrap(), 5.0);
    }

    // ========================================
    // Derivative Estimation Tests
    // ========================================

    #[test]
    fn test_two_points_use_secant_slope() {
        let pchip = PchipInterpolator::from_points(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert_eq!(pchip.derivatives(), &[2.0, 2.0]);
    }

    #[test]
    fn test_local_extremum_gets_zero_derivative() {
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(pchip.derivatives()[1], 0.0);
    }

    #[test]
    fn test_interior_derivative_is_harmonic_mean_on_uniform_grid() {
        // Uniform spacing: w1 = w2 = 1/2, so d = 2*s1*s2/(s1+s2)
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
        let d = pchip.derivatives();
        assert_relative_eq!(d[1], 2.0 * 1.0 * 3.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(d[2], 2.0 * 3.0 * 5.0 / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interior_derivative_bounded_by_secants() {
        let xs = [0.0, 0.5, 3.0, 3.2, 8.0];
        let ys = [0.0, 2.0, 2.5, 7.0, 7.5];
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        let d = pchip.derivatives();
        for i in 1..xs.len() - 1 {
            let s_prev = (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            let s_next = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
            assert!(d[i] > 0.0);
            assert!(d[i] <= 3.0 * s_prev.min(s_next) + 1e-12);
        }
    }

    #[test]
    fn test_endpoint_three_point_formula() {
        // h1 = h2 = 1, s0 = 1, s1 = 3 => d0 = 1.5*1 - 0.5*3 = 0 -> clamped to 0
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(pchip.derivatives()[0], 0.0);

        // s0 = 3, s1 = 1 => d0 = 1.5*3 - 0.5*1 = 4
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(pchip.derivatives()[0], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_capped_when_monotonicity_switches() {
        // s0 = 1, s1 = -10 => d0 = 1.5 + 5 = 6.5 > 3*s0 -> capped to 3
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0, -9.0]).unwrap();
        assert_relative_eq!(pchip.derivatives()[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_last_endpoint_mirrors_first() {
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[-9.0, 1.0, 0.0]).unwrap();
        // Mirror of the capped case above: s_near = -1, s_far = 10
        assert_relative_eq!(pchip.derivatives()[2], -3.0, epsilon = 1e-12);
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_passes_through_nodes_exactly() {
        let xs = [0.0, 0.3, 1.7, 2.0, 5.5];
        let ys = [1.0, -2.0, 4.25, 4.0, 10.0];
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(pchip.evaluate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_nodes_exact_when_secant_overflows() {
        // (1e10 - 0) / 1e-300 is infinite in f64
        let xs = [0.0, 1e-300, 1.0];
        let ys = [0.0, 1e10, 2e10];
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(pchip.evaluate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_two_points_is_straight_line() {
        let pchip = PchipInterpolator::from_points(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        for &x in &[-1.0, 0.0, 1.5, 2.0, 2.75, 10.0] {
            assert_relative_eq!(pchip.evaluate(x).unwrap(), 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reproduces_linear_data() {
        let xs = [0.0, 1.0, 2.5, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x - 1.0).collect();
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        for i in 0..=40 {
            let x = i as f64 * 0.1;
            assert_relative_eq!(pchip.evaluate(x).unwrap(), 3.0 * x - 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_no_overshoot_on_step_data() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 0.0, 1.0, 1.0, 1.0];
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        for i in 0..=400 {
            let y = pchip.evaluate(i as f64 * 0.01).unwrap();
            assert!((-1e-12..=1.0 + 1e-12).contains(&y), "overshoot: {}", y);
        }
    }

    #[test]
    fn test_monotone_data_gives_monotone_curve() {
        let xs = [40.0, 47.0, 70.0, 120.0, 300.0, 1000.0];
        let ys = [1.0, 1.2, 3.5, 3.6, 10.0, 11.0];
        let pchip = PchipInterpolator::from_points(&xs, &ys).unwrap();
        let mut prev = pchip.evaluate(40.0).unwrap();
        for i in 1..=960 {
            let y = pchip.evaluate(40.0 + i as f64).unwrap();
            assert!(y >= prev - 1e-12);
            prev = y;
        }
    }

    #[test]
    fn test_extrapolation_is_finite() {
        let pchip =
            PchipInterpolator::from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert!(pchip.evaluate(-5.0).unwrap().is_finite());
        assert!(pchip.evaluate(7.0).unwrap().is_finite());
    }

    #[test]
    fn test_with_f32() {
        let pchip =
            PchipInterpolator::from_points(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 2.0, 4.0]).unwrap();
        let y = pchip.evaluate(0.5_f32).unwrap();
        assert!((y - 1.0_f32).abs() < 1e-5);
    }
}
