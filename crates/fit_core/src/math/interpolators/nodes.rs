//! Node-set validation and segment lookup shared by the models.

use crate::types::InterpolationError;
use num_traits::Float;

/// Minimum number of nodes any model accepts.
pub(crate) const MIN_NODES: usize = 2;

/// Validate a node set: equal lengths, at least [`MIN_NODES`] points and
/// strictly increasing `xs`.
///
/// A NaN anywhere in `xs` fails the ordering check.
pub(crate) fn validate_nodes<T: Float>(xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < MIN_NODES {
        return Err(InterpolationError::InvalidInput(format!(
            "at least {} points are required, got {}",
            MIN_NODES,
            xs.len()
        )));
    }

    for i in 1..xs.len() {
        // Written as a negation so that NaN is rejected too.
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpolationError::InvalidInput(format!(
                "xs must be strictly increasing: violation at index {}",
                i
            )));
        }
    }

    Ok(())
}

/// Locate the segment used to evaluate `x`.
///
/// Queries at or below the first node map to segment 0, queries at or above
/// the last node map to the last segment, anything else maps to the first
/// interval whose right endpoint strictly exceeds `x`.
///
/// `xs` must hold at least two strictly increasing nodes.
#[inline]
pub(crate) fn find_segment<T: Float>(xs: &[T], x: T) -> usize {
    let last_segment = xs.len() - 2;
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[xs.len() - 1] {
        return last_segment;
    }
    // Index of the first node strictly greater than x.
    let right = xs.partition_point(|&xi| xi <= x);
    right.saturating_sub(1).min(last_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_two_points() {
        assert!(validate_nodes(&[0.0, 1.0], &[5.0, 6.0]).is_ok());
    }

    #[test]
    fn test_validate_rejects_single_point() {
        let err = validate_nodes(&[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(msg) if msg.contains("at least 2")));
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let err = validate_nodes(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(msg) if msg.contains("same length")));
    }

    #[test]
    fn test_validate_rejects_unsorted_and_duplicate_keys() {
        assert!(validate_nodes(&[1.0, 3.0, 2.0], &[0.0, 0.0, 0.0]).is_err());
        assert!(validate_nodes(&[1.0, 1.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_validate_rejects_nan_key() {
        assert!(validate_nodes(&[0.0, f64::NAN, 2.0], &[0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_find_segment_clamps_and_searches() {
        let xs = [0.0, 1.0, 2.0, 4.0];
        assert_eq!(find_segment(&xs, -1.0), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 0.5), 0);
        assert_eq!(find_segment(&xs, 1.0), 1);
        assert_eq!(find_segment(&xs, 3.9), 2);
        assert_eq!(find_segment(&xs, 4.0), 2);
        assert_eq!(find_segment(&xs, 10.0), 2);
    }

    #[test]
    fn test_find_segment_nan_stays_in_range() {
        let xs = [0.0, 1.0, 2.0];
        assert!(find_segment(&xs, f64::NAN) <= 1);
    }
}
