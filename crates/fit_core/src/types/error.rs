//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from fitting and evaluating interpolation models
//! - `ComparisonError`: Errors from scoring fitted models against reference points

use thiserror::Error;

/// Interpolation model errors.
///
/// Returned by `set_points`, `add` and every evaluation entry point of the
/// interpolation models.
///
/// # Variants
/// - `InvalidInput`: Rejected node set (too few points, mismatched lengths,
///   keys not strictly increasing, duplicate or non-finite keys)
/// - `NotReady`: Evaluation requested before a successful fit
/// - `DivisionByZero`: Degenerate linear segment with equal endpoint keys
/// - `NonMonotonicData`: Inverse lookup on data whose y values are not strictly monotonic
///
/// # Examples
/// ```
/// use fit_core::types::InterpolationError;
///
/// let err = InterpolationError::InvalidInput("empty array".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: empty array");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model evaluated before it was fitted.
    #[error("Model is not ready: fit at least 2 points before evaluating")]
    NotReady,

    /// Segment with zero width in the key direction.
    #[error("Division by zero: degenerate segment at key {at}")]
    DivisionByZero {
        /// Key at which the degenerate segment ends
        at: f64,
    },

    /// Data is not strictly monotonic when monotonicity is required.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },
}

/// Fit comparison errors.
///
/// Returned by [`FitComparisonEngine::compare`](crate::analysis::FitComparisonEngine::compare)
/// and the fitting session's scoring step.
///
/// # Examples
/// ```
/// use fit_core::types::ComparisonError;
///
/// let err = ComparisonError::DivisionByZero { model: "linear".to_string(), x: 2.0 };
/// assert!(format!("{}", err).contains("evaluated to zero"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonError {
    /// No reference points were supplied.
    #[error("No reference points to compare against")]
    EmptyReference,

    /// Model value of exactly zero used as a deviation denominator.
    #[error("Model '{model}' evaluated to zero at x = {x}; relative deviation is undefined")]
    DivisionByZero {
        /// Name of the model
        model: String,
        /// Reference x at which the model evaluated to zero
        x: f64,
    },

    /// A model failed to evaluate at a reference point.
    #[error("Model '{model}' failed: {source}")]
    Model {
        /// Name of the model
        model: String,
        /// Underlying interpolation error
        #[source]
        source: InterpolationError,
    },
}

impl ComparisonError {
    /// Wrap an interpolation error raised by the named model.
    pub fn model(model: impl Into<String>, source: InterpolationError) -> Self {
        ComparisonError::Model {
            model: model.into(),
            source,
        }
    }
}
