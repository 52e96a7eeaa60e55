//! Scoring and sampling of fitted interpolation models.
//!
//! This module provides:
//! - [`ExtremumTracker`]: Single-pass tracking of the most extreme value and its position
//! - [`FitComparisonEngine`]: Per-point relative deviation of models against reference points
//! - [`FitSession`]: Anchor selection, refitting and scoring over one sample series
//! - [`SamplingGrid`] and [`sample_model`]: Evaluation of models on an even grid

pub mod comparison;
pub mod extremum;
pub mod sampling;
pub mod session;

pub use comparison::{relative_deviation, FitComparisonEngine, ModelReport};
pub use extremum::ExtremumTracker;
pub use sampling::{sample_model, SamplingGrid};
pub use session::{FitSession, SampledCurve};
