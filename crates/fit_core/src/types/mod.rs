//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation and fit comparison
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] and [`ComparisonError`] are
//! re-exported at this module level.

pub mod error;

pub use error::{ComparisonError, InterpolationError};
