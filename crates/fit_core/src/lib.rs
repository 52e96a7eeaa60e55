//! # fit_core: Interpolation Models and Fit Comparison
//!
//! ## Core Layer Role
//!
//! fit_core is the bottom layer of the curvefit workspace, providing:
//! - Interpolation models behind a common contract (`math::interpolators`)
//!   - shape-preserving piecewise cubic Hermite (PCHIP)
//!   - bidirectional piecewise linear (forward and inverse lookups)
//!   - natural cubic spline
//! - Streaming extremum tracking (`analysis::extremum`)
//! - Relative-deviation scoring of fitted models against reference points
//!   (`analysis::comparison`)
//! - A fitting session that selects anchor points, refits and scores models
//!   (`analysis::session`)
//! - Error types: `InterpolationError`, `ComparisonError` (`types::error`)
//!
//! ## Zero I/O Principle
//!
//! This crate performs no file, network or terminal I/O and never logs.
//! Sample import lives in `adapter_csv`; presentation lives in `service_cli`.
//! External dependencies are kept minimal:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use fit_core::analysis::FitComparisonEngine;
//! use fit_core::math::interpolators::{InterpolationModel, PchipInterpolator};
//!
//! let mut pchip = PchipInterpolator::<f64>::new();
//! pchip.set_points(&[1.0, 2.0, 4.0], &[10.0, 20.0, 40.0]).unwrap();
//!
//! let mut engine = FitComparisonEngine::new();
//! engine.add_model("hermite", &pchip);
//!
//! let reports = engine.compare(&[(1.0, 10.0), (2.0, 20.0), (4.0, 40.0)]).unwrap();
//! assert!(reports[0].worst_deviation.abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types, `InterpolatorKind` and `ModelReport`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod math;
pub mod traits;
pub mod types;
