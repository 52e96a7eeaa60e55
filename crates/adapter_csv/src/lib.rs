//! # adapter_csv: Delimited-Text Sample Import
//!
//! ## Adapter Layer Role
//!
//! adapter_csv turns delimited text files into sample series for `fit_core`:
//! - [`CsvTable`]: Ragged grid of trimmed cells, read without headers
//! - [`SeriesSelection`]: Pick a column or a row; x values come from the
//!   first column or the first row respectively
//! - [`parse_number`]: Numeric cells with either decimal point or decimal comma
//! - [`parse_anchor_list`]: `;`-separated anchor lists
//!
//! ## Usage Examples
//!
//! ```rust
//! use adapter_csv::{CsvTable, SeriesSelection};
//! use fit_core::math::interpolators::InterpolatorKind;
//!
//! let text = "x;y\n1;1\n2;4\n3;9\n";
//! let table = CsvTable::from_reader(text.as_bytes(), b';').unwrap();
//! let series = table.series(SeriesSelection::Column(1)).unwrap();
//!
//! let session = series.into_session(&InterpolatorKind::ALL).unwrap();
//! assert_eq!(session.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod selection;
pub mod table;

pub use error::LoadError;
pub use selection::{parse_anchor_list, parse_number, Series, SeriesSelection};
pub use table::CsvTable;
