//! Error types for sample import.

use thiserror::Error;

/// Errors raised while reading a table or extracting a series from it.
///
/// Rows and columns are 0-based, as in [`SeriesSelection`](crate::SeriesSelection).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input holds no records.
    #[error("Table is empty")]
    EmptyTable,

    /// The selected row or column lies outside the table.
    #[error("{kind} {index} is out of range: table has {available}")]
    SelectionOutOfRange {
        /// "row" or "column"
        kind: &'static str,
        /// Requested index
        index: usize,
        /// Number of rows or columns in the table
        available: usize,
    },

    /// A cell needed by the selection is missing from a short row.
    #[error("Missing cell at row {row}, column {column}")]
    MissingCell {
        /// Row of the missing cell
        row: usize,
        /// Column of the missing cell
        column: usize,
    },

    /// A cell needed by the selection is not a number.
    #[error("Invalid number '{value}' at row {row}, column {column}")]
    InvalidNumber {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        column: usize,
        /// Trimmed cell text
        value: String,
    },
}
