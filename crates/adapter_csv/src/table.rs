//! In-memory delimited-text table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::selection::{parse_number, Series, SeriesSelection};

/// Grid of trimmed text cells read from a delimited file.
///
/// Rows may have different lengths. No header row is assumed: row 0 and
/// column 0 are ordinary cells that a [`SeriesSelection`] reads x values from.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Read a table from any reader.
    ///
    /// # Example
    ///
    /// ```
    /// use adapter_csv::{CsvTable, SeriesSelection};
    ///
    /// let text = "x;a;b\n1;10;100\n2;20;200\n";
    /// let table = CsvTable::from_reader(text.as_bytes(), b';').unwrap();
    ///
    /// let series = table.series(SeriesSelection::Column(2)).unwrap();
    /// assert_eq!(series.label, "b");
    /// assert_eq!(series.xs, vec![1.0, 2.0]);
    /// assert_eq!(series.ys, vec![100.0, 200.0]);
    /// ```
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(delimiter)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .map(|record| record.map(|cells| cells.iter().map(str::to_string).collect::<Vec<_>>()))
            .collect::<Result<Vec<_>, csv::Error>>()?;

        if rows.is_empty() {
            return Err(LoadError::EmptyTable);
        }

        debug!(rows = rows.len(), "Parsed delimited table");
        Ok(Self { rows })
    }

    /// Read a table from a file.
    pub fn load(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading samples from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, delimiter)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Text of a cell, or `None` outside the table or a short row.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Numeric value of a cell.
    ///
    /// # Errors
    ///
    /// `MissingCell` if the cell does not exist, `InvalidNumber` if its text
    /// is not a finite number.
    pub fn number(&self, row: usize, column: usize) -> Result<f64, LoadError> {
        let text = self
            .cell(row, column)
            .ok_or(LoadError::MissingCell { row, column })?;
        parse_number(text).ok_or_else(|| LoadError::InvalidNumber {
            row,
            column,
            value: text.to_string(),
        })
    }

    /// Extract one series.
    ///
    /// The series is returned as read; sample validation happens when it is
    /// turned into a session.
    pub fn series(&self, selection: SeriesSelection) -> Result<Series, LoadError> {
        let (label, cells): (String, Vec<((usize, usize), (usize, usize))>) = match selection {
            SeriesSelection::Column(column) => {
                self.check_range("column", column, self.column_count())?;
                let label = self.cell(0, column).unwrap_or_default().to_string();
                let cells = (1..self.row_count())
                    .map(|row| ((row, 0), (row, column)))
                    .collect();
                (label, cells)
            }
            SeriesSelection::Row(row) => {
                self.check_range("row", row, self.row_count())?;
                let label = self.cell(row, 0).unwrap_or_default().to_string();
                let width = self.rows[0].len();
                let cells = (1..width).map(|column| ((0, column), (row, column))).collect();
                (label, cells)
            }
        };

        let mut xs = Vec::with_capacity(cells.len());
        let mut ys = Vec::with_capacity(cells.len());
        for ((x_row, x_col), (y_row, y_col)) in cells {
            xs.push(self.number(x_row, x_col)?);
            ys.push(self.number(y_row, y_col)?);
        }

        debug!(%selection, samples = xs.len(), "Extracted series '{}'", label);
        Ok(Series { label, xs, ys })
    }

    fn check_range(&self, kind: &'static str, index: usize, available: usize) -> Result<(), LoadError> {
        if index == 0 || index >= available {
            return Err(LoadError::SelectionOutOfRange {
                kind,
                index,
                available,
            });
        }
        Ok(())
    }
}
