//! Series selection and cell parsing.

use crate::error::LoadError;
use fit_core::analysis::FitSession;
use fit_core::math::interpolators::InterpolatorKind;
use fit_core::types::InterpolationError;

/// Which series of a table to extract.
///
/// The first row and the first column of a table hold the x values:
/// a column series reads x down column 0, a row series reads x along row 0.
/// Index 0 is therefore never a valid selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSelection {
    /// x from column 0 of rows `1..`, y from the given column
    Column(usize),
    /// x from row 0 of columns `1..`, y from the given row
    Row(usize),
}

impl Default for SeriesSelection {
    fn default() -> Self {
        SeriesSelection::Column(1)
    }
}

impl std::fmt::Display for SeriesSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesSelection::Column(c) => write!(f, "column {}", c),
            SeriesSelection::Row(r) => write!(f, "row {}", r),
        }
    }
}

/// A sample series extracted from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Header cell of the selected row or column
    pub label: String,
    /// Sample abscissae in table order
    pub xs: Vec<f64>,
    /// Sample ordinates in table order
    pub ys: Vec<f64>,
}

impl Series {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Validate the samples and start a fitting session over them.
    pub fn into_session(self, kinds: &[InterpolatorKind]) -> Result<FitSession, InterpolationError> {
        FitSession::new(self.xs, self.ys, kinds)
    }
}

/// Parse a numeric cell, accepting a decimal comma.
///
/// Returns `None` for empty, malformed or non-finite text.
///
/// # Example
///
/// ```
/// use adapter_csv::parse_number;
///
/// assert_eq!(parse_number(" 1,5 "), Some(1.5));
/// assert_eq!(parse_number("2e3"), Some(2000.0));
/// assert_eq!(parse_number("n/a"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let normalised = text.trim().replace(',', ".");
    normalised
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a `;`-separated anchor list such as `"40;47;70"`.
///
/// Empty entries are skipped. On failure the error's `column` is the
/// 0-based position of the offending entry and `row` is 0.
///
/// # Example
///
/// ```
/// use adapter_csv::parse_anchor_list;
///
/// assert_eq!(parse_anchor_list("40; 47;;70,5").unwrap(), vec![40.0, 47.0, 70.5]);
/// assert!(parse_anchor_list("").unwrap().is_empty());
/// ```
pub fn parse_anchor_list(text: &str) -> Result<Vec<f64>, LoadError> {
    text.split(';')
        .enumerate()
        .filter(|(_, entry)| !entry.trim().is_empty())
        .map(|(position, entry)| {
            parse_number(entry).ok_or_else(|| LoadError::InvalidNumber {
                row: 0,
                column: position,
                value: entry.trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_variants() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-0,25"), Some(-0.25));
        assert_eq!(parse_number("\t3.5 "), Some(3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1,2,3"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_parse_anchor_list_reports_position() {
        let err = parse_anchor_list("1;2;x;4").unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!((row, column), (0, 2));
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_selection_display_and_default() {
        assert_eq!(SeriesSelection::default(), SeriesSelection::Column(1));
        assert_eq!(SeriesSelection::Row(4).to_string(), "row 4");
    }

    #[test]
    fn test_series_into_session() {
        let series = Series {
            label: "s".to_string(),
            xs: vec![1.0, 2.0, 3.0],
            ys: vec![2.0, 4.0, 6.0],
        };
        assert_eq!(series.len(), 3);
        let session = series.into_session(&[InterpolatorKind::Linear]).unwrap();
        assert_eq!(session.anchors(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_series_into_session_rejects_unsorted() {
        let series = Series {
            label: "s".to_string(),
            xs: vec![2.0, 1.0],
            ys: vec![1.0, 1.0],
        };
        assert!(series.into_session(&InterpolatorKind::ALL).is_err());
    }
}
