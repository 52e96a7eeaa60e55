//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The helpers here load
//! a sample series and prepare the fitting session shared by `compare` and
//! `sample`.

pub mod check;
pub mod compare;
pub mod sample;

use std::path::{Path, PathBuf};

use adapter_csv::{parse_anchor_list, CsvTable, SeriesSelection};
use clap::Args;
use fit_core::analysis::FitSession;
use fit_core::math::interpolators::InterpolatorKind;
use tracing::{info, warn};

use crate::config::CurvefitConfig;
use crate::{CliError, Result};

/// Input and fitting options shared by commands that fit a series
#[derive(Debug, Clone, Args)]
pub struct SeriesArgs {
    /// Path to the delimited sample file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Take y from this column (x from column 0)
    #[arg(long, conflicts_with = "row")]
    pub column: Option<usize>,

    /// Take y from this row (x from row 0)
    #[arg(long)]
    pub row: Option<usize>,

    /// Anchor x values, separated by ';' (defaults to the configured anchors)
    #[arg(short, long)]
    pub anchors: Option<String>,

    /// Models to fit, separated by ',' (defaults to the configured models)
    #[arg(short, long)]
    pub models: Option<String>,
}

impl SeriesArgs {
    /// Selected series; column 1 when neither row nor column is given
    pub fn selection(&self) -> SeriesSelection {
        match (self.row, self.column) {
            (Some(row), _) => SeriesSelection::Row(row),
            (None, Some(column)) => SeriesSelection::Column(column),
            (None, None) => SeriesSelection::default(),
        }
    }
}

/// Parse a comma-separated model list, dropping repeats
pub fn parse_models(list: &str) -> Result<Vec<InterpolatorKind>> {
    let mut kinds = Vec::new();
    for entry in list.split(',').filter(|e| !e.trim().is_empty()) {
        let kind: InterpolatorKind = entry.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    if kinds.is_empty() {
        return Err(CliError::invalid_argument("no models selected"));
    }
    Ok(kinds)
}

/// Load the selected series and fit the requested models on its anchors
///
/// Anchors that do not form a valid set for the series (fewer than two, or
/// not all among the sample x values) are replaced by the first and last
/// sample, with a warning.
pub fn prepare_session(config: &CurvefitConfig, args: &SeriesArgs) -> Result<(String, FitSession)> {
    if !Path::new(&args.input).exists() {
        return Err(CliError::FileNotFound(args.input.display().to_string()));
    }

    let kinds = match &args.models {
        Some(list) => parse_models(list)?,
        None => config.model_kinds(),
    };
    let anchors = match &args.anchors {
        Some(list) => parse_anchor_list(list)?,
        None => config.anchors.clone(),
    };

    let table = CsvTable::load(&args.input, config.delimiter_byte())?;
    let selection = args.selection();
    let series = table.series(selection)?;
    let label = series.label.clone();
    info!("Fitting {} of {} ({} samples)", selection, args.input.display(), series.len());

    let mut session = series.into_session(&kinds)?;
    if let Err(e) = session.set_anchors(&anchors) {
        warn!("{}; using the first and last sample as anchors", e);
        session.set_anchors(&[])?;
    }
    info!("Anchors: {:?}", session.anchors());

    Ok((label, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(input: PathBuf) -> SeriesArgs {
        SeriesArgs {
            input,
            column: None,
            row: None,
            anchors: None,
            models: None,
        }
    }

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x;y\n40;2\n47;3\n70;5\n120;7\n").unwrap();
        file
    }

    #[test]
    fn test_selection_precedence() {
        let mut a = args(PathBuf::from("in.csv"));
        assert_eq!(a.selection(), SeriesSelection::Column(1));
        a.column = Some(3);
        assert_eq!(a.selection(), SeriesSelection::Column(3));
        a.row = Some(2);
        assert_eq!(a.selection(), SeriesSelection::Row(2));
    }

    #[test]
    fn test_parse_models() {
        assert_eq!(
            parse_models("linear, pchip,hermite").unwrap(),
            vec![InterpolatorKind::Linear, InterpolatorKind::Hermite]
        );
        assert!(matches!(parse_models("akima"), Err(CliError::Interpolation(_))));
        assert!(matches!(parse_models(" , "), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_prepare_session_uses_configured_anchors_present_in_series() {
        let file = sample_file();
        let config = CurvefitConfig {
            anchors: vec![40.0, 70.0, 120.0],
            ..CurvefitConfig::default()
        };
        let (label, session) = prepare_session(&config, &args(file.path().to_path_buf())).unwrap();
        assert_eq!(label, "y");
        assert_eq!(session.anchors(), vec![40.0, 70.0, 120.0]);
        assert_eq!(session.models().len(), 3);
    }

    #[test]
    fn test_prepare_session_falls_back_to_end_points() {
        // Default anchors include values the series does not contain.
        let file = sample_file();
        let config = CurvefitConfig::default();
        let (_, session) = prepare_session(&config, &args(file.path().to_path_buf())).unwrap();
        assert_eq!(session.anchors(), vec![40.0, 120.0]);
    }

    #[test]
    fn test_prepare_session_explicit_models_and_anchors() {
        let file = sample_file();
        let mut a = args(file.path().to_path_buf());
        a.models = Some("linear".to_string());
        a.anchors = Some("40;47;120".to_string());

        let (_, session) = prepare_session(&CurvefitConfig::default(), &a).unwrap();
        assert_eq!(session.anchors(), vec![40.0, 47.0, 120.0]);
        assert_eq!(session.models().len(), 1);
    }

    #[test]
    fn test_prepare_session_missing_file() {
        let a = args(PathBuf::from("/nonexistent/curvefit/input.csv"));
        assert!(matches!(
            prepare_session(&CurvefitConfig::default(), &a),
            Err(CliError::FileNotFound(_))
        ));
    }
}
