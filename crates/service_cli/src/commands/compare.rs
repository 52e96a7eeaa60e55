//! Compare command implementation
//!
//! Fits the selected models on the anchor points and reports the relative
//! deviation of every sample from each model.

use tracing::info;

use super::{prepare_session, SeriesArgs};
use crate::config::CurvefitConfig;
use crate::output::{ComparisonSummary, OutputFormat};
use crate::{CliError, Result};

/// Build the comparison summary for a series
pub fn summarise(
    config: &CurvefitConfig,
    args: &SeriesArgs,
    mark_limit: Option<f64>,
) -> Result<ComparisonSummary> {
    let mark_limit = mark_limit.unwrap_or(config.mark_limit);
    if !mark_limit.is_finite() || mark_limit < 0.0 {
        return Err(CliError::invalid_argument(format!(
            "mark limit must be a non-negative number, got {}",
            mark_limit
        )));
    }

    let (label, session) = prepare_session(config, args)?;
    let reports = session.score()?;

    for report in &reports {
        info!(
            "{}: worst deviation {:.5}% at sample {}",
            report.name, report.worst_deviation, report.worst_index
        );
    }

    Ok(ComparisonSummary::new(label, &session, reports, mark_limit))
}

/// Run the compare command
pub fn run(
    config: &CurvefitConfig,
    args: &SeriesArgs,
    format: OutputFormat,
    mark_limit: Option<f64>,
) -> Result<()> {
    info!("Starting comparison...");
    let summary = summarise(config, args, mark_limit)?;
    print!("{}", summary.render(format)?);
    info!("Comparison complete");
    Ok(())
}
