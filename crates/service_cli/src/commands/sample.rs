//! Sample command implementation
//!
//! Evaluates every fitted model on an evenly spaced grid and prints the
//! curves as CSV.

use fit_core::analysis::{SampledCurve, SamplingGrid};
use tracing::info;

use super::{prepare_session, SeriesArgs};
use crate::config::CurvefitConfig;
use crate::output::render_curves;
use crate::Result;

/// Grid overrides; unset bounds follow the sample range and an unset step
/// divides it into the configured number of divisions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridArgs {
    /// Lower bound (inclusive)
    pub min: Option<f64>,
    /// Upper bound (exclusive)
    pub max: Option<f64>,
    /// Distance between points
    pub step: Option<f64>,
    /// Divide each value by its x
    pub relative: bool,
}

/// Resolve the sampling grid for the given sample abscissae
pub fn build_grid(xs: &[f64], divisions: usize, grid: &GridArgs) -> Result<SamplingGrid<f64>> {
    let auto = SamplingGrid::auto(xs, divisions)?;
    let min = grid.min.unwrap_or(auto.min());
    let max = grid.max.unwrap_or(auto.max());
    let step = grid.step.unwrap_or(auto.step());
    Ok(SamplingGrid::new(min, max, step)?.with_relative(grid.relative))
}

/// Fit the series and sample every model
pub fn sample_curves(
    config: &CurvefitConfig,
    args: &SeriesArgs,
    grid: &GridArgs,
) -> Result<Vec<SampledCurve>> {
    let (_, session) = prepare_session(config, args)?;
    let grid = build_grid(session.xs(), config.sample_divisions, grid)?;
    info!(
        "Sampling [{}, {}) with step {}{}",
        grid.min(),
        grid.max(),
        grid.step(),
        if grid.is_relative() { " (relative)" } else { "" }
    );
    Ok(session.sample_curves(&grid)?)
}

/// Run the sample command
pub fn run(config: &CurvefitConfig, args: &SeriesArgs, grid: &GridArgs) -> Result<()> {
    let curves = sample_curves(config, args, grid)?;
    print!("{}", render_curves(&curves)?);
    Ok(())
}
