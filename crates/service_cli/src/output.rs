//! Report rendering
//!
//! Comparison results can be rendered as an aligned table, CSV or JSON.
//! Sampled curves are always rendered as CSV.

use clap::ValueEnum;
use fit_core::analysis::{FitSession, ModelReport, SampledCurve};
use serde::Serialize;

use crate::{CliError, Result};

/// Output format of the compare command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table with markers
    Table,
    /// One row per sample
    Csv,
    /// Full report document
    Json,
}

/// One sample of the compared series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SampleRow {
    /// Sample x
    pub x: f64,
    /// Sample y
    pub y: f64,
    /// Whether the models were fitted through this sample
    pub anchor: bool,
}

/// Per-model report with the flagged points
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelSummary {
    /// Deviations and worst point
    #[serde(flatten)]
    pub report: ModelReport<f64>,
    /// Sample indices whose absolute deviation exceeds the mark limit
    pub exceeding: Vec<usize>,
}

/// Everything the compare command prints
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonSummary {
    /// Series label taken from the input header
    pub label: String,
    /// Mark limit in percent
    pub mark_limit: f64,
    /// All samples in input order
    pub samples: Vec<SampleRow>,
    /// One entry per model, in report order
    pub models: Vec<ModelSummary>,
}

impl ComparisonSummary {
    /// Assemble a summary from a scored session
    pub fn new(
        label: impl Into<String>,
        session: &FitSession,
        reports: Vec<ModelReport<f64>>,
        mark_limit: f64,
    ) -> Self {
        let samples = session
            .xs()
            .iter()
            .zip(session.ys())
            .map(|(&x, &y)| SampleRow {
                x,
                y,
                anchor: session.is_anchor(x),
            })
            .collect();

        let models = reports
            .into_iter()
            .map(|report| ModelSummary {
                exceeding: report.exceeding(mark_limit),
                report,
            })
            .collect();

        Self {
            label: label.into(),
            mark_limit,
            samples,
            models,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Csv => self.render_csv(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| CliError::output(e.to_string()))
            }
        }
    }

    /// Aligned table: `!` marks each model's worst point, `*` every point
    /// above the mark limit, `A` the anchors.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Series: {}\n", self.label));

        out.push_str(&format!("{:>12} {:>12}  ", "x", "y"));
        for model in &self.models {
            out.push_str(&format!("{:>14} ", model.report.name));
        }
        out.push('\n');

        for (i, sample) in self.samples.iter().enumerate() {
            let anchor = if sample.anchor { 'A' } else { ' ' };
            out.push_str(&format!("{:>12} {:>12} {}", sample.x, sample.y, anchor));
            for model in &self.models {
                let marker = if model.report.is_worst(i) {
                    '!'
                } else if model.exceeding.contains(&i) {
                    '*'
                } else {
                    ' '
                };
                out.push_str(&format!("{:>13.5}{} ", model.report.deviations[i], marker));
            }
            out.push('\n');
        }

        out.push('\n');
        for model in &self.models {
            let worst_x = self.samples[model.report.worst_index].x;
            out.push_str(&format!(
                "{}: worst deviation {:.5}% at x = {} ({} above {}%)\n",
                model.report.name,
                model.report.worst_deviation,
                worst_x,
                model.exceeding.len(),
                self.mark_limit
            ));
        }
        out
    }

    /// CSV with columns `x,y,anchor,<model>...`
    pub fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["x".to_string(), "y".to_string(), "anchor".to_string()];
        header.extend(self.models.iter().map(|m| m.report.name.clone()));
        writer.write_record(&header).map_err(csv_error)?;

        for (i, sample) in self.samples.iter().enumerate() {
            let mut record = vec![
                sample.x.to_string(),
                sample.y.to_string(),
                sample.anchor.to_string(),
            ];
            record.extend(self.models.iter().map(|m| m.report.deviations[i].to_string()));
            writer.write_record(&record).map_err(csv_error)?;
        }

        finish_csv(writer)
    }
}

/// Render sampled curves as CSV with columns `x,<model>...`
///
/// All curves must come from the same grid.
pub fn render_curves(curves: &[SampledCurve]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["x".to_string()];
    header.extend(curves.iter().map(|c| c.kind.as_str().to_string()));
    writer.write_record(&header).map_err(csv_error)?;

    let rows = curves.first().map_or(0, |c| c.points.len());
    for i in 0..rows {
        let mut record = vec![curves[0].points[i].0.to_string()];
        record.extend(curves.iter().map(|c| c.points[i].1.to_string()));
        writer.write_record(&record).map_err(csv_error)?;
    }

    finish_csv(writer)
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::output(e.to_string())
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::output(e.to_string()))
}
