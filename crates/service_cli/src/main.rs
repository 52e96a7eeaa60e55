//! curvefit CLI - Command Line Curve Fitting and Model Comparison
//!
//! This is the operational entry point for the curvefit workspace.
//!
//! # Commands
//!
//! - `curvefit compare --input <file>` - Fit models on anchor points and report
//!   the relative deviation of every sample
//! - `curvefit sample --input <file>` - Print the fitted curves on a grid as CSV
//! - `curvefit check` - Validate the configuration
//!
//! # Architecture
//!
//! As the service layer, this crate reads samples through `adapter_csv`,
//! fits and scores them with `fit_core`, and owns all presentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::sample::GridArgs;
use commands::SeriesArgs;
use config::CurvefitConfig;
use output::OutputFormat;

/// Interpolation model fitting and comparison
#[derive(Parser)]
#[command(name = "curvefit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "curvefit.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit models on the anchor points and report per-sample deviations
    Compare {
        #[command(flatten)]
        series: SeriesArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Flag deviations whose absolute value exceeds this percentage
        #[arg(long)]
        mark_limit: Option<f64>,
    },

    /// Evaluate the fitted models on an even grid and print CSV
    Sample {
        #[command(flatten)]
        series: SeriesArgs,

        /// Lower bound of the grid (defaults to the first sample x)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Upper bound of the grid, exclusive (defaults to the last sample x)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        /// Grid step (defaults to the sample range over the configured divisions)
        #[arg(long)]
        step: Option<f64>,

        /// Divide each sampled value by its x
        #[arg(long)]
        relative: bool,
    },

    /// Check configuration
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CurvefitConfig::load_or_default(&cli.config)?;
    init_tracing(cli.verbose, &config.effective_log_level().to_lowercase());
    let config = config.with_env_override();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Compare {
            series,
            format,
            mark_limit,
        } => {
            config.validate()?;
            commands::compare::run(&config, &series, format, mark_limit)
        }
        Commands::Sample {
            series,
            min,
            max,
            step,
            relative,
        } => {
            config.validate()?;
            let grid = GridArgs {
                min,
                max,
                step,
                relative,
            };
            commands::sample::run(&config, &series, &grid)
        }
        Commands::Check => commands::check::run(&config),
    }
}
