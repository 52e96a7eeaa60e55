//! Error types for the curvefit CLI.

use adapter_csv::LoadError;
use fit_core::types::{ComparisonError, InterpolationError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sample import error
    #[error("Input error: {0}")]
    Load(#[from] LoadError),

    /// Fitting or evaluation error
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Scoring error
    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Report rendering error
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

/// Result alias used across the CLI
pub type Result<T> = std::result::Result<T, CliError>;
