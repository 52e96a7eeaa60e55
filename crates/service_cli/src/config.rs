//! CLI configuration management.
//!
//! Handles loading of the curvefit configuration from a TOML file with
//! environment variable override support.

use std::path::Path;

use fit_core::math::interpolators::InterpolatorKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const ENV_LOG_LEVEL: &str = "CURVEFIT_LOG_LEVEL";

/// curvefit configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurvefitConfig {
    /// Default anchor x values
    #[serde(default = "default_anchors")]
    pub anchors: Vec<f64>,

    /// Models to fit, in report order
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Absolute deviation (percent) above which a point is flagged
    #[serde(default = "default_mark_limit")]
    pub mark_limit: f64,

    /// Field delimiter of input files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of steps of an automatic sampling grid
    #[serde(default = "default_sample_divisions")]
    pub sample_divisions: usize,
}

fn default_anchors() -> Vec<f64> {
    vec![40.0, 47.0, 70.0, 120.0, 300.0, 1000.0, 1400.0, 2000.0]
}

fn default_models() -> Vec<String> {
    InterpolatorKind::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}

fn default_mark_limit() -> f64 {
    0.01
}

fn default_delimiter() -> char {
    ';'
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_divisions() -> usize {
    400
}

impl Default for CurvefitConfig {
    fn default() -> Self {
        Self {
            anchors: default_anchors(),
            models: default_models(),
            mark_limit: default_mark_limit(),
            delimiter: default_delimiter(),
            log_level: default_log_level(),
            sample_divisions: default_sample_divisions(),
        }
    }
}

impl CurvefitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Log level after applying `CURVEFIT_LOG_LEVEL`
    ///
    /// Needed before the subscriber is installed; the remaining overrides
    /// log through it and are applied afterwards.
    pub fn effective_log_level(&self) -> String {
        std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| self.log_level.clone())
    }

    /// Apply environment variable overrides
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_env_override(mut self) -> Self {
        self.log_level = self.effective_log_level();

        if let Ok(mark_limit) = std::env::var("CURVEFIT_MARK_LIMIT") {
            match mark_limit.trim().parse() {
                Ok(parsed) => self.mark_limit = parsed,
                Err(e) => warn!(
                    "Ignoring CURVEFIT_MARK_LIMIT={:?}: {}; keeping {}",
                    mark_limit, e, self.mark_limit
                ),
            }
        }

        if let Ok(anchors) = std::env::var("CURVEFIT_ANCHORS") {
            match adapter_csv::parse_anchor_list(&anchors) {
                Ok(parsed) => self.anchors = parsed,
                Err(e) => warn!("Ignoring CURVEFIT_ANCHORS={:?}: {}", anchors, e),
            }
        }

        if let Ok(delimiter) = std::env::var("CURVEFIT_DELIMITER") {
            let mut chars = delimiter.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.delimiter = c,
                _ => warn!(
                    "Ignoring CURVEFIT_DELIMITER={:?}: expected a single character",
                    delimiter
                ),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.mark_limit.is_finite() || self.mark_limit < 0.0 {
            errors.push(format!(
                "mark_limit must be a non-negative number, got {}",
                self.mark_limit
            ));
        }

        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            errors.push(format!(
                "delimiter {:?} must be a single ASCII character other than a quote or line break",
                self.delimiter
            ));
        }

        if self.sample_divisions == 0 {
            errors.push("sample_divisions must be greater than 0".to_string());
        }

        if self.models.is_empty() {
            errors.push("models cannot be empty".to_string());
        }
        for model in &self.models {
            if let Err(e) = model.parse::<InterpolatorKind>() {
                errors.push(e.to_string());
            }
        }

        if self.anchors.iter().any(|a| !a.is_finite()) {
            errors.push("anchors must be finite numbers".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Configured models; entries that do not name a model are skipped
    pub fn model_kinds(&self) -> Vec<InterpolatorKind> {
        self.models.iter().filter_map(|m| m.parse().ok()).collect()
    }

    /// Delimiter as the byte the CSV reader expects
    ///
    /// Only meaningful after [`validate`](Self::validate) has accepted the
    /// delimiter as ASCII.
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b';')
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
