use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Largest number of decimals the table renderer will print.
pub const MAX_PRECISION: usize = 12;

/// Largest fixed histogram bin count accepted.
pub const MAX_BINS: usize = 1_000;

/// The root configuration structure for the entire application.
///
/// Every section is optional; missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub histogram: HistogramSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How results are presented.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Decimal places shown in tables.
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Histogram preparation for chart output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistogramSettings {
    /// A fixed number of bins. Sturges' rule is used when unset.
    pub bins: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to `statlens.log` in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

fn default_precision() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

impl Settings {
    /// Rejects values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "report.precision must be at most {MAX_PRECISION}, got {}",
                self.report.precision
            )));
        }
        if self.histogram.bins == Some(0) {
            return Err(ConfigError::ValidationError(
                "histogram.bins must be at least 1".to_string(),
            ));
        }
        if let Some(bins) = self.histogram.bins.filter(|&b| b > MAX_BINS) {
            return Err(ConfigError::ValidationError(format!(
                "histogram.bins must be at most {MAX_BINS}, got {bins}"
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
