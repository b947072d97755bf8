use crate::error::AnalyticsError;
use serde::Serialize;

/// The most frequent value(s) of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Mode {
    /// Every distinct value occurs exactly once.
    NoMode,
    Single(f64),
    /// Several values share the highest frequency, in ascending order.
    Multiple(Vec<f64>),
}

impl Mode {
    /// The modal values, empty for `NoMode`.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Mode::NoMode => Vec::new(),
            Mode::Single(v) => vec![*v],
            Mode::Multiple(vs) => vs.clone(),
        }
    }

    pub fn is_multimodal(&self) -> bool {
        matches!(self, Mode::Multiple(_))
    }
}

/// A complete set of descriptive statistics for one sample.
///
/// This struct is the output of the `StatisticsEngine` and is handed as-is to
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    // I. Extent
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub range: f64,

    // II. Central Tendency
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,

    // III. Dispersion
    pub variance: Option<f64>, // None below two values; never reported as zero
    pub std_dev: Option<f64>,

    // IV. Quartiles
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl SummaryStatistics {
    /// Returns `(variance, std_dev)`, or `InsufficientData` for a single value.
    pub fn spread(&self) -> Result<(f64, f64), AnalyticsError> {
        match (self.variance, self.std_dev) {
            (Some(variance), Some(std_dev)) => Ok((variance, std_dev)),
            _ => Err(AnalyticsError::insufficient("variance", 2, self.count)),
        }
    }
}
