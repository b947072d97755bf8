use crate::error::AnalyzerError;
use analytics::{StatisticsEngine, SummaryStatistics};
use core_types::Sample;
use serde::Serialize;

pub mod bounds;
pub mod classification;
pub mod detector;
pub mod error;

pub use bounds::{QuartileBounds, TUKEY_K};
pub use classification::{Outlier, OutlierClassification};
pub use detector::{OutlierAnalysis, OutlierDetector};

/// The combined result handed to the presentation layer: the summary
/// statistics and the outlier analysis of one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: SummaryStatistics,
    pub outliers: OutlierAnalysis,
}

/// Runs outlier detection and the statistics calculator over one sample.
///
/// Both stages read the same immutable sample; neither depends on the other's
/// output. An empty sample fails with `InsufficientData`.
pub fn analyze(sample: &Sample) -> Result<AnalysisReport, AnalyzerError> {
    // 1. Detect
    let outliers = OutlierDetector::new().detect(sample);

    // 2. Summarize
    let summary = StatisticsEngine::new().compute(sample)?;

    tracing::info!(
        count = summary.count,
        outliers = ?outliers.outlier_count(),
        "Analysis complete."
    );
    Ok(AnalysisReport { summary, outliers })
}
