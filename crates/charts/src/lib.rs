//! # Chart data preparation
//!
//! Derives the series a box plot, a histogram and an index scatter plot need
//! from a sample and its analysis. Nothing here draws anything; the output is
//! plain data for whichever renderer sits on top.
//!
//! Outlier highlighting is keyed on sample indices, so repeated values are
//! coloured per occurrence.

pub mod box_plot;
pub mod histogram;
pub mod scatter;

pub use box_plot::BoxPlotSeries;
pub use histogram::{Binning, HistogramBin, HistogramSeries, MAX_BINS};
pub use scatter::{ScatterPoint, ScatterSeries};

use analyzer::AnalysisReport;
use core_types::Sample;
use serde::Serialize;

/// Every chart series for one analyzed sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub box_plot: BoxPlotSeries,
    pub histogram: HistogramSeries,
    pub scatter: ScatterSeries,
}

impl ChartData {
    /// `report` must have been produced from `sample`.
    pub fn build(sample: &Sample, report: &AnalysisReport, binning: Binning) -> Self {
        Self {
            box_plot: BoxPlotSeries::build(sample, report),
            histogram: HistogramSeries::build(sample, &report.outliers, binning),
            scatter: ScatterSeries::build(sample, &report.outliers),
        }
    }
}
