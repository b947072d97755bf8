use analyzer::OutlierAnalysis;
use core_types::Sample;
use serde::Serialize;

/// Upper bound on the number of bins, whatever `Binning` asks for.
pub const MAX_BINS: usize = 1_000;

/// How many equal-width bins to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binning {
    /// Sturges' rule: `ceil(log2 n) + 1`.
    #[default]
    Sturges,
    Fixed(usize),
}

impl Binning {
    fn bin_count(&self, n: usize) -> usize {
        match *self {
            Binning::Sturges => (n as f64).log2().ceil() as usize + 1,
            Binning::Fixed(k) => k,
        }
        .clamp(1, MAX_BINS)
    }
}

/// One bar of the histogram, split by classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub normal_count: usize,
    pub outlier_count: usize,
}

impl HistogramBin {
    pub fn total(&self) -> usize {
        self.normal_count + self.outlier_count
    }
}

/// Equal-width bins spanning `[min, max]`; the last bin is closed on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
}

impl HistogramSeries {
    pub fn build(sample: &Sample, analysis: &OutlierAnalysis, binning: Binning) -> Self {
        let values = sample.values();
        let (Some(min), Some(max)) = (
            values.iter().copied().reduce(f64::min),
            values.iter().copied().reduce(f64::max),
        ) else {
            return Self {
                bin_width: 0.0,
                bins: Vec::new(),
            };
        };

        let range = max - min;
        // All values equal: a single bar holds everything.
        let n_bins = if range > 0.0 {
            binning.bin_count(values.len())
        } else {
            1
        };
        let bin_width = range / n_bins as f64;

        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin {
                start: min + i as f64 * bin_width,
                end: if i + 1 == n_bins {
                    max
                } else {
                    min + (i + 1) as f64 * bin_width
                },
                normal_count: 0,
                outlier_count: 0,
            })
            .collect();

        for p in sample.points() {
            let slot = if bin_width > 0.0 {
                (((p.value - min) / bin_width).floor() as usize).min(n_bins - 1)
            } else {
                0
            };
            if analysis.class_of(p.index).is_outlier() {
                bins[slot].outlier_count += 1;
            } else {
                bins[slot].normal_count += 1;
            }
        }

        tracing::debug!(bins = n_bins, bin_width, "Built histogram series.");
        Self { bin_width, bins }
    }
}
