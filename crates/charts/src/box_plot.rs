use analyzer::{AnalysisReport, Outlier};
use core_types::Sample;
use serde::Serialize;

/// The five-number summary of a box plot plus the points drawn individually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotSeries {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value that is not an outlier.
    pub lower_whisker: f64,
    /// Largest value that is not an outlier.
    pub upper_whisker: f64,
    pub outliers: Vec<Outlier>,
}

impl BoxPlotSeries {
    pub fn build(sample: &Sample, report: &AnalysisReport) -> Self {
        let summary = &report.summary;
        let (outliers, whiskers) = match report.outliers.classification() {
            Some(c) => {
                let whiskers = c
                    .normal_points(sample)
                    .iter()
                    .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                        None => Some((p.value, p.value)),
                        Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
                    });
                (c.outliers.clone(), whiskers)
            }
            None => (Vec::new(), None),
        };
        let (lower_whisker, upper_whisker) = whiskers.unwrap_or((summary.min, summary.max));

        Self {
            q1: summary.q1,
            median: summary.median,
            q3: summary.q3,
            lower_whisker,
            upper_whisker,
            outliers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer::analyze;

    fn build(values: &[f64]) -> BoxPlotSeries {
        let sample = Sample::new(values.to_vec()).unwrap();
        let report = analyze(&sample).unwrap();
        BoxPlotSeries::build(&sample, &report)
    }

    #[test]
    fn whiskers_stop_at_the_last_normal_value() {
        let series = build(&[5.0, 7.0, 8.0, 9.0, 10.0, 10.0, 25.0, 30.0, 100.0]);
        assert_eq!(series.q1, 8.0);
        assert_eq!(series.median, 10.0);
        assert_eq!(series.q3, 25.0);
        assert_eq!(series.lower_whisker, 5.0);
        assert_eq!(series.upper_whisker, 30.0);
        assert_eq!(series.outliers.len(), 1);
        assert_eq!(series.outliers[0].index, 8);
    }

    #[test]
    fn single_value_collapses_the_box() {
        let series = build(&[42.0]);
        assert_eq!(series.lower_whisker, 42.0);
        assert_eq!(series.upper_whisker, 42.0);
        assert!(series.outliers.is_empty());
    }
}
