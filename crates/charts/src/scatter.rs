use analyzer::OutlierAnalysis;
use core_types::{PointClass, Sample};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub index: usize,
    pub value: f64,
    pub class: PointClass,
}

/// Every value plotted against its input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub points: Vec<ScatterPoint>,
}

impl ScatterSeries {
    pub fn build(sample: &Sample, analysis: &OutlierAnalysis) -> Self {
        let points = sample
            .points()
            .map(|p| ScatterPoint {
                index: p.index,
                value: p.value,
                class: analysis.class_of(p.index),
            })
            .collect();
        Self { points }
    }

    pub fn outliers(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.points.iter().filter(|p| p.class.is_outlier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer::OutlierDetector;

    #[test]
    fn marks_points_by_index() {
        let sample = Sample::new(vec![1.0, 1.0, 1.0, 1.0, 1.0, 100.0]).unwrap();
        let analysis = OutlierDetector::new().detect(&sample);
        let series = ScatterSeries::build(&sample, &analysis);

        assert_eq!(series.points.len(), 6);
        let flagged: Vec<usize> = series.outliers().map(|p| p.index).collect();
        assert_eq!(flagged, vec![5]);
    }

    #[test]
    fn not_applicable_marks_everything_normal() {
        let sample = Sample::new(vec![7.0]).unwrap();
        let analysis = OutlierDetector::new().detect(&sample);
        let series = ScatterSeries::build(&sample, &analysis);
        assert_eq!(series.points[0].class, PointClass::Normal);
    }
}
