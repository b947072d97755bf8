use crate::bounds::QuartileBounds;
use crate::classification::OutlierClassification;
use core_types::{PointClass, Sample};
use serde::Serialize;

/// The outcome of outlier detection.
///
/// `NotApplicable` means the question could not be asked (fewer than two
/// values). It is not the same as a `Classified` result with no outliers,
/// which means the data was checked and found clean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutlierAnalysis {
    NotApplicable { count: usize },
    Classified(OutlierClassification),
}

impl OutlierAnalysis {
    pub fn is_applicable(&self) -> bool {
        matches!(self, OutlierAnalysis::Classified(_))
    }

    pub fn classification(&self) -> Option<&OutlierClassification> {
        match self {
            OutlierAnalysis::Classified(c) => Some(c),
            OutlierAnalysis::NotApplicable { .. } => None,
        }
    }

    pub fn bounds(&self) -> Option<&QuartileBounds> {
        self.classification().map(|c| &c.bounds)
    }

    /// `None` when detection was not applicable, never a misleading zero.
    pub fn outlier_count(&self) -> Option<usize> {
        self.classification().map(|c| c.outlier_count())
    }

    /// Every point is `Normal` when detection was not applicable.
    pub fn class_of(&self, index: usize) -> PointClass {
        self.classification()
            .map_or(PointClass::Normal, |c| c.class_of(index))
    }
}

/// Detects outliers with Tukey's fences.
#[derive(Debug, Default)]
pub struct OutlierDetector {}

impl OutlierDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the fences of `sample` and classifies every element.
    ///
    /// Degrades to `OutlierAnalysis::NotApplicable` below two values instead
    /// of failing.
    pub fn detect(&self, sample: &Sample) -> OutlierAnalysis {
        let sorted = sample.sorted();
        let Some(bounds) = QuartileBounds::from_sorted(&sorted) else {
            tracing::debug!(count = sample.len(), "Outlier detection not applicable.");
            return OutlierAnalysis::NotApplicable { count: sample.len() };
        };

        let classification = OutlierClassification::classify(sample, bounds);
        tracing::debug!(
            count = sample.len(),
            outliers = classification.outlier_count(),
            lower_fence = bounds.lower_fence,
            upper_fence = bounds.upper_fence,
            "Outlier detection complete."
        );
        OutlierAnalysis::Classified(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::FenceSide;

    fn detect(values: &[f64]) -> OutlierAnalysis {
        OutlierDetector::new().detect(&Sample::new(values.to_vec()).unwrap())
    }

    #[test]
    fn reference_dataset() {
        let analysis = detect(&[5.0, 7.0, 8.0, 9.0, 10.0, 10.0, 25.0, 30.0, 100.0]);
        let c = analysis.classification().expect("nine values are enough");

        assert_eq!(c.bounds.q1, 8.0);
        assert_eq!(c.bounds.q3, 25.0);
        assert_eq!(c.bounds.iqr, 17.0);
        assert_eq!(c.bounds.lower_fence, -17.5);
        assert_eq!(c.bounds.upper_fence, 50.5);

        assert_eq!(c.outlier_count(), 1);
        assert_eq!(c.outliers[0].index, 8);
        assert_eq!(c.outliers[0].value, 100.0);
        assert_eq!(c.outliers[0].side, FenceSide::High);
        for i in 0..6 {
            assert!(!c.is_outlier(i), "index {i} should be normal");
        }
        // 30 sits inside the upper fence.
        assert!(!c.is_outlier(7));
    }

    #[test]
    fn single_value_is_not_applicable() {
        let analysis = detect(&[42.0]);
        assert_eq!(analysis, OutlierAnalysis::NotApplicable { count: 1 });
        assert!(!analysis.is_applicable());
        assert_eq!(analysis.outlier_count(), None);
        assert!(analysis.bounds().is_none());
        assert_eq!(analysis.class_of(0), PointClass::Normal);
    }

    #[test]
    fn empty_sample_is_not_applicable() {
        assert_eq!(detect(&[]), OutlierAnalysis::NotApplicable { count: 0 });
    }

    #[test]
    fn two_values_have_fences_and_no_outliers() {
        let analysis = detect(&[1.0, 2.0]);
        let bounds = analysis.bounds().unwrap();
        assert!((bounds.lower_fence - 0.5).abs() < 1e-12);
        assert!((bounds.upper_fence - 2.5).abs() < 1e-12);
        assert_eq!(analysis.outlier_count(), Some(0));
    }

    #[test]
    fn duplicates_only_flag_the_literal_outlier_occurrence() {
        let analysis = detect(&[1.0, 1.0, 1.0, 1.0, 1.0, 100.0]);
        let c = analysis.classification().unwrap();
        assert_eq!(c.bounds.iqr, 0.0);
        assert_eq!(c.outliers.len(), 1);
        assert_eq!(c.outliers[0].index, 5);
        assert_eq!(
            c.labels(),
            vec![
                PointClass::Normal,
                PointClass::Normal,
                PointClass::Normal,
                PointClass::Normal,
                PointClass::Normal,
                PointClass::Outlier
            ]
        );
    }

    #[test]
    fn repeated_outlier_values_keep_input_order_and_indices() {
        let analysis = detect(&[-50.0, 1.0, 2.0, 3.0, 2.0, 1.0, 80.0, 2.0, -50.0]);
        let c = analysis.classification().unwrap();
        let flagged: Vec<(usize, f64)> = c.outliers.iter().map(|o| (o.index, o.value)).collect();
        assert_eq!(flagged, vec![(0, -50.0), (6, 80.0), (8, -50.0)]);
    }

    #[test]
    fn low_side_outliers_are_detected() {
        let analysis = detect(&[-100.0, 10.0, 11.0, 12.0, 13.0]);
        let c = analysis.classification().unwrap();
        assert_eq!(c.outliers.len(), 1);
        assert_eq!(c.outliers[0].side, FenceSide::Low);
    }

    #[test]
    fn extreme_magnitudes_are_not_flagged() {
        let analysis = detect(&[-1e308, 1e308]);
        let bounds = analysis.bounds().unwrap();
        assert!(bounds.q1 < 0.0 && bounds.q3 > 0.0);
        assert!(bounds.iqr.is_finite());
        assert_eq!(analysis.outlier_count(), Some(0));
    }

    #[test]
    fn detect_is_idempotent() {
        let s = Sample::new(vec![4.0, 4.0, 90.0, 5.0, 6.0, -30.0]).unwrap();
        let detector = OutlierDetector::new();
        assert_eq!(detector.detect(&s), detector.detect(&s));
    }
}
