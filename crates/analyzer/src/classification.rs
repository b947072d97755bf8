use crate::bounds::QuartileBounds;
use core_types::{DataPoint, FenceSide, PointClass, Sample};
use serde::Serialize;

/// A value outside the fences, identified by its position in the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outlier {
    pub index: usize,
    pub value: f64,
    pub side: FenceSide,
}

/// The index-keyed partition of a sample into normal points and outliers.
///
/// Every element is judged on its own against the fences. Two equal values
/// at different indices are separate entries, so renderers can mark exactly
/// the occurrences that were flagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierClassification {
    pub bounds: QuartileBounds,
    /// Outliers in input order.
    pub outliers: Vec<Outlier>,
    pub sample_size: usize,
}

impl OutlierClassification {
    /// Classifies each element of `sample` against explicit `bounds`.
    pub fn classify(sample: &Sample, bounds: QuartileBounds) -> Self {
        let outliers = sample
            .points()
            .filter_map(|p| {
                bounds.side_of(p.value).map(|side| Outlier {
                    index: p.index,
                    value: p.value,
                    side,
                })
            })
            .collect();

        Self {
            bounds,
            outliers,
            sample_size: sample.len(),
        }
    }

    pub fn is_outlier(&self, index: usize) -> bool {
        // `outliers` is ordered by index.
        self.outliers
            .binary_search_by_key(&index, |o| o.index)
            .is_ok()
    }

    pub fn class_of(&self, index: usize) -> PointClass {
        if self.is_outlier(index) {
            PointClass::Outlier
        } else {
            PointClass::Normal
        }
    }

    /// One label per sample index.
    pub fn labels(&self) -> Vec<PointClass> {
        let mut labels = vec![PointClass::Normal; self.sample_size];
        for o in &self.outliers {
            labels[o.index] = PointClass::Outlier;
        }
        labels
    }

    /// The points of `sample` that were not flagged, in input order.
    ///
    /// `sample` must be the one this classification was built from.
    pub fn normal_points(&self, sample: &Sample) -> Vec<DataPoint> {
        sample.points().filter(|p| !self.is_outlier(p.index)).collect()
    }

    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    pub fn outlier_values(&self) -> Vec<f64> {
        self.outliers.iter().map(|o| o.value).collect()
    }

    /// Share of the sample flagged as outliers, in percent.
    pub fn outlier_percentage(&self) -> f64 {
        if self.sample_size == 0 {
            return 0.0;
        }
        self.outliers.len() as f64 / self.sample_size as f64 * 100.0
    }
}
