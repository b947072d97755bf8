use crate::error::CoreError;
use serde::Serialize;

/// A single value together with its position in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub index: usize,
    pub value: f64,
}

/// An ordered, one-dimensional sequence of finite numbers.
///
/// Insertion order is preserved: it does not matter for any statistic, but
/// index-based renderers (scatter plots, outlier listings) rely on it.
/// A `Sample` may be empty; the calculators reject it at computation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Builds a sample, rejecting `NaN` and infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self, CoreError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::NonFinite { index, value });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an ascending copy of the values. The sample itself is untouched.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        // All values are finite, so `total_cmp` agrees with numeric order
        // (apart from placing -0.0 before 0.0).
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// Iterates over the values paired with their original index.
    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| DataPoint { index, value })
    }

    pub fn get(&self, index: usize) -> Option<DataPoint> {
        self.values.get(index).map(|&value| DataPoint { index, value })
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = CoreError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
