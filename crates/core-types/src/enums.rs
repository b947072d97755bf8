use serde::{Deserialize, Serialize};

/// Which Tukey fence an outlier falls beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceSide {
    Low,
    High,
}

/// The classification of a single data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointClass {
    Normal,
    Outlier,
}

impl PointClass {
    pub fn is_outlier(&self) -> bool {
        matches!(self, PointClass::Outlier)
    }
}
