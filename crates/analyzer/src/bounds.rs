use analytics::quartiles;
use core_types::FenceSide;
use serde::Serialize;

/// Tukey's fence multiplier. The only supported outlier rule.
pub const TUKEY_K: f64 = 1.5;

/// Quartiles of a sample together with the Tukey fences derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuartileBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
}

impl QuartileBounds {
    /// Derives the fences `Q1 - 1.5 * IQR` and `Q3 + 1.5 * IQR`.
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower_fence: q1 - TUKEY_K * iqr,
            upper_fence: q3 + TUKEY_K * iqr,
        }
    }

    /// Computes the bounds of pre-sorted data with the same percentile
    /// routine the statistics engine uses. `None` below two values.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        if sorted.len() < 2 {
            return None;
        }
        let q = quartiles(sorted)?;
        Some(Self::from_quartiles(q.q1, q.q3))
    }

    /// Which fence, if any, `value` lies strictly beyond.
    pub fn side_of(&self, value: f64) -> Option<FenceSide> {
        if value < self.lower_fence {
            Some(FenceSide::Low)
        } else if value > self.upper_fence {
            Some(FenceSide::High)
        } else {
            None
        }
    }

    /// True when `value` lies on or between the fences.
    pub fn contains(&self, value: f64) -> bool {
        self.side_of(value).is_none()
    }
}
