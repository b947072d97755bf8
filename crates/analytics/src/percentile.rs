use serde::Serialize;

/// First quartile, median and third quartile of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes the `p`-th percentile (`p` in `[0, 1]`) of **pre-sorted** data
/// by linear interpolation between order statistics.
///
/// For sorted data `x[0..n]`: `h = (n - 1) * p`, `j = floor(h)`, `g = h - j`,
/// and the result is `(1 - g) * x[j] + g * x[j + 1]`. This is the "linear"
/// method used by NumPy and R's type 7.
///
/// Returns `None` if `sorted` is empty or `p` is outside `[0, 1]`.
/// The caller must guarantee that `sorted` is in non-decreasing order.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        return Some(sorted[n - 1]);
    }

    let (lo, hi) = (sorted[j], sorted[j + 1]);
    let gap = hi - lo;
    // `lo + g * gap` is exact for tied neighbours and monotone in `g`. When the
    // gap itself overflows (neighbours near opposite ends of the f64 range) the
    // weighted form is used instead. The clamp keeps rounding from stepping
    // outside the bracketing order statistics.
    let value = if gap.is_finite() {
        lo + g * gap
    } else {
        (1.0 - g) * lo + g * hi
    };
    Some(value.clamp(lo, hi))
}

/// Computes Q1, the median and Q3 of pre-sorted data.
pub fn quartiles(sorted: &[f64]) -> Option<Quartiles> {
    Some(Quartiles {
        q1: percentile_sorted(sorted, 0.25)?,
        median: percentile_sorted(sorted, 0.5)?,
        q3: percentile_sorted(sorted, 0.75)?,
    })
}
