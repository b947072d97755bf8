use crate::error::AnalyticsError;
use crate::percentile::quartiles;
use crate::report::{Mode, SummaryStatistics};
use core_types::Sample;

/// A stateless calculator for the descriptive statistics of a sample.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating summary statistics.
    ///
    /// # Arguments
    ///
    /// * `sample` - The validated input values, in input order.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SummaryStatistics`, or
    /// `AnalyticsError::InsufficientData` if the sample is empty. A single
    /// value still produces a report; only `variance` and `std_dev` are absent.
    pub fn compute(&self, sample: &Sample) -> Result<SummaryStatistics, AnalyticsError> {
        let count = sample.len();
        if count == 0 {
            return Err(AnalyticsError::insufficient("summary statistics", 1, 0));
        }
        tracing::debug!(count, "Computing summary statistics.");

        let sorted = sample.sorted();
        let min = sorted[0];
        let max = sorted[count - 1];
        let q = quartiles(&sorted)
            .ok_or_else(|| AnalyticsError::insufficient("quartiles", 1, count))?;

        let (variance, std_dev) = match sample_variance(sample.values()) {
            Ok(variance) => (Some(variance), Some(variance.sqrt())),
            Err(AnalyticsError::InsufficientData { .. }) => {
                tracing::debug!(count, "Too few values for sample variance; leaving spread unset.");
                (None, None)
            }
        };

        Ok(SummaryStatistics {
            count,
            min,
            max,
            range: max - min,
            mean: mean(sample.values()),
            median: q.median,
            mode: mode_of_sorted(&sorted),
            variance,
            std_dev,
            q1: q.q1,
            q3: q.q3,
            iqr: q.iqr(),
        })
    }
}

/// Sample variance with Bessel's correction (divides by `n - 1`).
///
/// Fails with `InsufficientData` for fewer than two values.
pub fn sample_variance(values: &[f64]) -> Result<f64, AnalyticsError> {
    let n = values.len();
    if n < 2 {
        return Err(AnalyticsError::insufficient("variance", 2, n));
    }
    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Square root of [`sample_variance`].
pub fn sample_std_dev(values: &[f64]) -> Result<f64, AnalyticsError> {
    sample_variance(values)
        .map(f64::sqrt)
        .map_err(|_| AnalyticsError::insufficient("standard deviation", 2, values.len()))
}

/// Arithmetic mean. Callers guarantee `values` is non-empty.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Finds the modal values by counting runs in sorted data.
fn mode_of_sorted(sorted: &[f64]) -> Mode {
    let mut best_freq = 0;
    let mut modes: Vec<f64> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let run = sorted[i..].iter().take_while(|&&v| v == value).count();
        if run > best_freq {
            best_freq = run;
            modes.clear();
            modes.push(value);
        } else if run == best_freq {
            modes.push(value);
        }
        i += run;
    }

    // All values distinct: every value would be a trivially tied mode.
    if best_freq <= 1 {
        return Mode::NoMode;
    }
    match modes.as_slice() {
        [single] => Mode::Single(*single),
        _ => Mode::Multiple(modes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> Sample {
        Sample::new(values.to_vec()).expect("finite test data")
    }

    fn compute(values: &[f64]) -> SummaryStatistics {
        StatisticsEngine::new()
            .compute(&sample(values))
            .expect("non-empty sample")
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = StatisticsEngine::new().compute(&Sample::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InsufficientData { required: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn reference_dataset() {
        let stats = compute(&[5.0, 7.0, 8.0, 9.0, 10.0, 10.0, 25.0, 30.0, 100.0]);
        assert_eq!(stats.count, 9);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.range, 95.0);
        assert!((stats.mean - 204.0 / 9.0).abs() < 1e-10);
        assert_eq!(stats.median, 10.0);
        assert_eq!(stats.mode, Mode::Single(10.0));
        assert_eq!(stats.q1, 8.0);
        assert_eq!(stats.q3, 25.0);
        assert_eq!(stats.iqr, 17.0);

        let mean = 204.0 / 9.0;
        let expected_var = [5.0, 7.0, 8.0, 9.0, 10.0, 10.0, 25.0, 30.0, 100.0]
            .iter()
            .map(|v: &f64| (v - mean).powi(2))
            .sum::<f64>()
            / 8.0;
        let (variance, std_dev) = stats.spread().unwrap();
        assert!((variance - expected_var).abs() < 1e-9);
        assert!((std_dev - expected_var.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn median_of_even_count_averages_the_middle() {
        let stats = compute(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn single_value_has_no_spread() {
        let stats = compute(&[42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.variance, None);
        assert_eq!(stats.std_dev, None);
        assert!(matches!(
            stats.spread(),
            Err(AnalyticsError::InsufficientData { actual: 1, .. })
        ));
        assert!(sample_variance(&[42.0]).is_err());
        assert!(sample_std_dev(&[42.0]).is_err());
    }

    #[test]
    fn two_values_use_bessel_correction() {
        let stats = compute(&[1.0, 2.0]);
        assert_eq!(stats.variance, Some(0.5));
        assert!((stats.std_dev.unwrap() - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn median_of_opposite_extremes_is_their_average() {
        let stats = compute(&[-1e308, 1e308]);
        assert_eq!(stats.median, 0.0);
        assert!(stats.q1 < 0.0 && stats.q3 > 0.0);
        assert_eq!(stats.iqr, stats.q3 - stats.q1);
    }

    #[test]
    fn constant_sample_has_zero_variance() {
        assert_eq!(sample_variance(&[3.0, 3.0, 3.0]), Ok(0.0));
    }

    #[test]
    fn mode_policy() {
        assert_eq!(compute(&[1.0, 2.0, 3.0, 4.0]).mode, Mode::NoMode);
        assert_eq!(compute(&[1.0, 1.0, 2.0, 3.0]).mode, Mode::Single(1.0));
        assert_eq!(
            compute(&[1.0, 1.0, 2.0, 2.0, 3.0]).mode,
            Mode::Multiple(vec![1.0, 2.0])
        );
    }

    #[test]
    fn multimodal_values_are_ascending_regardless_of_input_order() {
        let mode = compute(&[9.0, 2.0, 9.0, 2.0, 5.0, 5.0, 1.0]).mode;
        assert_eq!(mode, Mode::Multiple(vec![2.0, 5.0, 9.0]));
        assert!(mode.is_multimodal());
        assert_eq!(mode.values(), vec![2.0, 5.0, 9.0]);
    }

    #[test]
    fn all_equal_values_form_a_single_mode() {
        assert_eq!(compute(&[7.0, 7.0, 7.0]).mode, Mode::Single(7.0));
    }

    #[test]
    fn compute_is_idempotent() {
        let s = sample(&[3.5, -1.0, 8.25, 3.5, 0.0]);
        let engine = StatisticsEngine::new();
        assert_eq!(engine.compute(&s).unwrap(), engine.compute(&s).unwrap());
    }
}
