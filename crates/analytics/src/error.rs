use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data for {metric}: requires at least {required} value(s), got {actual}")]
    InsufficientData {
        metric: &'static str,
        required: usize,
        actual: usize,
    },
}

impl AnalyticsError {
    pub(crate) fn insufficient(metric: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            metric,
            required,
            actual,
        }
    }
}
