use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("Statistics calculation failed: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}
