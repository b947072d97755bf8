use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Value at index {index} is not a finite number: {value}")]
    NonFinite { index: usize, value: f64 },
}
