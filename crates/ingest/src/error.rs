use core_types::CoreError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No data provided")]
    Empty,

    #[error("Value #{position} is not a valid number: '{token}'")]
    InvalidNumber { position: usize, token: String },

    #[error("Value #{position} is not a finite number: '{token}'")]
    NonFinite { position: usize, token: String },

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] PolarsError),

    #[error("The CSV file contains no rows")]
    EmptyFile,

    #[error("The CSV file has no numeric columns")]
    NoNumericColumns,

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
