//! # Input ingestion
//!
//! Turns raw user input into a validated [`Sample`](core_types::Sample):
//! free text of comma-separated numbers, or one numeric column of a CSV file.
//! Every malformed input is rejected here with a [`ParseError`], so the
//! calculators downstream only ever see finite numbers.

pub mod csv;
pub mod error;
pub mod text;

pub use csv::CsvSource;
pub use error::ParseError;
pub use text::parse_values;
