use crate::error::ParseError;
use core_types::Sample;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// A headered CSV table from which one numeric column can be analyzed.
#[derive(Debug, Clone)]
pub struct CsvSource {
    frame: DataFrame,
}

impl CsvSource {
    /// Reads a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading CSV file.");
        let frame = CsvReader::from_path(path)?
            .has_header(true)
            .finish()
            .map_err(no_data_as_empty)?;
        Self::from_frame(frame)
    }

    /// Reads CSV content already held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ParseError> {
        let frame = CsvReader::new(Cursor::new(bytes))
            .has_header(true)
            .finish()
            .map_err(no_data_as_empty)?;
        Self::from_frame(frame)
    }

    fn from_frame(frame: DataFrame) -> Result<Self, ParseError> {
        if frame.height() == 0 {
            return Err(ParseError::EmptyFile);
        }
        Ok(Self { frame })
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    /// Names of the columns whose inferred type is numeric, in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.frame
            .get_columns()
            .iter()
            .filter(|s| s.dtype().is_numeric())
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Extracts one numeric column as a sample, dropping missing values.
    ///
    /// With `name = None` the first numeric column is used. Nulls and `NaN`
    /// cells count as missing; infinite values are rejected.
    pub fn column_sample(&self, name: Option<&str>) -> Result<Sample, ParseError> {
        let series = match name {
            Some(name) => self
                .frame
                .column(name)
                .map_err(|_| ParseError::ColumnNotFound(name.to_string()))?,
            None => self
                .frame
                .get_columns()
                .iter()
                .find(|s| s.dtype().is_numeric())
                .ok_or(ParseError::NoNumericColumns)?,
        };
        if !series.dtype().is_numeric() {
            return Err(ParseError::NotNumeric(series.name().to_string()));
        }

        let floats = series.cast(&DataType::Float64)?;
        let mut values = Vec::with_capacity(floats.len());
        for (row, cell) in floats.f64()?.into_iter().enumerate() {
            match cell {
                Some(v) if v.is_nan() => {}
                Some(v) if v.is_infinite() => {
                    return Err(ParseError::NonFinite {
                        position: row + 1,
                        token: v.to_string(),
                    });
                }
                Some(v) => values.push(v),
                None => {}
            }
        }

        let dropped = floats.len() - values.len();
        if dropped > 0 {
            tracing::warn!(column = series.name(), dropped, "Dropped missing values from column.");
        }
        if values.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Sample::new(values)?)
    }
}

/// A file with no rows is an input problem, not a reader failure.
fn no_data_as_empty(e: PolarsError) -> ParseError {
    match e {
        PolarsError::NoData(_) => ParseError::EmptyFile,
        e => ParseError::Csv(e),
    }
}
