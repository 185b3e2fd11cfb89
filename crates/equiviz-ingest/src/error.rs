//! Validation error taxonomy for CSV uploads
//!
//! Four user-facing failure classes, reported as structured results and
//! mapped to HTTP responses by the server layer:
//!
//! - [`CsvError::Format`]: rejected before parsing (extension, size, encoding)
//! - [`CsvError::MissingColumn`]: header does not carry a required column
//! - [`CsvError::Row`]: first invalid data row (all-or-nothing policy)
//! - [`CsvError::Empty`]: header-only file with zero data rows

use thiserror::Error;

/// Errors produced by CSV upload validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    /// File rejected before content parsing (wrong extension, oversize,
    /// or not decodable as UTF-8 text)
    #[error("Invalid upload: {0}")]
    Format(String),

    /// A required column is absent from the header row
    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A data row failed validation; `row` is the 1-based data-row number
    /// (the header row is not counted)
    #[error("Row {row}, column '{column}': {reason}")]
    Row {
        row: usize,
        column: &'static str,
        reason: RowErrorReason,
    },

    /// The file parsed cleanly but contains no data rows
    #[error("CSV file contains no data rows")]
    Empty,
}

/// Why a data row was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorReason {
    /// Field absent or blank
    MissingValue,
    /// Field present but not parseable as a finite decimal number
    NotNumeric,
}

impl std::fmt::Display for RowErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowErrorReason::MissingValue => write!(f, "value is missing"),
            RowErrorReason::NotNumeric => write!(f, "value is not a number"),
        }
    }
}

impl CsvError {
    /// Stable machine-readable code for API error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            CsvError::Format(_) => "FORMAT_ERROR",
            CsvError::MissingColumn { .. } => "SCHEMA_ERROR",
            CsvError::Row { .. } => "ROW_ERROR",
            CsvError::Empty => "EMPTY_DATASET",
        }
    }
}
