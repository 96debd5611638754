//! Error types for the survey cleaning pipeline.
//!
//! This module defines the error hierarchy used across the crate:
//!
//! - [`DatasetError`] - Structural errors on the tabular data model
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Cell-level parse failures are *not* errors: a cell that cannot be
//! interpreted under its column's rules resolves to
//! [`CellValue::Missing`](crate::dataset::CellValue::Missing) instead.
//! Errors here cover precondition violations only (absent columns,
//! misshapen tables, unreadable input files).
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Dataset Errors
// =============================================================================

/// Structural errors on the tabular data model.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A named column does not exist in the dataset.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column was inserted twice.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A column's cell count does not match the dataset's row count.
    #[error("Column '{column}' has {actual} cells, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A JSON record was not an object.
    #[error("Row {0} is not a JSON object")]
    NotAnObject(usize),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::clean_csv`].
/// It wraps all lower-level errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] crate::parser::CsvError),

    /// Dataset structure error.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No rows to clean.
    #[error("No rows to clean")]
    EmptyInput,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // DatasetError -> PipelineError
        let dataset_err = DatasetError::MissingColumn("zarobki".into());
        let pipeline_err: PipelineError = dataset_err.into();
        assert!(pipeline_err.to_string().contains("zarobki"));

        // CsvError -> PipelineError
        let csv_err = crate::parser::CsvError::new(1, "Empty CSV file");
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("Empty"));
    }

    #[test]
    fn test_length_mismatch_format() {
        let err = DatasetError::LengthMismatch {
            column: "doswiadczenie".into(),
            expected: 10,
            actual: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("doswiadczenie"));
        assert!(msg.contains("10"));
        assert!(msg.contains("7"));
    }
}
