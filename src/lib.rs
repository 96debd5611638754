//! # survey-clean - Survey dataset cleaning and normalization
//!
//! Cleans the raw CSV export of a Polish data-industry survey: partitions
//! respondents into two cohorts and normalizes the free-text salary,
//! experience and tool-usage answers into comparable values.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Partition + │────▶│  Two cleaned │
//! │ (auto-enc)  │     │ (→ Dataset) │     │  Normalizers │     │   cohorts    │
//! └─────────────┘     └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use survey_clean::{clean_csv, CleanOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let result = clean_csv(Path::new("ankieta.csv"), &CleanOptions::default()).unwrap();
//!     println!("{} respondents work with data", result.outcome.working.row_count());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`dataset`] - Tabular data model (Dataset, CellValue)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`clean`] - Partitioner, normalizers and cohort projections
//! - [`pipeline`] - End-to-end cleaning pipeline
//! - [`logs`] - Pipeline progress logging

// Core modules
pub mod dataset;
pub mod error;

// Parsing
pub mod parser;

// Cleaning
pub mod clean;

// Pipeline
pub mod pipeline;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Data model
// =============================================================================

pub use dataset::{CellValue, Dataset};

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{DatasetError, DatasetResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv,
    parse_csv_file, parse_csv_file_auto, CsvError, ParseResult,
};

// =============================================================================
// Re-exports - Cleaning
// =============================================================================

pub use clean::experience::{clean_experience_column, normalize_experience};
pub use clean::partition::{split_dataset, SEEKS_WORK, WORKS_WITH_DATA, WORK_STATUS_COLUMN};
pub use clean::project::{
    clean_jobseekers_dataset, clean_working_dataset, JOBSEEKER_ONLY_COLUMNS, WORK_ONLY_COLUMNS,
};
pub use clean::salary::{clean_salary_column, normalize_salary};
pub use clean::tools::{
    clean_tools_column, normalize_tool, normalize_tools_cell, ToolVocabulary, DEFAULT_VOCABULARY,
};
pub use clean::{EXPERIENCE_COLUMN, SALARY_COLUMN, TOOLS_COLUMN};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{clean_bytes, clean_csv, clean_dataset, CleanOptions, CleanOutcome, CsvInfo, PipelineOutcome};
