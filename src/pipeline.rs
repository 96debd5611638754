//! High-level pipeline API for cleaning a raw survey export.
//!
//! Combines all steps: parsing, cohort partitioning, column projection and
//! per-column normalization.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_clean::{clean_csv, CleanOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = clean_csv(Path::new("ankieta.csv"), &CleanOptions::default())?;
//!     println!(
//!         "{} working, {} seeking",
//!         result.outcome.working.row_count(),
//!         result.outcome.jobseekers.row_count()
//!     );
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::path::Path;

use crate::clean::experience::clean_experience_column;
use crate::clean::partition::split_dataset;
use crate::clean::project::{clean_jobseekers_dataset, clean_working_dataset};
use crate::clean::salary::clean_salary_column;
use crate::clean::tools::{clean_tools_column, DEFAULT_VOCABULARY};
use crate::clean::{EXPERIENCE_COLUMN, SALARY_COLUMN, TOOLS_COLUMN};
use crate::dataset::Dataset;
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::parser::{parse_bytes_auto, parse_csv, ParseResult};

/// Options for the cleaning pipeline.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// CSV delimiter; auto-detected when `None`.
    pub delimiter: Option<char>,
}

/// CSV file information.
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Result of cleaning an already-parsed dataset.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// The cleaned working cohort.
    pub working: Dataset,
    /// The cleaned job-seeking cohort.
    pub jobseekers: Dataset,
    /// Rows that answered neither cohort literal and were dropped.
    pub dropped_rows: usize,
}

/// Result of the full CSV cleaning pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The cleaned cohorts.
    pub outcome: CleanOutcome,
    /// CSV parsing metadata.
    pub csv_info: CsvInfo,
}

/// Clean an already-parsed survey dataset.
///
/// Partitions into cohorts, applies each cohort's projection, then
/// normalizes salary and experience in both cohorts and tools in the
/// working cohort. The input dataset is left untouched.
pub fn clean_dataset(dataset: &Dataset) -> PipelineResult<CleanOutcome> {
    if dataset.row_count() == 0 {
        return Err(PipelineError::EmptyInput);
    }

    log_info("Splitting respondents into cohorts...");
    let (working, jobseekers) = split_dataset(dataset)?;
    let dropped_rows = dataset.row_count() - working.row_count() - jobseekers.row_count();
    log_success(format!(
        "{} working with data, {} seeking work",
        working.row_count(),
        jobseekers.row_count()
    ));
    if dropped_rows > 0 {
        log_warning(format!(
            "{} rows matched neither cohort and were dropped",
            dropped_rows
        ));
    }

    log_info("Cleaning working cohort...");
    let working = clean_working_dataset(&working)?;
    let working = clean_salary_column(&working, SALARY_COLUMN)?;
    let working = clean_experience_column(&working, EXPERIENCE_COLUMN)?;
    let working = clean_tools_column(&working, TOOLS_COLUMN, &DEFAULT_VOCABULARY)?;

    log_info("Cleaning job-seeking cohort...");
    let jobseekers = clean_jobseekers_dataset(&jobseekers)?;
    let jobseekers = clean_salary_column(&jobseekers, SALARY_COLUMN)?;
    let jobseekers = clean_experience_column(&jobseekers, EXPERIENCE_COLUMN)?;

    log_success("Cleaning complete");

    Ok(CleanOutcome {
        working,
        jobseekers,
        dropped_rows,
    })
}

/// Clean raw CSV bytes.
pub fn clean_bytes(bytes: &[u8], options: &CleanOptions) -> PipelineResult<PipelineOutcome> {
    log_info("Reading CSV...");
    let parse_result = match options.delimiter {
        Some(delimiter) => {
            let encoding = crate::parser::detect_encoding(bytes);
            let content = crate::parser::decode_content(bytes, &encoding);
            ParseResult {
                dataset: parse_csv(&content, delimiter)?,
                encoding,
                delimiter,
            }
        }
        None => parse_bytes_auto(bytes)?,
    };

    log_success(format!(
        "Detected encoding: {}, delimiter: '{}'",
        parse_result.encoding,
        format_delimiter(parse_result.delimiter)
    ));
    log_success(format!("Read {} rows", parse_result.dataset.row_count()));

    let csv_info = CsvInfo {
        encoding: parse_result.encoding,
        delimiter: parse_result.delimiter,
        headers: parse_result.dataset.headers().to_vec(),
        row_count: parse_result.dataset.row_count(),
    };

    let outcome = clean_dataset(&parse_result.dataset)?;

    Ok(PipelineOutcome { outcome, csv_info })
}

/// Clean a CSV file.
///
/// This is the main entry point for the pipeline. It:
/// 1. Reads and parses the CSV (encoding/delimiter auto-detected)
/// 2. Partitions respondents into the two cohorts
/// 3. Drops each cohort's irrelevant columns
/// 4. Normalizes salary, experience and tool columns
pub fn clean_csv(path: &Path, options: &CleanOptions) -> PipelineResult<PipelineOutcome> {
    let bytes = std::fs::read(path)?;
    clean_bytes(&bytes, options)
}

/// Format delimiter for display.
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
