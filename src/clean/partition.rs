//! Cohort partitioner.
//!
//! Splits the survey into respondents currently working with data and
//! respondents seeking such work, keyed on the `pracuje_z_danymi` column.
//! Rows answering neither `Tak` nor `Nie` (blank, "nie wiem", typos) are
//! silently dropped from both outputs; this is deliberate, the downstream
//! analysis only covers the two clear-cut cohorts.

use crate::dataset::{CellValue, Dataset};
use crate::error::DatasetResult;

/// Column holding the work-status answer.
pub const WORK_STATUS_COLUMN: &str = "pracuje_z_danymi";

/// Literal marking the working cohort.
pub const WORKS_WITH_DATA: &str = "Tak";

/// Literal marking the job-seeking cohort.
pub const SEEKS_WORK: &str = "Nie";

/// Split the dataset into the working and job-seeking cohorts.
///
/// Both outputs are independent copies; mutating one affects neither the
/// other nor the source. A missing work-status column is a precondition
/// violation and surfaces as [`DatasetError::MissingColumn`].
///
/// [`DatasetError::MissingColumn`]: crate::error::DatasetError::MissingColumn
pub fn split_dataset(dataset: &Dataset) -> DatasetResult<(Dataset, Dataset)> {
    let working = dataset.filter_by(WORK_STATUS_COLUMN, |cell| answer_is(cell, WORKS_WITH_DATA))?;
    let jobseekers = dataset.filter_by(WORK_STATUS_COLUMN, |cell| answer_is(cell, SEEKS_WORK))?;
    Ok((working, jobseekers))
}

fn answer_is(cell: &CellValue, literal: &str) -> bool {
    matches!(cell, CellValue::Text(s) if s == literal)
}
