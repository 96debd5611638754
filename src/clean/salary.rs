//! Salary normalizer.
//!
//! Survey salary answers are thousands-denominated text (`"7.5k"`,
//! `"10 i więcej"`). Normalization strips the `k` marker and the open-range
//! qualifiers, parses the remainder and scales into base currency units.
//!
//! Already-numeric cells pass through *without* the ×1000 scaling. This is a
//! known inconsistency inherited from the original cleaning rules (a numeric
//! cell and the equivalent text cell diverge by a factor of 1000); it is
//! reproduced as specified and pinned by a test rather than fixed.

use crate::dataset::{CellValue, Dataset};
use crate::error::DatasetResult;

/// Normalize a single salary cell into base currency units.
///
/// Unparseable text resolves to [`CellValue::Missing`], never an error.
pub fn normalize_salary(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Number(n) => CellValue::Number(*n),
        CellValue::Text(raw) => {
            let stripped = raw
                .replace('k', "")
                .replace(" i więcej", "")
                .replace(" i mniej", "");
            match stripped.trim().parse::<f64>() {
                Ok(thousands) => CellValue::Number(thousands * 1000.0),
                Err(_) => CellValue::Missing,
            }
        }
        CellValue::List(_) | CellValue::Missing => CellValue::Missing,
    }
}

/// Map every cell of the named column through [`normalize_salary`],
/// returning a new dataset with the column replaced.
pub fn clean_salary_column(dataset: &Dataset, column: &str) -> DatasetResult<Dataset> {
    let cells = dataset
        .column(column)
        .map(|cells| cells.iter().map(normalize_salary).collect())
        .unwrap_or_default();
    dataset.with_column(column, cells)
}
