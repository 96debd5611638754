//! Experience normalizer.
//!
//! Tenure answers mix plain counts (`"3 lata"`, `"5 lat"`) with the survey's
//! two open-ended range phrases: `"rok i mniej"` at the bottom and
//! `"... i więcej"` at the top. The bottom range maps to 1.0 and every
//! open-ended upper range collapses to the constant 6.0 regardless of the
//! number printed in the answer. That collapse loses information; it is kept
//! as specified by the original cleaning rules and pinned by a test.
//!
//! The `i więcej` check must run before numeric parsing: both patterns can
//! contain digits.

use crate::dataset::{CellValue, Dataset};
use crate::error::DatasetResult;

/// Year count for the "rok i mniej" bottom range.
const ONE_YEAR_OR_LESS: f64 = 1.0;

/// Year count every "i więcej" upper range collapses to.
const OPEN_RANGE_YEARS: f64 = 6.0;

/// Normalize a single experience cell into a year count.
pub fn normalize_experience(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Number(n) => CellValue::Number(*n),
        CellValue::Text(raw) => {
            if raw.contains("rok i mniej") {
                return CellValue::Number(ONE_YEAR_OR_LESS);
            }
            // Covers "6 lat i więcej" and a bare "i więcej" alike.
            if raw.contains("lat i więcej") || raw.contains("i więcej") {
                return CellValue::Number(OPEN_RANGE_YEARS);
            }
            let stripped = raw.replace(" lata", "").replace(" lat", "");
            match stripped.trim().parse::<f64>() {
                Ok(years) => CellValue::Number(years),
                Err(_) => CellValue::Missing,
            }
        }
        CellValue::List(_) | CellValue::Missing => CellValue::Missing,
    }
}

/// Map every cell of the named column through [`normalize_experience`],
/// returning a new dataset with the column replaced.
pub fn clean_experience_column(dataset: &Dataset, column: &str) -> DatasetResult<Dataset> {
    let cells = dataset
        .column(column)
        .map(|cells| cells.iter().map(normalize_experience).collect())
        .unwrap_or_default();
    dataset.with_column(column, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_range() {
        assert_eq!(
            normalize_experience(&CellValue::from("rok i mniej")),
            CellValue::Number(1.0)
        );
    }

    // "8 lat i więcej" also collapses to 6.0: the open upper range maps to a
    // constant no matter which number the answer printed.
    #[test]
    fn test_open_range_collapses_to_constant() {
        assert_eq!(
            normalize_experience(&CellValue::from("6 lat i więcej")),
            CellValue::Number(6.0)
        );
        assert_eq!(
            normalize_experience(&CellValue::from("8 lat i więcej")),
            CellValue::Number(6.0)
        );
        assert_eq!(
            normalize_experience(&CellValue::from("i więcej")),
            CellValue::Number(6.0)
        );
    }

    #[test]
    fn test_plain_year_counts() {
        assert_eq!(
            normalize_experience(&CellValue::from("3 lata")),
            CellValue::Number(3.0)
        );
        assert_eq!(
            normalize_experience(&CellValue::from("5 lat")),
            CellValue::Number(5.0)
        );
        assert_eq!(
            normalize_experience(&CellValue::from("2")),
            CellValue::Number(2.0)
        );
    }

    #[test]
    fn test_numeric_passthrough() {
        assert_eq!(
            normalize_experience(&CellValue::Number(4.5)),
            CellValue::Number(4.5)
        );
    }

    #[test]
    fn test_garbage_is_missing() {
        assert!(normalize_experience(&CellValue::from("pół roku")).is_missing());
        assert!(normalize_experience(&CellValue::Missing).is_missing());
    }

    #[test]
    fn test_clean_column() {
        let ds = Dataset::from_columns(vec![(
            "doswiadczenie",
            vec![
                CellValue::from("rok i mniej"),
                CellValue::from("3 lata"),
                CellValue::from("10 lat i więcej"),
                CellValue::from("brak"),
            ],
        )])
        .unwrap();

        let cleaned = clean_experience_column(&ds, "doswiadczenie").unwrap();
        let column = cleaned.column("doswiadczenie").unwrap();

        assert_eq!(column[0], CellValue::Number(1.0));
        assert_eq!(column[1], CellValue::Number(3.0));
        assert_eq!(column[2], CellValue::Number(6.0));
        assert!(column[3].is_missing());
    }
}
