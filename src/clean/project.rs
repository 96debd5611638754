//! Cohort column projections.
//!
//! After partitioning, each cohort drops the questions the other cohort
//! answered. The column sets are fixed by the survey's schema; a missing
//! column means the caller handed in a table that never went through the
//! schema check, and surfaces as a hard error.

use crate::dataset::Dataset;
use crate::error::DatasetResult;

/// Question only job seekers answered; irrelevant to the working cohort.
pub const JOBSEEKER_ONLY_COLUMNS: [&str; 1] = ["planowany_kierunek"];

/// Work-specific questions; irrelevant to the job-seeking cohort.
pub const WORK_ONLY_COLUMNS: [&str; 6] = [
    "stanowisko",
    "branza",
    "forma_zatrudnienia",
    "wielkosc_firmy",
    "poziom_stanowiska",
    "narzedzia",
];

/// Drop the job-seeker-only column from the working cohort's dataset.
pub fn clean_working_dataset(dataset: &Dataset) -> DatasetResult<Dataset> {
    dataset.drop_columns(&JOBSEEKER_ONLY_COLUMNS)
}

/// Drop the six work-specific columns from the job-seeking cohort's dataset.
pub fn clean_jobseekers_dataset(dataset: &Dataset) -> DatasetResult<Dataset> {
    dataset.drop_columns(&WORK_ONLY_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use crate::error::DatasetError;

    fn full_schema() -> Dataset {
        let columns = [
            "pracuje_z_danymi",
            "zarobki",
            "doswiadczenie",
            "narzedzia",
            "stanowisko",
            "branza",
            "forma_zatrudnienia",
            "wielkosc_firmy",
            "poziom_stanowiska",
            "planowany_kierunek",
        ];
        Dataset::from_columns(
            columns
                .iter()
                .map(|name| (name.to_string(), vec![CellValue::from("x")])),
        )
        .unwrap()
    }

    #[test]
    fn test_working_projection() {
        let cleaned = clean_working_dataset(&full_schema()).unwrap();
        assert!(!cleaned.contains_column("planowany_kierunek"));
        // Everything else survives unchanged
        assert_eq!(cleaned.column_count(), 9);
        assert!(cleaned.contains_column("narzedzia"));
        assert!(cleaned.contains_column("zarobki"));
    }

    #[test]
    fn test_jobseekers_projection() {
        let cleaned = clean_jobseekers_dataset(&full_schema()).unwrap();
        for column in WORK_ONLY_COLUMNS {
            assert!(!cleaned.contains_column(column), "{} should be dropped", column);
        }
        assert_eq!(cleaned.column_count(), 4);
        assert!(cleaned.contains_column("zarobki"));
        assert!(cleaned.contains_column("doswiadczenie"));
        assert!(cleaned.contains_column("planowany_kierunek"));
    }

    #[test]
    fn test_missing_schema_column_is_error() {
        let ds = Dataset::from_columns(vec![("zarobki", vec![CellValue::from("5k")])]).unwrap();
        assert!(matches!(
            clean_jobseekers_dataset(&ds),
            Err(DatasetError::MissingColumn(_))
        ));
    }
}
