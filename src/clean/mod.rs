//! Cleaning and normalization units for the survey dataset.
//!
//! Four independent, stateless transformations plus the cohort projections:
//!
//! - [`partition`] - split respondents into the two cohorts
//! - [`salary`] - coerce free-text salary answers into base currency units
//! - [`experience`] - coerce tenure answers into year counts
//! - [`tools`] - normalize free-text tool lists into a canonical vocabulary
//! - [`project`] - drop the columns irrelevant to each cohort
//!
//! All column names and recognized literals are fixed by the survey's
//! contract; none of them are configurable.

pub mod experience;
pub mod partition;
pub mod project;
pub mod salary;
pub mod tools;

/// Salary column. Answers are thousands-denominated text like `"7.5k"`.
pub const SALARY_COLUMN: &str = "zarobki";

/// Experience column. Answers are tenure phrases like `"3 lata"`.
pub const EXPERIENCE_COLUMN: &str = "doswiadczenie";

/// Tools column. Answers are comma-separated free-text tool lists.
pub const TOOLS_COLUMN: &str = "narzedzia";
