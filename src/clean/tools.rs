//! Tool-name normalizer.
//!
//! The tools question is free text: respondents list whatever they use,
//! separated by commas, with every spelling of every tool name imaginable
//! ("pbi", "Power bi", "POWERBI"). Normalization funnels each token through:
//!
//! 1. garbage filtering (over-long, punctuated or single-character tokens
//!    are free-text noise, not tool names, and are dropped entirely)
//! 2. lowercasing + synonym resolution against a static map
//! 3. title-casing
//! 4. a special-case map that fixes the acronyms and brand casings generic
//!    title-casing cannot produce ("Sql" → "SQL", "Power Bi" → "Power BI")
//!
//! Both maps are immutable, built once per process and passed explicitly;
//! duplicates within one answer are retained (no deduplication here — if it
//! is ever wanted it belongs in a separate, named step).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::dataset::{CellValue, Dataset};
use crate::error::DatasetResult;

/// Tokens longer than this are treated as free-text garbage.
const MAX_TOKEN_CHARS: usize = 30;

/// Tokens shorter than this (after trimming) are treated as garbage.
const MIN_TOKEN_CHARS: usize = 2;

// =============================================================================
// Vocabulary
// =============================================================================

/// The static mapping tables driving tool-name normalization.
///
/// `synonyms` maps lowercase raw spellings to the lowercase canonical
/// spelling (applied before casing); `special_cases` maps title-cased
/// strings to their exact display form (applied after casing).
#[derive(Debug, Clone)]
pub struct ToolVocabulary {
    synonyms: HashMap<String, String>,
    special_cases: HashMap<String, String>,
}

impl ToolVocabulary {
    /// Build a vocabulary from explicit mapping tables.
    pub fn new(
        synonyms: HashMap<String, String>,
        special_cases: HashMap<String, String>,
    ) -> Self {
        Self { synonyms, special_cases }
    }

    /// Look up the canonical lowercase spelling for a lowercase token.
    pub fn synonym(&self, token: &str) -> Option<&str> {
        self.synonyms.get(token).map(String::as_str)
    }

    /// Look up the exact display form for a title-cased token.
    pub fn special_case(&self, token: &str) -> Option<&str> {
        self.special_cases.get(token).map(String::as_str)
    }

    /// All synonym pairs, for display.
    pub fn synonym_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All special-case pairs, for display.
    pub fn special_case_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.special_cases
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All canonical display forms produced by the special-case map.
    pub fn display_forms(&self) -> impl Iterator<Item = &str> {
        self.special_cases.values().map(String::as_str)
    }
}

impl Default for ToolVocabulary {
    fn default() -> Self {
        let synonyms = [
            ("pbi", "power bi"),
            ("powerbi", "power bi"),
            ("power-bi", "power bi"),
            ("ms excel", "excel"),
            ("msexcel", "excel"),
            ("arkusze google", "google sheets"),
            ("google sheet", "google sheets"),
            ("postgres", "postgresql"),
            ("ms sql", "sql server"),
            ("mssql", "sql server"),
            ("sklearn", "scikit-learn"),
            ("jupyter notebook", "jupyter"),
            ("pyspark", "spark"),
        ];
        let special_cases = [
            ("Sql", "SQL"),
            ("Sql Server", "SQL Server"),
            ("Power Bi", "Power BI"),
            ("Postgresql", "PostgreSQL"),
            ("Mysql", "MySQL"),
            ("Sas", "SAS"),
            ("Spss", "SPSS"),
            ("Dax", "DAX"),
            ("Vba", "VBA"),
            ("Matlab", "MATLAB"),
            ("Qlikview", "QlikView"),
            ("Javascript", "JavaScript"),
            ("Typescript", "TypeScript"),
            ("Bigquery", "BigQuery"),
            ("Scikit-Learn", "scikit-learn"),
            ("Dbt", "dbt"),
            ("Ssis", "SSIS"),
            ("Ssrs", "SSRS"),
            ("Github", "GitHub"),
            ("Gitlab", "GitLab"),
        ];

        Self::new(
            synonyms
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            special_cases
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Process-wide default vocabulary, built once and never mutated.
pub static DEFAULT_VOCABULARY: Lazy<ToolVocabulary> = Lazy::new(ToolVocabulary::default);

// =============================================================================
// Normalization
// =============================================================================

/// Normalize a single tool token to its canonical display form.
///
/// Returns `None` for garbage tokens: longer than 30 characters, containing
/// `!` or `?`, or shorter than 2 characters after trimming.
pub fn normalize_tool(token: &str, vocabulary: &ToolVocabulary) -> Option<String> {
    let trimmed = token.trim();
    let char_count = trimmed.chars().count();
    if char_count > MAX_TOKEN_CHARS || char_count < MIN_TOKEN_CHARS {
        return None;
    }
    if trimmed.contains('!') || trimmed.contains('?') {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    let resolved = vocabulary.synonym(&lowered).unwrap_or(&lowered);
    let cased = title_case(resolved);

    match vocabulary.special_case(&cased) {
        Some(display) => Some(display.to_string()),
        None => Some(cased),
    }
}

/// Normalize a tools cell into a list of canonical tool names.
///
/// Text cells are split on commas; garbage tokens are filtered out (not
/// kept as nulls), original order is preserved and duplicates retained.
/// Non-text cells yield an empty list: at this level "no tools listed" and
/// "malformed input" are indistinguishable.
pub fn normalize_tools_cell(cell: &CellValue, vocabulary: &ToolVocabulary) -> CellValue {
    match cell {
        CellValue::Text(raw) => CellValue::List(
            raw.split(',')
                .filter_map(|token| normalize_tool(token, vocabulary))
                .collect(),
        ),
        CellValue::Number(_) | CellValue::List(_) | CellValue::Missing => {
            CellValue::List(Vec::new())
        }
    }
}

/// Map every cell of the named column through [`normalize_tools_cell`],
/// returning a new dataset with the column replaced. The column's cell type
/// changes from scalar text to list-of-strings.
pub fn clean_tools_column(
    dataset: &Dataset,
    column: &str,
    vocabulary: &ToolVocabulary,
) -> DatasetResult<Dataset> {
    let cells = dataset
        .column(column)
        .map(|cells| {
            cells
                .iter()
                .map(|cell| normalize_tools_cell(cell, vocabulary))
                .collect()
        })
        .unwrap_or_default();
    dataset.with_column(column, cells)
}

/// Capitalize the first letter of every word, lowercasing the rest.
///
/// A word starts after any non-alphabetic character, so hyphenated and
/// digit-adjacent names case like "Scikit-Learn" and "Ggplot2".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> &'static ToolVocabulary {
        &DEFAULT_VOCABULARY
    }

    #[test]
    fn test_synonym_then_special_case() {
        assert_eq!(normalize_tool("pbi", vocab()), Some("Power BI".into()));
        assert_eq!(normalize_tool("POWERBI", vocab()), Some("Power BI".into()));
    }

    #[test]
    fn test_acronym_casing() {
        assert_eq!(normalize_tool("sql", vocab()), Some("SQL".into()));
        assert_eq!(normalize_tool("vba", vocab()), Some("VBA".into()));
        assert_eq!(normalize_tool("matlab", vocab()), Some("MATLAB".into()));
    }

    #[test]
    fn test_plain_title_casing() {
        assert_eq!(normalize_tool("excel", vocab()), Some("Excel".into()));
        assert_eq!(normalize_tool("  tableau ", vocab()), Some("Tableau".into()));
        assert_eq!(
            normalize_tool("google sheets", vocab()),
            Some("Google Sheets".into())
        );
    }

    #[test]
    fn test_garbage_rejected() {
        // punctuation
        assert_eq!(normalize_tool("??", vocab()), None);
        assert_eq!(normalize_tool("excel!", vocab()), None);
        // too short
        assert_eq!(normalize_tool("a", vocab()), None);
        assert_eq!(normalize_tool("  r  ", vocab()), None);
        // too long (31 chars)
        let long = "x".repeat(31);
        assert_eq!(normalize_tool(&long, vocab()), None);
        // exactly 30 chars is still accepted
        let edge = "x".repeat(30);
        assert!(normalize_tool(&edge, vocab()).is_some());
    }

    #[test]
    fn test_special_case_forms_are_fixed_points() {
        for display in vocab().display_forms() {
            assert_eq!(
                normalize_tool(display, vocab()).as_deref(),
                Some(display),
                "'{}' should re-normalize to itself",
                display
            );
        }
    }

    #[test]
    fn test_cell_splitting_and_filtering() {
        let cell = CellValue::from("sql, pbi , excel!, a, excel");
        let normalized = normalize_tools_cell(&cell, vocab());
        assert_eq!(
            normalized,
            CellValue::List(vec!["SQL".into(), "Power BI".into(), "Excel".into()])
        );
    }

    #[test]
    fn test_duplicates_retained() {
        let cell = CellValue::from("sql,SQL, sql");
        let normalized = normalize_tools_cell(&cell, vocab());
        assert_eq!(
            normalized,
            CellValue::List(vec!["SQL".into(), "SQL".into(), "SQL".into()])
        );
    }

    #[test]
    fn test_non_text_cells_yield_empty_list() {
        assert_eq!(
            normalize_tools_cell(&CellValue::Missing, vocab()),
            CellValue::List(vec![])
        );
        assert_eq!(
            normalize_tools_cell(&CellValue::Number(3.0), vocab()),
            CellValue::List(vec![])
        );
    }

    #[test]
    fn test_clean_column_changes_cell_type() {
        let ds = Dataset::from_columns(vec![(
            "narzedzia",
            vec![
                CellValue::from("sql, powerbi"),
                CellValue::Missing,
            ],
        )])
        .unwrap();

        let cleaned = clean_tools_column(&ds, "narzedzia", vocab()).unwrap();
        let column = cleaned.column("narzedzia").unwrap();

        assert_eq!(
            column[0],
            CellValue::List(vec!["SQL".into(), "Power BI".into()])
        );
        assert_eq!(column[1], CellValue::List(vec![]));
    }

    #[test]
    fn test_explicit_vocabulary_parameter() {
        let custom = ToolVocabulary::new(
            [("qgis desktop".to_string(), "qgis".to_string())].into(),
            [("Qgis".to_string(), "QGIS".to_string())].into(),
        );
        assert_eq!(normalize_tool("QGIS Desktop", &custom), Some("QGIS".into()));
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("ggplot2 extras"), "Ggplot2 Extras");
    }
}
