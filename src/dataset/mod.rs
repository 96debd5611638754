//! Tabular data model for the survey cleaning pipeline.
//!
//! A [`Dataset`] is a table of named columns; rows are aligned across columns
//! by position and carry no identity beyond it. Cells are [`CellValue`]s, a
//! tagged union over the shapes a survey answer can take:
//!
//! - `Number` - an already-numeric value (passes through normalizers untouched)
//! - `Text` - a raw free-text answer awaiting normalization
//! - `List` - a normalized list of tool names (output of the tool normalizer)
//! - `Missing` - the sentinel for absent or unparseable values
//!
//! Every transformation returns a new dataset and leaves its input intact,
//! so callers can hold on to the raw table while working with cleaned copies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{DatasetError, DatasetResult};

// =============================================================================
// Cell Values
// =============================================================================

/// A single cell in a dataset.
///
/// Serializes untagged: `Number` as a JSON number, `Text` as a string,
/// `List` as an array of strings and `Missing` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Already-numeric value.
    Number(f64),
    /// Raw text value.
    Text(String),
    /// List of strings (normalized tool names).
    List(Vec<String>),
    /// Sentinel for "could not be parsed" or "not answered".
    Missing,
}

impl CellValue {
    /// Build a cell from a raw CSV field. Empty fields become `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// Build a cell from a JSON value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Missing),
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(items) => CellValue::List(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect(),
            ),
            Value::Bool(b) => CellValue::Text(b.to_string()),
            Value::Null | Value::Object(_) => CellValue::Missing,
        }
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::List(items) => {
                Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
            }
            CellValue::Missing => Value::Null,
        }
    }

    /// Get the numeric value if this cell is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value if this cell is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True if this cell is the missing sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// A table of named columns with rows aligned by position.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in insertion order.
    headers: Vec<String>,
    /// Cells per column, keyed by column name.
    columns: HashMap<String, Vec<CellValue>>,
    /// Number of rows.
    row_count: usize,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, cells)` pairs.
    ///
    /// All columns must have the same length; the first column fixes the
    /// row count.
    pub fn from_columns<I, S>(columns: I) -> DatasetResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<CellValue>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new();
        for (name, cells) in columns {
            dataset.insert_column(name, cells)?;
        }
        Ok(dataset)
    }

    /// Append a new column.
    ///
    /// The first column inserted fixes the dataset's row count; later
    /// columns must match it.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        cells: Vec<CellValue>,
    ) -> DatasetResult<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(DatasetError::DuplicateColumn(name));
        }
        if self.headers.is_empty() {
            self.row_count = cells.len();
        } else if cells.len() != self.row_count {
            return Err(DatasetError::LengthMismatch {
                column: name,
                expected: self.row_count,
                actual: cells.len(),
            });
        }
        self.headers.push(name.clone());
        self.columns.insert(name, cells);
        Ok(())
    }

    /// Column names in insertion order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cells of a column, if it exists.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    /// True if the dataset has a column with this name.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Return a new dataset with one column replaced.
    ///
    /// The column must already exist and the replacement must match the
    /// row count.
    pub fn with_column(&self, name: &str, cells: Vec<CellValue>) -> DatasetResult<Dataset> {
        if !self.columns.contains_key(name) {
            return Err(DatasetError::MissingColumn(name.to_string()));
        }
        if cells.len() != self.row_count {
            return Err(DatasetError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count,
                actual: cells.len(),
            });
        }
        let mut out = self.clone();
        out.columns.insert(name.to_string(), cells);
        Ok(out)
    }

    /// Return a new dataset without the named columns.
    ///
    /// Every named column must exist; a missing name is a precondition
    /// violation, not a silent no-op.
    pub fn drop_columns(&self, names: &[&str]) -> DatasetResult<Dataset> {
        for name in names {
            if !self.columns.contains_key(*name) {
                return Err(DatasetError::MissingColumn((*name).to_string()));
            }
        }
        let mut out = self.clone();
        for name in names {
            out.columns.remove(*name);
        }
        out.headers.retain(|h| out.columns.contains_key(h));
        Ok(out)
    }

    /// Return a new dataset keeping only the rows where `predicate` holds
    /// for the named column's cell.
    pub fn filter_by<F>(&self, column: &str, predicate: F) -> DatasetResult<Dataset>
    where
        F: Fn(&CellValue) -> bool,
    {
        let key_column = self
            .columns
            .get(column)
            .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;
        let keep: Vec<bool> = key_column.iter().map(&predicate).collect();
        let kept_rows = keep.iter().filter(|k| **k).count();

        let mut columns = HashMap::with_capacity(self.headers.len());
        for name in &self.headers {
            let cells: Vec<CellValue> = self.columns[name]
                .iter()
                .zip(&keep)
                .filter(|(_, k)| **k)
                .map(|(cell, _)| cell.clone())
                .collect();
            columns.insert(name.clone(), cells);
        }

        Ok(Dataset {
            headers: self.headers.clone(),
            columns,
            row_count: kept_rows,
        })
    }

    /// Export rows as JSON objects, one per row, keyed by column name.
    pub fn to_records(&self) -> Vec<Value> {
        (0..self.row_count)
            .map(|row| {
                let mut obj = Map::new();
                for name in &self.headers {
                    obj.insert(name.clone(), self.columns[name][row].to_json());
                }
                Value::Object(obj)
            })
            .collect()
    }

    /// Build a dataset from JSON row objects, the inverse of
    /// [`to_records`](Dataset::to_records).
    ///
    /// The first record fixes the column set; every later record must carry
    /// the same keys. A record that is not an object or lacks one of those
    /// keys is an error.
    pub fn from_records(records: &[Value]) -> DatasetResult<Dataset> {
        let Some(first) = records.first() else {
            return Ok(Dataset::new());
        };
        let first = first.as_object().ok_or(DatasetError::NotAnObject(0))?;
        let headers: Vec<String> = first.keys().cloned().collect();

        let mut cells: Vec<Vec<CellValue>> =
            vec![Vec::with_capacity(records.len()); headers.len()];

        for (row, record) in records.iter().enumerate() {
            let obj = record.as_object().ok_or(DatasetError::NotAnObject(row))?;
            for (column, name) in cells.iter_mut().zip(&headers) {
                let value = obj
                    .get(name)
                    .ok_or_else(|| DatasetError::MissingColumn(name.clone()))?;
                column.push(CellValue::from_json(value));
            }
        }

        let mut dataset = Dataset::new();
        for (name, column) in headers.into_iter().zip(cells) {
            dataset.insert_column(name, column)?;
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_columns(vec![
            (
                "name",
                vec![CellValue::from("Ala"), CellValue::from("Ola"), CellValue::Missing],
            ),
            (
                "score",
                vec![
                    CellValue::Number(1.0),
                    CellValue::Number(2.0),
                    CellValue::Number(3.0),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns() {
        let ds = sample();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.headers(), &["name", "score"]);
        assert_eq!(ds.column("score").unwrap()[1], CellValue::Number(2.0));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Dataset::from_columns(vec![
            ("a", vec![CellValue::Number(1.0)]),
            ("b", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
        ]);
        assert!(matches!(result, Err(DatasetError::LengthMismatch { .. })));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Dataset::from_columns(vec![
            ("a", vec![CellValue::Number(1.0)]),
            ("a", vec![CellValue::Number(2.0)]),
        ]);
        assert!(matches!(result, Err(DatasetError::DuplicateColumn(_))));
    }

    #[test]
    fn test_with_column_is_non_destructive() {
        let ds = sample();
        let replaced = ds
            .with_column("score", vec![CellValue::Missing, CellValue::Missing, CellValue::Missing])
            .unwrap();
        // Original untouched
        assert_eq!(ds.column("score").unwrap()[0], CellValue::Number(1.0));
        assert!(replaced.column("score").unwrap()[0].is_missing());
    }

    #[test]
    fn test_with_column_missing() {
        let ds = sample();
        let result = ds.with_column("nope", vec![]);
        assert!(matches!(result, Err(DatasetError::MissingColumn(_))));
    }

    #[test]
    fn test_drop_columns() {
        let ds = sample();
        let dropped = ds.drop_columns(&["name"]).unwrap();
        assert!(!dropped.contains_column("name"));
        assert!(dropped.contains_column("score"));
        assert_eq!(dropped.row_count(), 3);
    }

    #[test]
    fn test_drop_missing_column_is_error() {
        let ds = sample();
        assert!(matches!(
            ds.drop_columns(&["score", "nope"]),
            Err(DatasetError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_filter_by() {
        let ds = sample();
        let filtered = ds
            .filter_by("score", |cell| cell.as_f64().is_some_and(|n| n >= 2.0))
            .unwrap();
        assert_eq!(filtered.row_count(), 2);
        assert_eq!(filtered.column("name").unwrap()[0], CellValue::from("Ola"));
        // Source unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn test_to_records() {
        let ds = sample();
        let records = ds.to_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["name"], "Ala");
        assert_eq!(records[0]["score"], 1.0);
        assert_eq!(records[2]["name"], Value::Null);
    }

    #[test]
    fn test_records_roundtrip() {
        let ds = sample();
        let rebuilt = Dataset::from_records(&ds.to_records()).unwrap();

        assert_eq!(rebuilt.row_count(), ds.row_count());
        assert_eq!(rebuilt.headers(), ds.headers());
        assert_eq!(rebuilt.column("name").unwrap(), ds.column("name").unwrap());
        assert_eq!(rebuilt.column("score").unwrap(), ds.column("score").unwrap());
        // null round-trips back to the missing sentinel
        assert!(rebuilt.column("name").unwrap()[2].is_missing());
    }

    #[test]
    fn test_from_records_empty() {
        let ds = Dataset::from_records(&[]).unwrap();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 0);
    }

    #[test]
    fn test_from_records_ragged_row_is_error() {
        let records = vec![
            serde_json::json!({"a": 1.0, "b": "x"}),
            serde_json::json!({"a": 2.0}),
        ];
        assert!(matches!(
            Dataset::from_records(&records),
            Err(DatasetError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_from_records_non_object_is_error() {
        let records = vec![serde_json::json!({"a": 1.0}), serde_json::json!([1, 2])];
        assert!(matches!(
            Dataset::from_records(&records),
            Err(DatasetError::NotAnObject(1))
        ));
    }

    #[test]
    fn test_cell_json_roundtrip() {
        let cells = vec![
            CellValue::Number(7.5),
            CellValue::Text("sql".into()),
            CellValue::List(vec!["SQL".into(), "Excel".into()]),
            CellValue::Missing,
        ];
        for cell in cells {
            assert_eq!(CellValue::from_json(&cell.to_json()), cell);
        }
    }

    #[test]
    fn test_cell_serde_untagged() {
        let json = serde_json::to_string(&CellValue::Missing).unwrap();
        assert_eq!(json, "null");
        let json = serde_json::to_string(&CellValue::Number(5000.0)).unwrap();
        assert_eq!(json, "5000.0");
        let cell: CellValue = serde_json::from_str("\"excel\"").unwrap();
        assert_eq!(cell, CellValue::Text("excel".into()));
    }
}
