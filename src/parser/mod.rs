//! CSV to [`Dataset`] parser with encoding and delimiter auto-detection.
//!
//! Survey exports arrive in whatever encoding the form tool produced
//! (UTF-8, ISO-8859-2 exports are both seen in the wild), so the parser
//! sniffs the encoding with chardet and decodes with encoding_rs before
//! splitting rows. Empty fields become [`CellValue::Missing`] at this
//! boundary; everything else stays text for the normalizers to interpret.

use std::path::Path;

use crate::dataset::{CellValue, Dataset};

/// CSV parsing error with context.
#[derive(Debug, Clone)]
pub struct CsvError {
    pub line: usize,
    pub column: Option<String>,
    pub value: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => {
                write!(
                    f,
                    "Line {}, column '{}' (value '{}'): {}",
                    self.line, col, val, self.message
                )
            }
            (Some(col), None) => {
                write!(f, "Line {}, column '{}': {}", self.line, col, self.message)
            }
            _ => {
                write!(f, "Line {}: {}", self.line, self.message)
            }
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed table.
    pub dataset: Dataset,
    /// Detected or used encoding.
    pub encoding: String,
    /// Detected or used delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "iso-8859-2" | "latin-2" | "latin2" => "iso-8859-2".to_string(),
        "windows-1250" | "cp1250" => "windows-1250".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).to_string(),
        // encoding_rs has no plain latin-1 table; WINDOWS_1252 is its
        // superset and matches on every byte latin-1 assigns.
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()
        }
        "iso-8859-2" | "latin-2" | "latin2" => encoding_rs::ISO_8859_2.decode(bytes).0.to_string(),
        "windows-1250" | "cp1250" => encoding_rs::WINDOWS_1250.decode(bytes).0.to_string(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        // Fallback: UTF-8 with lossy conversion
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ';';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text into a [`Dataset`] with an explicit delimiter.
///
/// The first line supplies column names; empty lines are skipped; short
/// rows are padded with missing cells and extra fields are ignored.
///
/// # Example
/// ```ignore
/// use survey_clean::parse_csv;
///
/// let csv = "name;age\nAlicja;30\nBartek;";
/// let dataset = parse_csv(csv, ';').unwrap();
///
/// assert_eq!(dataset.row_count(), 2);
/// assert!(dataset.column("age").unwrap()[1].is_missing());
/// ```
pub fn parse_csv(content: &str, delimiter: char) -> Result<Dataset, CsvError> {
    let mut lines = content.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| CsvError::new(1, "Empty CSV file"))?;

    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::new(1, "No headers found"));
    }

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(delimiter).collect();

        for (i, column) in cells.iter_mut().enumerate() {
            let raw = values
                .get(i)
                .map(|s| s.trim().trim_matches('"'))
                .unwrap_or("");
            column.push(CellValue::from_raw(raw));
        }
    }

    let mut dataset = Dataset::new();
    for (name, column) in headers.into_iter().zip(cells) {
        if let Err(e) = dataset.insert_column(name.clone(), column) {
            return Err(CsvError::new(1, e.to_string()).with_column(name));
        }
    }

    Ok(dataset)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> Result<ParseResult, CsvError> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);
    let dataset = parse_csv(&content, delimiter)?;

    Ok(ParseResult {
        dataset,
        encoding,
        delimiter,
    })
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> Result<ParseResult, CsvError> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| CsvError::new(0, format!("Cannot read file: {}", e)))?;

    parse_bytes_auto(&bytes)
}

/// Parse a CSV file with an explicit delimiter.
pub fn parse_csv_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Dataset, CsvError> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| CsvError::new(0, format!("Cannot read file: {}", e)))?;
    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding);

    parse_csv(&content, delimiter)
}
