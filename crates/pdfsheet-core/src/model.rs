use serde::{Deserialize, Serialize};
use std::fmt;

/// Column name of the single-cell table produced by text mode.
pub const EXTRACTED_TEXT_COLUMN: &str = "Extracted Text";

/// A rectangular table of string cells with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Table { columns, rows }
    }

    /// Build a table from a raw cell grid, treating the first row as header.
    pub fn from_grid(mut grid: Vec<Vec<String>>) -> Self {
        if grid.is_empty() {
            return Table::default();
        }
        let columns = grid.remove(0);
        Table {
            columns,
            rows: grid,
        }
    }

    /// A one-column table with one row per value.
    pub fn single_column(name: &str, values: Vec<String>) -> Self {
        Table {
            columns: vec![name.to_string()],
            rows: values.into_iter().map(|v| vec![v]).collect(),
        }
    }

    /// A one-row table whose columns are the record's field names.
    pub fn from_record(record: &ParsedRecord) -> Self {
        let (columns, values) = record
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .unzip();
        Table {
            columns,
            rows: vec![values],
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at (row, column), or "" when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Flat field map produced by the text parsers.
///
/// Keeps first-insertion order; inserting an existing key replaces the
/// value without moving the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    fields: Vec<(String, String)>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record with the given field names, all values empty.
    pub fn with_empty_fields(names: &[&str]) -> Self {
        let mut record = Self::new();
        for name in names {
            record.insert(*name, "");
        }
        record
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parser selection for CLI conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Generic,
    Medical,
    Invoice,
}

impl FormatType {
    /// Unknown names fall back to `Generic`.
    pub fn from_str_loose(s: &str) -> FormatType {
        match s.trim().to_lowercase().as_str() {
            "medical" => FormatType::Medical,
            "invoice" => FormatType::Invoice,
            _ => FormatType::Generic,
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatType::Generic => write!(f, "generic"),
            FormatType::Medical => write!(f, "medical"),
            FormatType::Invoice => write!(f, "invoice"),
        }
    }
}

/// Extraction path requested through the HTTP API.
///
/// `Auto` and `Table` both run the lab report path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFormat {
    #[default]
    Auto,
    Table,
    Text,
}

impl ApiFormat {
    /// Unknown values fall back to `Auto`.
    pub fn from_str_loose(s: &str) -> ApiFormat {
        match s.trim() {
            "table" => ApiFormat::Table,
            "text" => ApiFormat::Text,
            _ => ApiFormat::Auto,
        }
    }
}

impl fmt::Display for ApiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFormat::Auto => write!(f, "auto"),
            ApiFormat::Table => write!(f, "table"),
            ApiFormat::Text => write!(f, "text"),
        }
    }
}
