use crate::model::Table;

pub const LAB_COLUMNS: [&str; 4] = ["Test", "Value", "Unit", "Reference"];

/// Column and cell of the placeholder table for documents without content.
pub const NO_DATA_COLUMN: &str = "Data";
pub const NO_DATA_VALUE: &str = "No data found";

/// Lines shorter than this (after trimming) are treated as noise.
const MIN_LINE_LEN: usize = 5;

/// Parse a text-only lab report into one row per meaningful line.
///
/// Each line becomes a `Test` entry; value, unit and reference stay empty
/// since there is no reliable way to split them out of free text.
pub fn parse_text_report(text: &str) -> Table {
    let rows: Vec<Vec<String>> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_LEN)
        .map(|line| vec![line.to_string(), String::new(), String::new(), String::new()])
        .collect();

    if rows.is_empty() {
        return no_data();
    }

    Table::new(LAB_COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
}

/// Single-row placeholder: `{"Data": "No data found"}`.
pub fn no_data() -> Table {
    Table::single_column(NO_DATA_COLUMN, vec![NO_DATA_VALUE.to_string()])
}
