//! Spreadsheet output read back with calamine.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::model::Table;
use pdfsheet_core::writer::{ExcelWriter, WriterOptions, DEFAULT_SHEET};

fn read_sheet(path: &Path, name: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(name).unwrap();
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}

fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.sheet_names()
}

fn lab_table() -> Table {
    Table::new(
        vec!["Test".into(), "Result".into(), "Unit".into(), "Reference".into()],
        vec![
            vec!["Hemoglobin".into(), "13.5".into(), "g/dL".into(), "13.0 - 17.0".into()],
            vec!["Platelets".into(), "250000".into(), "/cumm".into(), "150000 - 410000".into()],
            vec!["ESR".into(), "12".into(), "mm/hr".into(), "0 - 15".into()],
        ],
    )
}

#[test]
fn styled_round_trip_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("report.xlsx");
    let table = lab_table();

    ExcelWriter::default()
        .write_table(&table, &path, DEFAULT_SHEET)
        .unwrap();

    let rows = read_sheet(&path, DEFAULT_SHEET);
    assert_eq!(rows[0], table.columns);
    assert_eq!(&rows[1..], table.rows.as_slice());
}

#[test]
fn plain_round_trip_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.xlsx");
    let table = lab_table();

    ExcelWriter::new(WriterOptions { auto_format: false })
        .write_table(&table, &path, "Results")
        .unwrap();

    assert_eq!(sheet_names(&path), vec!["Results"]);
    let rows = read_sheet(&path, "Results");
    assert_eq!(rows[0], table.columns);
    assert_eq!(&rows[1..], table.rows.as_slice());
}

#[test]
fn buffer_round_trip() {
    let table = Table::single_column("Extracted Text", vec!["Age: 34\nHeight: 170cm".into()]);
    let bytes = ExcelWriter::plain()
        .write_table_to_buffer(&table, DEFAULT_SHEET)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buffer.xlsx");
    std::fs::write(&path, bytes).unwrap();

    let rows = read_sheet(&path, DEFAULT_SHEET);
    assert_eq!(rows, vec![vec!["Extracted Text"], vec!["Age: 34\nHeight: 170cm"]]);
}

#[test]
fn multi_sheet_has_only_requested_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.xlsx");
    let long_name = "Complete Blood Count With Differential";

    let sheets = vec![
        ("Biochemistry".to_string(), lab_table()),
        (long_name.to_string(), Table::single_column("Data", vec!["No data found".into()])),
    ];
    ExcelWriter::default().write_sheets(&sheets, &path).unwrap();

    let names = sheet_names(&path);
    let truncated: String = long_name.chars().take(31).collect();
    assert_eq!(names, vec!["Biochemistry".to_string(), truncated.clone()]);
    assert_eq!(read_sheet(&path, &truncated), vec![vec!["Data"], vec!["No data found"]]);
}

#[test]
fn duplicate_truncated_names_fail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.xlsx");
    let prefix = "A".repeat(31);

    let sheets = vec![
        (format!("{prefix}-one"), lab_table()),
        (format!("{prefix}-two"), lab_table()),
    ];
    assert!(ExcelWriter::default().write_sheets(&sheets, &path).is_err());
}

#[test]
fn write_into_file_parent_is_returned_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"plain file").unwrap();
    let path = blocker.join("report.xlsx");

    let err = ExcelWriter::default()
        .write_table(&lab_table(), &path, DEFAULT_SHEET)
        .unwrap_err();
    assert!(matches!(err, PdfsheetError::Io(_) | PdfsheetError::Write(_)));
    assert!(!path.exists());

    let err = ExcelWriter::default()
        .write_sheets(&[("CBC".to_string(), lab_table())], &path)
        .unwrap_err();
    assert!(matches!(err, PdfsheetError::Io(_) | PdfsheetError::Write(_)));
}
