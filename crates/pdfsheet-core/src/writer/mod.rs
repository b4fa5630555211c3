pub mod style;

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::error::PdfsheetError;
use crate::model::Table;

/// Default sheet name for single-table workbooks.
pub const DEFAULT_SHEET: &str = "Data";

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    /// Apply header/cell styling and auto-adjust column widths.
    pub auto_format: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions { auto_format: true }
    }
}

/// Writes tables to xlsx workbooks on disk or in memory.
#[derive(Debug, Clone, Default)]
pub struct ExcelWriter {
    options: WriterOptions,
}

impl ExcelWriter {
    pub fn new(options: WriterOptions) -> Self {
        ExcelWriter { options }
    }

    /// Writer without styling, matching a plain data dump.
    pub fn plain() -> Self {
        Self::new(WriterOptions { auto_format: false })
    }

    /// Write one table to a single-sheet workbook at `path`.
    pub fn write_table(
        &self,
        table: &Table,
        path: &Path,
        sheet_name: &str,
    ) -> Result<(), PdfsheetError> {
        self.save(path, &[(sheet_name, table)])
            .inspect_err(|e| log::error!("Error writing Excel file: {e}"))?;
        log::info!("Excel file created: {}", path.display());
        Ok(())
    }

    /// Write one table to a single-sheet workbook held in memory.
    pub fn write_table_to_buffer(
        &self,
        table: &Table,
        sheet_name: &str,
    ) -> Result<Vec<u8>, PdfsheetError> {
        self.build(&[(sheet_name, table)])
            .and_then(|mut workbook| Ok(workbook.save_to_buffer()?))
            .inspect_err(|e| log::error!("Error writing Excel buffer: {e}"))
    }

    /// Write several tables, one sheet each, in the given order.
    ///
    /// Sheet names are truncated to 31 characters. Only the requested
    /// sheets end up in the workbook.
    pub fn write_sheets(
        &self,
        sheets: &[(String, Table)],
        path: &Path,
    ) -> Result<(), PdfsheetError> {
        let sheets: Vec<(&str, &Table)> = sheets
            .iter()
            .map(|(name, table)| (name.as_str(), table))
            .collect();
        self.save(path, &sheets)
            .inspect_err(|e| log::error!("Error writing multi-sheet Excel file: {e}"))?;
        log::info!("Multi-sheet Excel file created: {}", path.display());
        Ok(())
    }

    fn save(&self, path: &Path, sheets: &[(&str, &Table)]) -> Result<(), PdfsheetError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut workbook = self.build(sheets)?;
        workbook.save(path)?;
        Ok(())
    }

    fn build(&self, sheets: &[(&str, &Table)]) -> Result<Workbook, PdfsheetError> {
        if sheets.is_empty() {
            return Err(PdfsheetError::EmptyWorkbook);
        }

        let mut workbook = Workbook::new();
        for (name, table) in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(truncate_sheet_name(name))?;
            self.fill_sheet(worksheet, table)?;
        }
        Ok(workbook)
    }

    fn fill_sheet(&self, worksheet: &mut Worksheet, table: &Table) -> Result<(), XlsxError> {
        let header_format = style::header_format();
        let cell_format = style::cell_format();

        for (col, name) in table.columns.iter().enumerate() {
            let col = column_index(col)?;
            if self.options.auto_format {
                worksheet.write_string_with_format(0, col, name, &header_format)?;
            } else {
                worksheet.write_string(0, col, name)?;
            }
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = row_index(row_idx + 1)?;
            for (col, value) in row.iter().enumerate() {
                let col = column_index(col)?;
                if self.options.auto_format {
                    worksheet.write_string_with_format(row_num, col, value, &cell_format)?;
                } else {
                    worksheet.write_string(row_num, col, value)?;
                }
            }
        }

        if self.options.auto_format {
            for (col, width) in style::column_widths(table).into_iter().enumerate() {
                worksheet.set_column_width(column_index(col)?, width as f64)?;
            }
        }

        Ok(())
    }
}

/// Cut a sheet name down to Excel's 31 character limit.
pub fn truncate_sheet_name(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME_LEN).collect()
}

fn row_index(row: usize) -> Result<u32, XlsxError> {
    u32::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)
}

fn column_index(col: usize) -> Result<u16, XlsxError> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_sheet_name() {
        let long = "Complete Blood Count and Differential";
        assert_eq!(truncate_sheet_name(long).chars().count(), 31);
        assert_eq!(truncate_sheet_name("CBC"), "CBC");
    }

    #[test]
    fn test_empty_workbook_rejected() {
        let writer = ExcelWriter::default();
        let dir = tempfile::tempdir().unwrap();
        let err = writer.write_sheets(&[], &dir.path().join("x.xlsx")).unwrap_err();
        assert!(matches!(err, PdfsheetError::EmptyWorkbook));
        assert!(!dir.path().join("x.xlsx").exists());
    }

    #[test]
    fn test_buffer_build_error_is_returned() {
        let table = Table::single_column("Data", vec![]);
        let err = ExcelWriter::plain()
            .write_table_to_buffer(&table, "bad[name]")
            .unwrap_err();
        assert!(matches!(err, PdfsheetError::Write(_)));
    }

    #[test]
    fn test_buffer_is_xlsx_zip() {
        let table = Table::single_column("Extracted Text", vec!["Age: 34".into()]);
        let bytes = ExcelWriter::plain()
            .write_table_to_buffer(&table, DEFAULT_SHEET)
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
