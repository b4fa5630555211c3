use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::model::Table;

pub fn print(table: &Table) -> Result<(), PdfsheetError> {
    let json = serde_json::to_string_pretty(table)?;
    println!("{json}");
    Ok(())
}
