use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use pdfsheet_core::model::ApiFormat;
use std::path::Path;

use crate::output;

pub fn run(pdf_file: &Path, mode: ApiFormat, output_format: &str) -> Result<(), PdfsheetError> {
    let extractor = PdftotextExtractor::new();
    let table = pdfsheet_core::extract_for_format(pdf_file, mode, &extractor)?;

    match output_format {
        "json" => output::json::print(&table)?,
        _ => print!("{}", output::table::format_table(&table)),
    }

    eprintln!(
        "{} row(s), {} column(s) extracted in {} mode",
        table.rows.len(),
        table.width(),
        mode
    );
    Ok(())
}
