use pdfsheet_core::convert::Converter;
use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use pdfsheet_core::model::FormatType;
use std::path::Path;

pub fn run(input: &Path, output: &Path, format: FormatType) -> Result<(), PdfsheetError> {
    log::info!(
        "Starting conversion: {} -> {}",
        input.display(),
        output.display()
    );

    let extractor = PdftotextExtractor::new();
    Converter::new(&extractor, format).convert_pdf(input, output)?;

    log::info!(
        "Successfully converted {} to {}",
        input.display(),
        output.display()
    );
    println!("\u{2713} Conversion completed: {}", output.display());
    Ok(())
}
