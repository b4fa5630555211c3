use pdfsheet_core::convert::Converter;
use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use pdfsheet_core::model::FormatType;
use std::path::Path;

pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    format: FormatType,
    pattern: &str,
) -> Result<(), PdfsheetError> {
    log::info!(
        "Starting batch conversion: {} -> {}",
        input_dir.display(),
        output_dir.display()
    );

    let extractor = PdftotextExtractor::new();
    Converter::new(&extractor, format).batch_convert(input_dir, output_dir, pattern)?;

    log::info!("Batch conversion completed");
    println!("\u{2713} Batch conversion completed");
    Ok(())
}
