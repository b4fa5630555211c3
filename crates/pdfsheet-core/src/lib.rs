pub mod convert;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod model;
pub mod parsing;
pub mod writer;

use std::path::Path;

use error::PdfsheetError;
use extraction::{PageContent, PdfExtractor};
use model::{ApiFormat, Table, EXTRACTED_TEXT_COLUMN};

/// Extract every table found in the PDF, in page order.
pub fn extract_tables(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<Table>, PdfsheetError> {
    let pages = load_pages(pdf_path, extractor)?;
    Ok(tables_from_pages(&pages))
}

/// Extract the text of all pages, joined by newlines. Pages without
/// text are skipped.
pub fn extract_text(pdf_path: &Path, extractor: &dyn PdfExtractor) -> Result<String, PdfsheetError> {
    let pages = load_pages(pdf_path, extractor)?;
    Ok(text_from_pages(&pages))
}

/// Best-effort extraction of a lab report as a single table.
///
/// Returns the first detected table only; tables after it (including
/// those on later pages) are discarded. Without any table, every
/// meaningful text line becomes a `Test` row. Unreadable PDFs yield the
/// "No data found" placeholder, but a missing backend is still an error.
pub fn extract_lab_report(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<Table, PdfsheetError> {
    let pages = match load_pages(pdf_path, extractor) {
        Ok(pages) => pages,
        Err(e) if e.is_degradable() => {
            log::warn!("Could not read {}: {e}", pdf_path.display());
            return Ok(parsing::lab::no_data());
        }
        Err(e) => return Err(e),
    };

    let tables = tables_from_pages(&pages);
    if tables.len() > 1 {
        log::warn!(
            "{}: {} tables found, keeping only the first",
            pdf_path.display(),
            tables.len()
        );
    }

    match tables.into_iter().next() {
        Some(table) => Ok(table),
        None => Ok(parsing::lab::parse_text_report(&text_from_pages(&pages))),
    }
}

/// Extract a table the way the HTTP API does for the requested format.
///
/// `Auto` and `Table` both take the lab report path; `Text` wraps the full
/// text in a one-cell "Extracted Text" table.
pub fn extract_for_format(
    pdf_path: &Path,
    format: ApiFormat,
    extractor: &dyn PdfExtractor,
) -> Result<Table, PdfsheetError> {
    match format {
        ApiFormat::Text => {
            let text = extract_text(pdf_path, extractor)?;
            Ok(Table::single_column(EXTRACTED_TEXT_COLUMN, vec![text]))
        }
        ApiFormat::Auto | ApiFormat::Table => extract_lab_report(pdf_path, extractor),
    }
}

fn load_pages(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<PageContent>, PdfsheetError> {
    // Checked before the file is touched
    extractor.ensure_available()?;

    let pages = extractor.extract_pages(pdf_path)?;
    log::debug!(
        "{}: {} page(s) via {}",
        pdf_path.display(),
        pages.len(),
        extractor.backend_name()
    );
    Ok(pages)
}

fn tables_from_pages(pages: &[PageContent]) -> Vec<Table> {
    pages.iter().flat_map(extraction::table::find_tables).collect()
}

fn text_from_pages(pages: &[PageContent]) -> String {
    pages
        .iter()
        .map(PageContent::text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
