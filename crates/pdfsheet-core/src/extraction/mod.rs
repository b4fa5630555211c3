pub mod pdftotext;
pub mod table;

use crate::error::PdfsheetError;
use std::path::Path;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// Page text with trailing whitespace trimmed from every line and
    /// surrounding blank lines removed. Empty when the page has no text.
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.lines.iter().map(|l| l.trim_end()).collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        match (first, last) {
            (Some(first), Some(last)) => lines[first..=last].join("\n"),
            _ => String::new(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from the PDF at `pdf_path`, one PageContent per page.
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<PageContent>, PdfsheetError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Fail with `DependencyMissing` when the backend cannot run at all.
    fn ensure_available(&self) -> Result<(), PdfsheetError> {
        Ok(())
    }
}
