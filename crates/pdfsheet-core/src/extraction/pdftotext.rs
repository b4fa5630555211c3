use crate::error::PdfsheetError;
use crate::extraction::{PageContent, PdfExtractor};
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<PageContent>, PdfsheetError> {
        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(pdf_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdfsheetError::DependencyMissing
                } else {
                    PdfsheetError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(PdfsheetError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }

    fn ensure_available(&self) -> Result<(), PdfsheetError> {
        if Self::is_available() {
            Ok(())
        } else {
            Err(PdfsheetError::DependencyMissing)
        }
    }
}

/// Split pdftotext output into pages (form feed \x0c separates pages).
///
/// pdftotext terminates every page with a form feed, so the trailing
/// empty chunk is dropped.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("first page\nline 2\x0csecond page\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].lines, vec!["first page", "line 2"]);
        assert_eq!(pages[1].lines, vec!["second page"]);
    }

    #[test]
    fn test_split_pages_keeps_blank_middle_page() {
        let pages = split_pages("a\x0c\x0cc\x0c");
        assert_eq!(pages.len(), 3);
        assert!(pages[1].lines.is_empty());
        assert_eq!(pages[2].page_number, 3);
    }

    #[test]
    fn test_split_pages_without_form_feed() {
        let pages = split_pages("only\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines, vec!["only"]);
    }
}
