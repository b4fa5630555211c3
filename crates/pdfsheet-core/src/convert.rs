use std::path::{Path, PathBuf};

use crate::error::PdfsheetError;
use crate::extraction::PdfExtractor;
use crate::model::{FormatType, Table};
use crate::parsing::parse_record;
use crate::writer::{ExcelWriter, DEFAULT_SHEET};

/// Default glob for batch conversions.
pub const DEFAULT_PATTERN: &str = "*.pdf";

/// Outcome of a batch run. Failures are logged and recorded, never raised.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub discovered: usize,
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Text-to-record conversion of PDFs into styled single-row workbooks.
pub struct Converter<'a> {
    extractor: &'a dyn PdfExtractor,
    format: FormatType,
    writer: ExcelWriter,
}

impl<'a> Converter<'a> {
    pub fn new(extractor: &'a dyn PdfExtractor, format: FormatType) -> Self {
        Converter {
            extractor,
            format,
            writer: ExcelWriter::default(),
        }
    }

    /// Convert a single PDF: extract text, parse it, write one row.
    pub fn convert_pdf(&self, input: &Path, output: &Path) -> Result<(), PdfsheetError> {
        log::info!("Converting {}...", input.display());

        let text = crate::extract_text(input, self.extractor)?;
        let record = parse_record(&text, self.format);
        let table = Table::from_record(&record);

        self.writer.write_table(&table, output, DEFAULT_SHEET)?;
        log::info!("Created {}", output.display());
        Ok(())
    }

    /// Convert every file in `input_dir` whose name matches `pattern`.
    ///
    /// Files are visited in name order, non-recursively. Each output is
    /// `<stem>.xlsx` in `output_dir`. A failing file is logged and skipped.
    pub fn batch_convert(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        pattern: &str,
    ) -> Result<BatchSummary, PdfsheetError> {
        std::fs::create_dir_all(output_dir)?;

        let files = discover(input_dir, pattern)?;
        log::info!("Found {} PDF files", files.len());

        let mut summary = BatchSummary {
            discovered: files.len(),
            ..Default::default()
        };

        for pdf_file in files {
            let mut name = pdf_file.file_stem().unwrap_or_default().to_os_string();
            name.push(".xlsx");
            let excel_file = output_dir.join(name);
            match self.convert_pdf(&pdf_file, &excel_file) {
                Ok(()) => summary.converted.push(excel_file),
                Err(e) => {
                    log::error!("Failed to convert {}: {e}", pdf_file.display());
                    summary.failed.push((pdf_file, e.to_string()));
                }
            }
        }

        log::info!(
            "Batch conversion completed. Output saved to {}",
            output_dir.display()
        );
        Ok(summary)
    }
}

/// Regular files directly inside `dir` whose file name matches `pattern`.
fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, PdfsheetError> {
    let matcher = glob::Pattern::new(pattern).map_err(|e| PdfsheetError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if matcher.matches(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_is_non_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"").unwrap();
        std::fs::write(dir.path().join("a.pdf"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        std::fs::write(dir.path().join("nested.pdf").join("c.pdf"), b"").unwrap();

        let files = discover(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(dir.path(), "[").unwrap_err();
        assert!(matches!(err, PdfsheetError::InvalidPattern { .. }));
    }
}
