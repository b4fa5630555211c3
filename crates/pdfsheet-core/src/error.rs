#[derive(Debug, thiserror::Error)]
pub enum PdfsheetError {
    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    DependencyMissing,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("failed to write spreadsheet: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("workbook must contain at least one sheet")]
    EmptyWorkbook,

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PdfsheetError {
    /// Short name of the error kind, reported to HTTP clients as `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            PdfsheetError::DependencyMissing => "DependencyMissing",
            PdfsheetError::PdftotextFailed { .. } => "PdftotextFailed",
            PdfsheetError::Extraction(_) => "Extraction",
            PdfsheetError::Write(_) => "Write",
            PdfsheetError::InvalidPattern { .. } => "InvalidPattern",
            PdfsheetError::EmptyWorkbook => "EmptyWorkbook",
            PdfsheetError::Logger(_) => "Logger",
            PdfsheetError::Io(_) => "Io",
            PdfsheetError::Json(_) => "Json",
        }
    }

    /// Whether a best-effort extraction may replace this error with
    /// placeholder output. A missing backend is never degradable.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            PdfsheetError::PdftotextFailed { .. } | PdfsheetError::Extraction(_)
        )
    }
}
