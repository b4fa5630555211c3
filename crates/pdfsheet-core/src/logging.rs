use std::path::PathBuf;

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

use crate::error::PdfsheetError;

/// Log files rotate once they reach this size.
pub const DEFAULT_ROTATE_BYTES: u64 = 500 * 1024 * 1024;

/// Where and how much the process logs.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub basename: String,
    /// Level filter used when `RUST_LOG` is unset (e.g. "info", "pdfsheet_core=debug").
    pub level: String,
    pub rotate_bytes: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            directory: PathBuf::from("logs"),
            basename: "pdfsheet".to_string(),
            level: "info".to_string(),
            rotate_bytes: DEFAULT_ROTATE_BYTES,
        }
    }
}

/// Install the process-wide logger: one appending, size-rotated file plus
/// an echo of every record to stderr.
///
/// Call once from `main` and keep the handle alive until exit; dropping it
/// flushes and stops the file writer.
pub fn init(config: &LogConfig) -> Result<LoggerHandle, PdfsheetError> {
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.directory)
                .basename(&config.basename)
                .suppress_timestamp(),
        )
        .append()
        .rotate(
            Criterion::Size(config.rotate_bytes),
            Naming::Numbers,
            Cleanup::Never,
        )
        .format_for_files(flexi_logger::detailed_format)
        .format_for_stderr(flexi_logger::default_format)
        .duplicate_to_stderr(Duplicate::All)
        .start()?;
    Ok(handle)
}
