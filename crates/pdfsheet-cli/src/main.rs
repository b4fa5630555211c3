mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use pdfsheet_core::logging::{self, LogConfig};
use pdfsheet_core::model::{ApiFormat, FormatType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfsheet",
    version,
    about = "PDF to Excel Extractor - Convert PDF files to Excel spreadsheets"
)]
struct Cli {
    /// Directory for the rotating log file
    #[arg(long, global = true, env = "PDFSHEET_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "PDFSHEET_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single PDF file to Excel
    Convert {
        /// Input PDF file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output Excel file path
        #[arg(short, long)]
        output: PathBuf,

        /// Document format type: generic, medical or invoice
        #[arg(short, long, default_value = "generic")]
        format: String,
    },
    /// Convert multiple PDF files in a folder to Excel
    Batch {
        /// Input PDF folder path
        #[arg(short, long)]
        input: PathBuf,

        /// Output folder path
        #[arg(short, long)]
        output: PathBuf,

        /// Document format type: generic, medical or invoice
        #[arg(short, long, default_value = "generic")]
        format: String,

        /// File pattern to match
        #[arg(short, long, default_value = pdfsheet_core::convert::DEFAULT_PATTERN)]
        pattern: String,
    },
    /// Print the table the HTTP API would return for a PDF (without writing Excel)
    Inspect {
        /// Path to PDF file
        input_file: PathBuf,

        /// Extraction mode
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: ExtractMode,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtractMode {
    Auto,
    Table,
    Text,
}

impl From<ExtractMode> for ApiFormat {
    fn from(value: ExtractMode) -> Self {
        match value {
            ExtractMode::Auto => ApiFormat::Auto,
            ExtractMode::Table => ApiFormat::Table,
            ExtractMode::Text => ApiFormat::Text,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        directory: cli.log_dir,
        level: cli.log_level,
        ..Default::default()
    };
    let _logger = match logging::init(&log_config) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: {e}");
            None
        }
    };

    let (action, result) = match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => (
            "Conversion",
            commands::convert::run(&input, &output, FormatType::from_str_loose(&format)),
        ),
        Commands::Batch {
            input,
            output,
            format,
            pattern,
        } => (
            "Batch conversion",
            commands::batch::run(
                &input,
                &output,
                FormatType::from_str_loose(&format),
                &pattern,
            ),
        ),
        Commands::Inspect {
            input_file,
            mode,
            output,
        } => (
            "Inspection",
            commands::inspect::run(&input_file, mode.into(), &output),
        ),
    };

    // Failures are reported but leave the exit status at 0.
    if let Err(e) = result {
        log::error!("{action} failed: {e}");
        eprintln!("\u{2717} Error: {e}");
    }
}
