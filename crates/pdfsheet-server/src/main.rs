use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use pdfsheet_core::extraction::pdftotext::PdftotextExtractor;
use pdfsheet_core::logging::{self, LogConfig};
use pdfsheet_server::{router, AppState};

#[derive(Parser)]
#[command(
    name = "pdfsheet-server",
    version,
    about = "HTTP API for converting PDF files to Excel spreadsheets"
)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "PDFSHEET_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PDFSHEET_PORT", default_value_t = 5000)]
    port: u16,

    /// Directory for the rotating log file
    #[arg(long, env = "PDFSHEET_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "PDFSHEET_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
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

    if !PdftotextExtractor::is_available() {
        log::warn!("pdftotext not found; conversions will fail until poppler-utils is installed");
    }

    if let Err(e) = serve(&cli.host, cli.port).await {
        log::error!("Server failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn serve(host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    log::info!("Listening on http://{addr}");

    let state = AppState::new(Arc::new(PdftotextExtractor::new()));
    axum::serve(listener, router(state)).await
}
