//! Logger initialization writes to the configured directory.
//!
//! Kept in its own test binary because the logger is process-wide.

use pdfsheet_core::logging::{init, LogConfig};

#[test]
fn init_creates_log_file_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogConfig {
        directory: dir.path().join("logs"),
        ..Default::default()
    };

    let handle = init(&config).unwrap();
    log::info!("logging initialized for test");
    handle.flush();

    let files: Vec<String> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(files.iter().any(|f| f.starts_with("pdfsheet")), "{files:?}");
}
