pub mod error;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use pdfsheet_core::error::PdfsheetError;
use pdfsheet_core::extraction::PdfExtractor;
use pdfsheet_core::model::ApiFormat;
use pdfsheet_core::writer::{ExcelWriter, DEFAULT_SHEET};
use serde_json::{json, Value};

use error::ApiError;

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn PdfExtractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn PdfExtractor>) -> Self {
        AppState { extractor }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/convert", post(convert).options(preflight))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::map_response(allow_any_origin))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "PDF to Excel converter is running",
    }))
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": "PDF to Excel Converter",
        "endpoints": {
            "health": "/api/health",
            "convert": "/api/convert (POST with file and optional format parameter)",
        },
    }))
}

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// An uploaded file part.
struct Upload {
    filename: String,
    data: Bytes,
}

async fn convert(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let mut multipart = multipart?;

    let mut upload = None;
    let mut format = ApiFormat::Auto;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                upload = Some(Upload { filename, data });
            }
            Some("format") => {
                format = ApiFormat::from_str_loose(&field.text().await?);
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    if upload.filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }
    if !is_pdf_name(&upload.filename) {
        return Err(ApiError::bad_request("Only PDF files allowed"));
    }

    log::info!(
        "Converting upload {} ({} bytes, format {})",
        upload.filename,
        upload.data.len(),
        format
    );

    let extractor = Arc::clone(&state.extractor);
    let data = upload.data;
    let workbook =
        tokio::task::spawn_blocking(move || convert_upload(&data, format, extractor.as_ref()))
            .await??;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_name(&upload.filename)
    );
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        workbook,
    )
        .into_response())
}

/// Spool the upload to a temp file, extract, and render an xlsx buffer.
///
/// The temp file is removed when it goes out of scope, on every path.
fn convert_upload(
    data: &[u8],
    format: ApiFormat,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<u8>, PdfsheetError> {
    extractor.ensure_available()?;

    let mut tmp = tempfile::Builder::new()
        .prefix("pdfsheet-upload-")
        .suffix(".pdf")
        .tempfile()?;
    tmp.write_all(data)?;
    tmp.flush()?;

    let table = pdfsheet_core::extract_for_format(tmp.path(), format, extractor)?;
    ExcelWriter::plain().write_table_to_buffer(&table, DEFAULT_SHEET)
}

fn is_pdf_name(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Attachment name for the converted workbook: the upload's name without
/// its extension, made filesystem-safe, plus `_extracted.xlsx`.
pub fn download_name(upload_name: &str) -> String {
    let stem = upload_name
        .rsplit_once('.')
        .map_or(upload_name, |(stem, _)| stem);
    let mut safe = secure_filename(stem);
    if safe.is_empty() {
        safe = "upload".to_string();
    }
    format!("{safe}_extracted.xlsx")
}

/// Keep `[A-Za-z0-9_.-]`; path separators and whitespace runs become `_`.
fn secure_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
