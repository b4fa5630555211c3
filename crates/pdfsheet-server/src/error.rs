use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pdfsheet_core::error::PdfsheetError;
use serde_json::json;

/// Failure of an API request, rendered as a JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing upload, reported before any processing.
    BadRequest(String),
    /// The multipart stream could not be read (includes oversized uploads).
    Multipart(MultipartError),
    /// Anything that went wrong while converting.
    Internal { message: String, kind: &'static str },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl From<PdfsheetError> for ApiError {
    fn from(e: PdfsheetError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            kind: e.kind(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart(e)
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(_: MultipartRejection) -> Self {
        ApiError::bad_request("Content-Type must be multipart/form-data")
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            kind: "JoinError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Multipart(e) => {
                (e.status(), Json(json!({ "error": e.body_text() }))).into_response()
            }
            ApiError::Internal { message, kind } => {
                log::error!("Request failed ({kind}): {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message, "type": kind })),
                )
                    .into_response()
            }
        }
    }
}
