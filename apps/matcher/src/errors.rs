use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field was missing or blank.
    #[error("{0}")]
    Validation(String),

    /// The request body exceeded the upload limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Unsupported file format: {0}. Please upload .txt, .pdf, or .docx")]
    UnsupportedFormat(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Validation(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            other => {
                tracing::error!("Request failed: {other}");
                format!("Error processing resume: {other}")
            }
        };

        (status, body).into_response()
    }
}
