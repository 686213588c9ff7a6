//! Axum route handlers for the upload form.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
};
use tracing::{debug, info};

use crate::document::read_document_bytes;
use crate::errors::AppError;
use crate::pipeline::analyze;
use crate::render::{render_form, render_result};
use crate::state::AppState;

/// An uploaded resume: client file name plus raw bytes.
struct Upload {
    file_name: String,
    data: Vec<u8>,
}

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_form())
}

/// POST /
///
/// Multipart form with a `resume` file and a `job_description` text field.
/// Both are checked before any extraction runs.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut upload: Option<Upload> = None;
    let mut jd_text = String::new();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(invalid_form)?;
                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() {
                    upload = Some(Upload {
                        file_name,
                        data: data.to_vec(),
                    });
                }
            }
            Some("job_description") => {
                jd_text = field.text().await.map_err(invalid_form)?;
            }
            _ => {}
        }
    }

    let jd_text = jd_text.trim().to_string();
    if jd_text.is_empty() {
        return Err(AppError::Validation("Job description is required!".to_string()));
    }
    let upload =
        upload.ok_or_else(|| AppError::Validation("Resume file is required!".to_string()))?;

    info!(
        "Matching {} ({} bytes) against a {}-char job description",
        upload.file_name,
        upload.data.len(),
        jd_text.len()
    );

    // Decoding and inference are CPU-bound.
    let analysis = tokio::task::spawn_blocking(move || {
        let document = read_document_bytes(&upload.file_name, &upload.data)?;
        debug!(format = ?document.format, chars = document.text.len(), "Resume decoded");
        analyze(
            &document.text,
            &jd_text,
            &state.dictionary,
            state.embedder.as_ref(),
            &state.options,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("match task failed: {e}")))??;

    Ok(Html(render_result(&analysis)))
}

/// Maps a multipart failure to a client error, keeping 413 for oversized bodies.
fn invalid_form(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(e.body_text());
    }
    AppError::Validation(format!("Invalid form data: {e}"))
}
