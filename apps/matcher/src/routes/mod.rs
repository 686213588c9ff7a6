pub mod health;
pub mod match_form;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::state::AppState;

/// Largest accepted upload, form fields included.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(match_form::handle_form).post(match_form::handle_match),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
