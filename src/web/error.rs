//! Handler-level errors rendered as an HTML error page.
//!
//! The only user-visible *data* error (unknown provinsi/kab-kota pair on
//! the predict form) is not an `AppError` — it renders inside the predict
//! page itself. What lands here are faults that should not happen with a
//! validated artifact, surfaced as a 500 with details kept in the log.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::StateError;
use crate::web::render;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StateError> for AppError {
    fn from(err: StateError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(detail) = &self;
        tracing::error!(detail, "request failed");

        // Details stay in the log; the page shows a generic message.
        let body = render::page(
            "Terjadi Kesalahan",
            None,
            "<section class=\"error\"><h1>Terjadi kesalahan pada server</h1>\
             <p>Silakan coba lagi atau kembali ke <a href=\"/\">dashboard</a>.</p></section>",
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
