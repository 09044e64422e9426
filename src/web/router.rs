//! Route table.
//!
//! Returns a composable `Router` so tests can drive it with
//! `tower::ServiceExt::oneshot` without binding a socket. Three pages plus
//! the static asset directory; unknown routes 404 via the framework.

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::web::pages;

pub fn app_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::dashboard::show))
        .route("/model-info", get(pages::model_info::show))
        .route(
            "/predict",
            get(pages::predict::form).post(pages::predict::submit),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
