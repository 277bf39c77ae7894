//! Router assembly.

use crate::handlers;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the photos API router.
pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            "/photos",
            get(handlers::list_photos).post(handlers::upload_photo),
        )
        .route(
            "/photos/:id",
            get(handlers::get_photo).delete(handlers::delete_photo),
        )
        .route("/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
