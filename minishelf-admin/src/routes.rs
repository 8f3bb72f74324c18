//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the admin router: the form page, the JSON API, and read-only
/// access to the store's photos so the form can preview existing files.
pub fn create_router(state: AppState) -> Router {
    let photos_dir = state.photos_dir();
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/metadata", get(handlers::metadata))
        .route("/api/entries", post(handlers::save_entry))
        .nest_service("/photos", ServeDir::new(photos_dir))
        .with_state(state)
}
