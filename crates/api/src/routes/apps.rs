//! App routes.
//!
//! - `router()` mounted at `/apps`
//! - `public_router()` mounted at `/public/apps`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::apps;
use crate::state::AppState;

/// ```text
/// POST /       -> create_app
/// GET  /{id}   -> get_app
/// PUT  /{id}   -> update_app
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(apps::create_app))
        .route("/{id}", get(apps::get_app).put(apps::update_app))
}

/// ```text
/// GET /{slug}  -> render_public_app
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{slug}", get(apps::render_public_app))
}
