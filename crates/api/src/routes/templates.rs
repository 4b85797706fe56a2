//! Read-only template routes mounted at `/templates`.

use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// ```text
/// GET /catalog          -> get_catalog
/// GET /presets          -> list_presets
/// GET /presets/{name}   -> get_preset
/// GET /published        -> list_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(templates::get_catalog))
        .route("/presets", get(templates::list_presets))
        .route("/presets/{name}", get(templates::get_preset))
        .route("/published", get(templates::list_published))
}
