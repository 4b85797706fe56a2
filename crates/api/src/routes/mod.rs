pub mod apps;
pub mod custom_templates;
pub mod health;
pub mod templates;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /templates                 catalog, presets, published custom templates
/// /render                    POST ad-hoc render (editor preview)
/// /admin/custom-templates    custom template builder
/// /apps                      tenant apps
/// /public/apps/{slug}        rendered public app
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", templates::router())
        .route("/render", post(handlers::render::render_app))
        .nest("/admin/custom-templates", custom_templates::router())
        .nest("/apps", apps::router())
        .nest("/public/apps", apps::public_router())
}
