//! Admin custom template routes mounted at `/admin/custom-templates`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::custom_templates;
use crate::state::AppState;

/// ```text
/// GET    /                  -> list_templates
/// POST   /                  -> create_template
/// GET    /active            -> get_active_template
/// POST   /random            -> random_template
/// POST   /preview           -> preview_draft
/// GET    /{id}              -> get_template
/// PUT    /{id}              -> update_template
/// DELETE /{id}              -> delete_template
/// POST   /{id}/duplicate    -> duplicate_template
/// POST   /{id}/activate     -> activate_template
/// POST   /{id}/deactivate   -> deactivate_template
/// POST   /{id}/publish      -> publish_template
/// POST   /{id}/preview      -> preview_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(custom_templates::list_templates).post(custom_templates::create_template),
        )
        .route("/active", get(custom_templates::get_active_template))
        .route("/random", post(custom_templates::random_template))
        .route("/preview", post(custom_templates::preview_draft))
        .route(
            "/{id}",
            get(custom_templates::get_template)
                .put(custom_templates::update_template)
                .delete(custom_templates::delete_template),
        )
        .route("/{id}/duplicate", post(custom_templates::duplicate_template))
        .route("/{id}/activate", post(custom_templates::activate_template))
        .route("/{id}/deactivate", post(custom_templates::deactivate_template))
        .route("/{id}/publish", post(custom_templates::publish_template))
        .route("/{id}/preview", post(custom_templates::preview_template))
}
