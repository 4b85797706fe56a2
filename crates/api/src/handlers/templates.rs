//! Read-only template endpoints: layout catalog, presets and the published
//! custom templates offered to app owners.

use appforge_core::catalog::catalog;
use appforge_core::theme::{all_presets, preset, NamedPreset, TemplateKind};
use appforge_db::repositories::CustomTemplateRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates/catalog
pub async fn get_catalog() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse { data: catalog() }))
}

/// GET /api/v1/templates/presets
pub async fn list_presets() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: all_presets(),
    }))
}

/// GET /api/v1/templates/presets/{name}
///
/// Unknown names resolve to the classic preset.
pub async fn get_preset(Path(name): Path<String>) -> AppResult<impl IntoResponse> {
    let kind = TemplateKind::from_name(&name);
    Ok(Json(DataResponse {
        data: NamedPreset {
            template: kind,
            label: kind.label(),
            theme: preset(kind),
        },
    }))
}

/// GET /api/v1/templates/published
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = CustomTemplateRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}
