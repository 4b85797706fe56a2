//! Handlers for admin custom template management.
//!
//! Mutations log the affected template id. Validation happens here rather
//! than in the repository: creation requires a name and description, and
//! updates re-check whichever of the two they change.

use appforge_core::app_content::AppContentData;
use appforge_core::error::CoreError;
use appforge_core::render::{self, RenderOptions};
use appforge_core::template_builder::{
    validate_template_description, validate_template_name, TemplateBuilder, TemplateDraft,
    TemplatePatch,
};
use appforge_core::theme::{TemplateKind, ThemeConfig};
use appforge_core::types::DbId;
use appforge_db::repositories::CustomTemplateRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CustomTemplate",
        id,
    })
}

/// Request body for `POST /admin/custom-templates/{id}/publish`.
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub publish: bool,
}

/// GET /api/v1/admin/custom-templates
///
/// List all custom templates, newest first.
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = CustomTemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// POST /api/v1/admin/custom-templates
///
/// Create a template from a partial configuration merged over the default.
pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<TemplatePatch>,
) -> AppResult<impl IntoResponse> {
    input.clone().into_new_draft().validate()?;

    let template = CustomTemplateRepo::create(&state.pool, input).await?;

    tracing::info!(
        template_id = template.id,
        name = %template.name,
        is_active = template.is_active,
        "Custom template created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// GET /api/v1/admin/custom-templates/active
///
/// The active template. Returns 204 when none is active.
pub async fn get_active_template(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    match CustomTemplateRepo::find_active(&state.pool).await? {
        Some(t) => Ok(Json(DataResponse { data: t }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/v1/admin/custom-templates/random
///
/// Randomize the layout and primary color of the posted draft (or of the
/// default draft when the body is empty). Nothing is persisted.
pub async fn random_template(
    input: Option<Json<TemplateDraft>>,
) -> AppResult<impl IntoResponse> {
    let mut builder = TemplateBuilder::default();
    if let Some(Json(draft)) = input {
        *builder.draft_mut() = draft;
    }
    builder.generate_random_template(&mut rand::rng());
    Ok(Json(DataResponse {
        data: builder.draft().clone(),
    }))
}

/// POST /api/v1/admin/custom-templates/preview
///
/// Live preview of an unsaved draft. Without a body (or with the default
/// draft) the active template is shown, falling back to the classic preset.
pub async fn preview_draft(
    State(state): State<AppState>,
    input: Option<Json<TemplateDraft>>,
) -> AppResult<impl IntoResponse> {
    let mut builder = TemplateBuilder::new(CustomTemplateRepo::list(&state.pool).await?);
    if let Some(Json(draft)) = input {
        *builder.draft_mut() = draft;
    }
    let (template, custom_theme) = builder.preview_theme();

    Ok(Json(DataResponse {
        data: render_sample(&state, template, custom_theme),
    }))
}

/// GET /api/v1/admin/custom-templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = CustomTemplateRepo::find_by_id(&state.pool, template_id)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    Ok(Json(DataResponse { data: template }))
}

/// PUT /api/v1/admin/custom-templates/{id}
///
/// Partially update a template. Setting `is_active` deactivates every other
/// template.
pub async fn update_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<TemplatePatch>,
) -> AppResult<impl IntoResponse> {
    if input == TemplatePatch::default() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    if let Some(name) = &input.name {
        validate_template_name(name)?;
    }
    if let Some(description) = &input.description {
        validate_template_description(description)?;
    }

    let template = CustomTemplateRepo::update(&state.pool, template_id, input)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    tracing::info!(template_id, "Custom template updated");

    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/admin/custom-templates/{id}
///
/// Delete a template. Deleting the active template leaves none active.
pub async fn delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CustomTemplateRepo::delete(&state.pool, template_id).await?;
    if !deleted {
        return Err(not_found(template_id));
    }

    tracing::info!(template_id, "Custom template deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/custom-templates/{id}/duplicate
pub async fn duplicate_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let copy = CustomTemplateRepo::duplicate(&state.pool, template_id)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    tracing::info!(
        source_id = template_id,
        template_id = copy.id,
        "Custom template duplicated",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

/// POST /api/v1/admin/custom-templates/{id}/activate
pub async fn activate_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = CustomTemplateRepo::activate(&state.pool, template_id)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    tracing::info!(template_id, "Custom template activated");

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/admin/custom-templates/{id}/deactivate
pub async fn deactivate_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = CustomTemplateRepo::deactivate(&state.pool, template_id)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    tracing::info!(template_id, "Custom template deactivated");

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/admin/custom-templates/{id}/publish
///
/// Body: `{ "publish": bool }`.
pub async fn publish_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<PublishRequest>,
) -> AppResult<impl IntoResponse> {
    let template = CustomTemplateRepo::publish(&state.pool, template_id, input.publish)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    tracing::info!(template_id, published = input.publish, "Custom template publication changed");

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/admin/custom-templates/{id}/preview
///
/// Render sample app content with this template's base and theme.
pub async fn preview_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = CustomTemplateRepo::find_by_id(&state.pool, template_id)
        .await?
        .ok_or_else(|| not_found(template_id))?;

    let mut builder = TemplateBuilder::new(vec![template]);
    builder.edit(template_id)?;
    let (template, custom_theme) = builder.preview_theme();

    Ok(Json(DataResponse {
        data: render_sample(&state, template, custom_theme),
    }))
}

fn render_sample(
    state: &AppState,
    template: TemplateKind,
    custom_theme: Option<ThemeConfig>,
) -> render::RenderedApp {
    let options = RenderOptions {
        can_download: true,
        is_preview: true,
        custom_theme,
        clock: Some(state.preview_clock()),
        ..RenderOptions::default()
    };
    render::render(
        template,
        &AppContentData::preview_sample(),
        &options,
        &state.labels,
    )
}
