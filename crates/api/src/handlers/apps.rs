//! Handlers for tenant apps and their public rendering.

use appforge_core::app_content::AppContentData;
use appforge_core::error::CoreError;
use appforge_core::plan::PlanTier;
use appforge_core::render::{self, RenderOptions};
use appforge_core::slug::{generate_slug, validate_slug};
use appforge_core::theme::TemplateKind;
use appforge_core::types::DbId;
use appforge_db::models::app::{CreateApp, UpdateApp};
use appforge_db::repositories::{AppRepo, CustomTemplateRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/apps`. A missing slug is generated from
/// the app name.
#[derive(Debug, Deserialize)]
pub struct CreateAppRequest {
    pub slug: Option<String>,
    #[serde(default)]
    pub template: TemplateKind,
    pub custom_template_id: Option<DbId>,
    #[serde(default)]
    pub plan: PlanTier,
    #[serde(default)]
    pub content: AppContentData,
}

fn new_slug(name: &str) -> String {
    generate_slug(name, &mut rand::rng())
}

/// Ensure a referenced custom template exists before linking it.
async fn check_custom_template(state: &AppState, id: Option<DbId>) -> AppResult<()> {
    let Some(id) = id else {
        return Ok(());
    };
    match CustomTemplateRepo::find_by_id(&state.pool, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "CustomTemplate",
            id,
        })),
    }
}

/// Reject a slug already used by an app other than `owner`.
async fn check_slug_available(state: &AppState, slug: &str, owner: Option<DbId>) -> AppResult<()> {
    match AppRepo::find_by_slug(&state.pool, slug).await? {
        Some(existing) if Some(existing.id) != owner => Err(AppError::Core(CoreError::Conflict(
            format!("Slug '{slug}' is already taken"),
        ))),
        _ => Ok(()),
    }
}

/// POST /api/v1/apps
pub async fn create_app(
    State(state): State<AppState>,
    Json(input): Json<CreateAppRequest>,
) -> AppResult<impl IntoResponse> {
    let slug = match input.slug {
        Some(slug) => {
            validate_slug(&slug)?;
            slug
        }
        None => new_slug(input.content.name.as_deref().unwrap_or_default()),
    };
    check_slug_available(&state, &slug, None).await?;
    check_custom_template(&state, input.custom_template_id).await?;

    let dto = CreateApp {
        slug,
        template: input.template,
        custom_template_id: input.custom_template_id,
        plan: input.plan,
        content: input.content,
    };
    let app = AppRepo::create(&state.pool, &dto).await?;

    tracing::info!(app_id = app.id, slug = %app.slug, "App created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: app })))
}

/// GET /api/v1/apps/{id}
pub async fn get_app(
    State(state): State<AppState>,
    Path(app_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let app = AppRepo::find_by_id(&state.pool, app_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "App",
            id: app_id,
        }))?;

    Ok(Json(DataResponse { data: app }))
}

/// PUT /api/v1/apps/{id}
///
/// `"custom_template_id": null` unlinks the custom template; omitting the
/// field keeps the current link.
pub async fn update_app(
    State(state): State<AppState>,
    Path(app_id): Path<DbId>,
    Json(input): Json<UpdateApp>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
        check_slug_available(&state, slug, Some(app_id)).await?;
    }
    check_custom_template(&state, input.custom_template_id.flatten()).await?;

    let app = AppRepo::update(&state.pool, app_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "App",
            id: app_id,
        }))?;

    tracing::info!(app_id, "App updated");

    Ok(Json(DataResponse { data: app }))
}

/// GET /api/v1/public/apps/{slug}
///
/// Render the app as its visitors see it. A linked custom template is used
/// only while it is published; otherwise the app's own preset applies.
pub async fn render_public_app(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let app = AppRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("App '{slug}' not found")))?;

    let custom = match app.custom_template_id {
        Some(id) => CustomTemplateRepo::find_by_id(&state.pool, id)
            .await?
            .filter(|t| t.is_published),
        None => None,
    };
    let (template, custom_theme) = match custom {
        Some(t) => (t.template, Some(t.theme())),
        None => (app.template_kind(), None),
    };

    let options = RenderOptions {
        user_plan_limits: Some(app.plan_tier().content_slots()),
        can_download: true,
        custom_theme,
        ..RenderOptions::default()
    };
    let rendered = render::render(template, &app.content.0, &options, &state.labels);

    Ok(Json(DataResponse { data: rendered }))
}
