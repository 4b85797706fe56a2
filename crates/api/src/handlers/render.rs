//! Ad-hoc render endpoint used by the editor's live preview.

use appforge_core::app_content::AppContentData;
use appforge_core::error::CoreError;
use appforge_core::plan::clamp_plan_limit;
use appforge_core::render::{self, RenderOptions};
use appforge_core::theme::{TemplateKind, ThemeConfig};
use appforge_core::types::DbId;
use appforge_db::repositories::CustomTemplateRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn default_true() -> bool {
    true
}

/// Request body for `POST /api/v1/render`.
///
/// A `custom_template_id` supplies both the base template and the theme and
/// wins over `template` and `theme`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(default)]
    pub content: AppContentData,
    pub theme: Option<ThemeConfig>,
    pub custom_template_id: Option<DbId>,
    /// Clamped to the supported slot range like the content field.
    pub user_plan_limits: Option<i64>,
    #[serde(default = "default_true")]
    pub can_download: bool,
    #[serde(default)]
    pub can_change_template: bool,
    #[serde(default = "default_true")]
    pub is_preview: bool,
}

/// POST /api/v1/render
pub async fn render_app(
    State(state): State<AppState>,
    Json(input): Json<RenderRequest>,
) -> AppResult<impl IntoResponse> {
    let (template, custom_theme) = match input.custom_template_id {
        Some(id) => {
            let custom = CustomTemplateRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "CustomTemplate",
                    id,
                }))?;
            (custom.template, Some(custom.theme()))
        }
        None => (input.template, input.theme),
    };

    let options = RenderOptions {
        user_plan_limits: input.user_plan_limits.map(clamp_plan_limit),
        can_download: input.can_download,
        can_change_template: input.can_change_template,
        is_preview: input.is_preview,
        custom_theme,
        clock: input.is_preview.then(|| state.preview_clock()),
    };
    let rendered = render::render(template, &input.content, &options, &state.labels);

    Ok(Json(DataResponse { data: rendered }))
}
