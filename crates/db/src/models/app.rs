//! Tenant app models and DTOs.

use appforge_core::app_content::AppContentData;
use appforge_core::plan::PlanTier;
use appforge_core::theme::TemplateKind;
use appforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `apps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct App {
    pub id: DbId,
    pub slug: String,
    pub template: String,
    pub custom_template_id: Option<DbId>,
    pub plan: String,
    pub content: Json<AppContentData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl App {
    pub fn template_kind(&self) -> TemplateKind {
        TemplateKind::from_name(&self.template)
    }

    pub fn plan_tier(&self) -> PlanTier {
        PlanTier::from_str_db(&self.plan)
    }
}

/// DTO for inserting an app. The slug is already validated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApp {
    pub slug: String,
    #[serde(default)]
    pub template: TemplateKind,
    pub custom_template_id: Option<DbId>,
    #[serde(default)]
    pub plan: PlanTier,
    #[serde(default)]
    pub content: AppContentData,
}

/// DTO for partially updating an app.
///
/// `custom_template_id` distinguishes an absent field (`None`, keep the
/// link) from an explicit `null` (`Some(None)`, unlink).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApp {
    pub slug: Option<String>,
    pub template: Option<TemplateKind>,
    #[serde(default, deserialize_with = "present")]
    pub custom_template_id: Option<Option<DbId>>,
    pub plan: Option<PlanTier>,
    pub content: Option<AppContentData>,
}

impl UpdateApp {
    /// `true` when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.template.is_none()
            && self.custom_template_id.is_none()
            && self.plan.is_none()
            && self.content.is_none()
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
