//! Custom template rows.
//!
//! Create and update payloads are the core `TemplatePatch`: creation merges
//! it over the default draft, updates merge it over the stored record.

use appforge_core::template_builder::{CustomTemplate, TemplateCategory};
use appforge_core::theme::{TemplateKind, ThemeColors, ThemeEffects, ThemeLayout};
use appforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

pub use appforge_core::template_builder::{TemplateDraft, TemplatePatch};

/// A row from the `custom_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomTemplateRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub template: String,
    pub colors: Json<ThemeColors>,
    pub layout: Json<ThemeLayout>,
    pub effects: Json<ThemeEffects>,
    pub is_active: bool,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CustomTemplateRow> for CustomTemplate {
    fn from(row: CustomTemplateRow) -> Self {
        CustomTemplate {
            id: row.id,
            name: row.name,
            description: row.description,
            category: TemplateCategory::from_name(&row.category),
            template: TemplateKind::from_name(&row.template),
            colors: row.colors.0,
            layout: row.layout.0,
            effects: row.effects.0,
            is_active: row.is_active,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
