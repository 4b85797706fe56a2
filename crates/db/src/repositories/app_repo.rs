//! Repository for the `apps` table.

use appforge_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::app::{App, CreateApp, UpdateApp};

/// Column list for `apps` queries.
const COLUMNS: &str = "\
    id, slug, template, custom_template_id, plan, content, created_at, updated_at";

/// Provides data access for tenant apps.
pub struct AppRepo;

impl AppRepo {
    /// Insert a new app.
    pub async fn create(pool: &PgPool, dto: &CreateApp) -> Result<App, sqlx::Error> {
        let query = format!(
            "INSERT INTO apps (slug, template, custom_template_id, plan, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, App>(&query)
            .bind(&dto.slug)
            .bind(dto.template.as_str())
            .bind(dto.custom_template_id)
            .bind(dto.plan.as_str())
            .bind(Json(&dto.content))
            .fetch_one(pool)
            .await
    }

    /// Find an app by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<App>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps WHERE id = $1");
        sqlx::query_as::<_, App>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an app by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<App>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM apps WHERE slug = $1");
        sqlx::query_as::<_, App>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Partially update an app.
    ///
    /// Uses `COALESCE` so only provided fields are changed. The custom
    /// template link is replaced whenever it is present in `dto`, so an
    /// explicit `None` unlinks it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateApp,
    ) -> Result<Option<App>, sqlx::Error> {
        let query = format!(
            "UPDATE apps SET \
                 slug = COALESCE($2, slug), \
                 template = COALESCE($3, template), \
                 custom_template_id = CASE WHEN $4 THEN $5 ELSE custom_template_id END, \
                 plan = COALESCE($6, plan), \
                 content = COALESCE($7, content) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, App>(&query)
            .bind(id)
            .bind(&dto.slug)
            .bind(dto.template.map(|t| t.as_str()))
            .bind(dto.custom_template_id.is_some())
            .bind(dto.custom_template_id.flatten())
            .bind(dto.plan.map(|p| p.as_str()))
            .bind(dto.content.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }
}
