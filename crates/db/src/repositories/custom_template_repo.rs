//! Repository for the `custom_templates` table.
//!
//! At most one row is active at a time. Every operation that can set
//! `is_active` clears the flag on other rows inside the same transaction,
//! and the `uq_custom_templates_active` partial index backs this up.

use appforge_core::template_builder::{CustomTemplate, TemplateDraft, TemplatePatch};
use appforge_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::custom_template::CustomTemplateRow;

/// Column list for `custom_templates` queries.
const COLUMNS: &str = "\
    id, name, description, category, template, colors, layout, effects, \
    is_active, is_published, created_at, updated_at";

/// Provides data access for custom templates.
pub struct CustomTemplateRepo;

impl CustomTemplateRepo {
    /// Create a template from a partial configuration merged over the
    /// default draft. Persisted inactive and unpublished unless the partial
    /// sets either flag.
    pub async fn create(
        pool: &PgPool,
        patch: TemplatePatch,
    ) -> Result<CustomTemplate, sqlx::Error> {
        let draft = patch.into_new_draft();
        let mut tx = pool.begin().await?;
        if draft.is_active {
            Self::clear_active(&mut tx, None).await?;
        }
        let row = Self::insert(&mut tx, &draft).await?;
        tx.commit().await?;
        Ok(row.into())
    }

    /// Find a template by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM custom_templates WHERE id = $1");
        let row = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// The active template, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM custom_templates WHERE is_active");
        let row = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List all templates, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CustomTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_templates ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List templates offered to app owners, by name.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<CustomTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_templates WHERE is_published ORDER BY name, id"
        );
        let rows = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Merge `patch` over the stored record.
    ///
    /// Flags change only when present in the patch. Setting `is_active`
    /// deactivates every other template in the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: TemplatePatch,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM custom_templates WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let current: CustomTemplate = current.into();
        let draft = patch.apply_to(current.to_draft());
        if draft.is_active && !current.is_active {
            Self::clear_active(&mut tx, Some(id)).await?;
        }

        let query = format!(
            "UPDATE custom_templates SET \
                 name = $2, description = $3, category = $4, template = $5, \
                 colors = $6, layout = $7, effects = $8, \
                 is_active = $9, is_published = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.category.as_str())
            .bind(draft.template.as_str())
            .bind(Json(&draft.colors))
            .bind(Json(&draft.layout))
            .bind(Json(&draft.effects))
            .bind(draft.is_active)
            .bind(draft.is_published)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row.into()))
    }

    /// Copy a template under the name `"<name> (Copy)"`, inactive and
    /// unpublished. Returns `None` if the source does not exist.
    pub async fn duplicate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let Some(source) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        let row = Self::insert(&mut conn, &source.duplicate_draft()).await?;
        Ok(Some(row.into()))
    }

    /// Make `id` the only active template. `is_published` is untouched.
    ///
    /// Returns `None` (and changes nothing) if the template does not exist.
    pub async fn activate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::clear_active(&mut tx, Some(id)).await?;

        let query = format!(
            "UPDATE custom_templates SET is_active = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        let Some(row) = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.commit().await?;
        Ok(Some(row.into()))
    }

    /// Clear the active flag on `id`.
    pub async fn deactivate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE custom_templates SET is_active = FALSE WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Set the published flag on `id` only.
    pub async fn publish(
        pool: &PgPool,
        id: DbId,
        should_publish: bool,
    ) -> Result<Option<CustomTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE custom_templates SET is_published = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(id)
            .bind(should_publish)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Delete a template by ID. No other template is activated in its place.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM custom_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert(
        conn: &mut PgConnection,
        draft: &TemplateDraft,
    ) -> Result<CustomTemplateRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO custom_templates \
                 (name, description, category, template, colors, layout, effects, \
                  is_active, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomTemplateRow>(&query)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.category.as_str())
            .bind(draft.template.as_str())
            .bind(Json(&draft.colors))
            .bind(Json(&draft.layout))
            .bind(Json(&draft.effects))
            .bind(draft.is_active)
            .bind(draft.is_published)
            .fetch_one(conn)
            .await
    }

    /// Clear `is_active` on every row except `keep`.
    async fn clear_active(conn: &mut PgConnection, keep: Option<DbId>) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE custom_templates SET is_active = FALSE \
             WHERE is_active AND ($1::BIGINT IS NULL OR id <> $1)",
        )
        .bind(keep)
        .execute(conn)
        .await?;
        Ok(())
    }
}
