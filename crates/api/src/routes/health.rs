use appforge_core::types::DbId;
use appforge_db::repositories::CustomTemplateRepo;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Custom template app previews currently start from, if any.
    pub active_template_id: Option<DbId>,
}

/// GET /health -- returns service and database health.
///
/// A failed active-template lookup degrades the status like a failed ping.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db_healthy, active_template_id) = match appforge_db::health_check(&state.pool).await {
        Ok(()) => match CustomTemplateRepo::find_active(&state.pool).await {
            Ok(active) => (true, active.map(|t| t.id)),
            Err(err) => {
                tracing::warn!(error = %err, "Active template lookup failed");
                (false, None)
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            (false, None)
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        active_template_id,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
