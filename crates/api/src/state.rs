use std::sync::{Arc, Mutex, PoisonError};

use appforge_core::labels::RenderLabels;
use appforge_core::render::StatusClock;
use chrono::Utc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: appforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fallback labels for rendered apps, chosen once from the configured locale.
    pub labels: Arc<RenderLabels>,
    /// Status bar clock shared by every preview render.
    pub preview_clock: Arc<Mutex<StatusClock>>,
}

impl AppState {
    pub fn new(pool: appforge_db::DbPool, config: ServerConfig) -> Self {
        let labels = RenderLabels::for_locale(config.default_locale);
        Self {
            pool,
            config: Arc::new(config),
            labels: Arc::new(labels),
            preview_clock: Arc::new(Mutex::new(StatusClock::new(Utc::now()))),
        }
    }

    /// The preview clock, refreshed if a minute has passed since its last
    /// computation.
    pub fn preview_clock(&self) -> StatusClock {
        let mut clock = self
            .preview_clock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        clock.tick(Utc::now());
        clock.clone()
    }
}
