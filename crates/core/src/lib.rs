//! Domain layer for the app builder's template and theme system.
//!
//! Everything in this crate is synchronous and free of I/O apart from the
//! optional status-clock ticker. Persistence lives in `appforge-db`, HTTP
//! in `appforge-api`.

pub mod app_content;
pub mod catalog;
pub mod error;
pub mod labels;
pub mod plan;
pub mod render;
pub mod slug;
pub mod template_builder;
pub mod theme;
pub mod types;
