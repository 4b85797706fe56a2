//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod app_repo;
pub mod custom_template_repo;

pub use app_repo::AppRepo;
pub use custom_template_repo::CustomTemplateRepo;
