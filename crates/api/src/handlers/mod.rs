pub mod apps;
pub mod custom_templates;
pub mod render;
pub mod templates;
