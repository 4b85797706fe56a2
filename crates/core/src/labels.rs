//! Display labels used by the renderer.
//!
//! Built once at startup from the configured locale and handed to the
//! renderer explicitly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Parse a locale code such as `pt` or `pt-BR`. Unknown codes are English.
    pub fn from_code(code: &str) -> Self {
        let lang = code.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "pt" => Self::Pt,
            _ => Self::En,
        }
    }
}

/// Fallback texts and action captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLabels {
    pub default_app_name: String,
    pub main_product_title: String,
    pub default_main_label: String,
    pub bonus_section_title: String,
    /// Prefix of the fallback bonus label; the slot number is appended.
    pub bonus_label_prefix: String,
    pub view_action: String,
    pub download_action: String,
}

impl RenderLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                default_app_name: "My App".into(),
                main_product_title: "Main Product".into(),
                default_main_label: "Main Product".into(),
                bonus_section_title: "Bonuses".into(),
                bonus_label_prefix: "Bonus".into(),
                view_action: "View".into(),
                download_action: "Download".into(),
            },
            Locale::Pt => Self {
                default_app_name: "Meu App".into(),
                main_product_title: "Produto Principal".into(),
                default_main_label: "Produto Principal".into(),
                bonus_section_title: "Bônus".into(),
                bonus_label_prefix: "Bônus".into(),
                view_action: "Visualizar".into(),
                download_action: "Baixar".into(),
            },
        }
    }

    /// Fallback label for a bonus slot (1-based).
    pub fn bonus_label(&self, slot: u8) -> String {
        format!("{} {slot}", self.bonus_label_prefix)
    }
}

impl Default for RenderLabels {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("pt-BR"), Locale::Pt);
        assert_eq!(Locale::from_code("PT"), Locale::Pt);
        assert_eq!(Locale::from_code("en_US"), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn bonus_label_appends_slot() {
        assert_eq!(RenderLabels::default().bonus_label(3), "Bonus 3");
        assert_eq!(RenderLabels::for_locale(Locale::Pt).bonus_label(9), "Bônus 9");
    }
}
