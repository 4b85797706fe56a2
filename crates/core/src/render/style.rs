//! Style parameters derived from a resolved theme and the template kind.

use serde::Serialize;

use crate::catalog::{ButtonStyle, CardStyle, ContentLayout, HeaderStyle, Spacing, Typography};
use crate::theme::{TemplateKind, ThemeConfig};

/// Fill of the header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    Solid { color: String },
    Gradient { from: String, to: String },
}

impl Background {
    /// The dominant color of the fill.
    pub fn primary(&self) -> &str {
        match self {
            Background::Solid { color } => color,
            Background::Gradient { from, .. } => from,
        }
    }
}

/// Per-template presentation choices that are not part of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateStyle {
    /// Main product drawn as a large featured card rather than a row.
    pub featured_main: bool,
    pub section_titles: bool,
    pub show_thumbnails: bool,
    /// Bonus entries carry a visible ordinal ("01", "02", ...).
    pub numbered_bonuses: bool,
}

impl TemplateStyle {
    pub fn for_template(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Classic => Self {
                featured_main: true,
                section_titles: true,
                show_thumbnails: true,
                numbered_bonuses: false,
            },
            TemplateKind::Corporate => Self {
                featured_main: false,
                section_titles: true,
                show_thumbnails: true,
                numbered_bonuses: true,
            },
            TemplateKind::Showcase => Self {
                featured_main: true,
                section_titles: false,
                show_thumbnails: true,
                numbered_bonuses: false,
            },
            TemplateKind::Modern => Self {
                featured_main: true,
                section_titles: true,
                show_thumbnails: true,
                numbered_bonuses: false,
            },
            TemplateKind::Minimal => Self {
                featured_main: false,
                section_titles: false,
                show_thumbnails: false,
                numbered_bonuses: true,
            },
        }
    }
}

/// Concrete drawing parameters for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub accent: String,
    pub header_background: Background,
    pub button_radius_px: u16,
    pub button_outlined: bool,
    pub card_radius_px: u16,
    pub card_shadow: bool,
    pub card_border: bool,
    pub card_blur: bool,
    pub gap_px: u16,
    pub padding_px: u16,
    pub columns: u8,
    pub heading_font: &'static str,
    pub body_font: &'static str,
    pub animations: bool,
}

impl ResolvedStyle {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let colors = &theme.colors;
        let layout = &theme.layout;
        let effects = &theme.effects;

        let header_background = if effects.gradients {
            Background::Gradient {
                from: colors.primary.clone(),
                to: colors.accent.clone(),
            }
        } else {
            Background::Solid {
                color: colors.primary.clone(),
            }
        };

        let (button_radius_px, button_outlined) = match layout.button_style {
            ButtonStyle::Rounded => (8, false),
            ButtonStyle::Square => (0, false),
            ButtonStyle::Pill => (999, false),
            ButtonStyle::Outline => (8, true),
        };

        let (card_radius_px, card_border) = match layout.card_style {
            CardStyle::Elevated => (12, false),
            CardStyle::Flat => (8, false),
            CardStyle::Outlined => (8, true),
            CardStyle::Glass => (16, true),
        };
        let card_shadow = effects.shadows && layout.card_style == CardStyle::Elevated;
        let card_blur = effects.blur && layout.card_style == CardStyle::Glass;

        let (gap_px, padding_px) = match layout.spacing {
            Spacing::Compact => (8, 12),
            Spacing::Normal => (12, 16),
            Spacing::Comfortable => (16, 20),
            Spacing::Spacious => (24, 28),
        };

        let columns = match layout.content_layout {
            ContentLayout::Grid | ContentLayout::Masonry => 2,
            _ => 1,
        };

        let (heading_font, body_font) = match layout.typography {
            Typography::Modern => ("Inter", "Inter"),
            Typography::Classic => ("Merriweather", "Georgia"),
            Typography::Elegant => ("Playfair Display", "Lato"),
            Typography::Bold => ("Montserrat", "Open Sans"),
            Typography::Minimal => ("system-ui", "system-ui"),
        };

        Self {
            background: colors.background.clone(),
            surface: colors.surface.clone(),
            text: colors.text.clone(),
            text_secondary: colors.text_secondary.clone(),
            accent: colors.accent.clone(),
            header_background,
            button_radius_px,
            button_outlined,
            card_radius_px,
            card_shadow,
            card_blur,
            card_border,
            gap_px,
            padding_px,
            columns,
            heading_font,
            body_font,
            animations: effects.animations,
        }
    }
}

/// Whether a header style draws the cover image.
pub fn header_shows_cover(style: HeaderStyle) -> bool {
    matches!(
        style,
        HeaderStyle::Classic | HeaderStyle::Modern | HeaderStyle::Hero | HeaderStyle::Split
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::preset;

    #[test]
    fn gradient_header_when_enabled() {
        let style = ResolvedStyle::from_theme(&preset(TemplateKind::Showcase));
        assert_eq!(
            style.header_background,
            Background::Gradient {
                from: "#7c3aed".into(),
                to: "#ec4899".into()
            }
        );
        assert!(style.card_blur);
    }

    #[test]
    fn solid_header_without_gradients() {
        let style = ResolvedStyle::from_theme(&preset(TemplateKind::Classic));
        assert_eq!(style.header_background.primary(), "#3b82f6");
        assert!(style.card_shadow);
        assert_eq!(style.columns, 1);
    }

    #[test]
    fn minimal_preset_has_no_depth() {
        let style = ResolvedStyle::from_theme(&preset(TemplateKind::Minimal));
        assert!(!style.card_shadow);
        assert!(!style.card_blur);
        assert!(style.button_outlined);
        assert!(!style.animations);
    }

    #[test]
    fn grid_layouts_use_two_columns() {
        let style = ResolvedStyle::from_theme(&preset(TemplateKind::Corporate));
        assert_eq!(style.columns, 2);
        assert_eq!(style.button_radius_px, 0);
    }
}
