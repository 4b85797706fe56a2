//! Theme schema and the five built-in template presets.
//!
//! A [`ThemeConfig`] is always complete. Missing fields deserialize to the
//! classic preset's values, unknown layout strings fall back to the first
//! catalog option of their axis (which is also classic's choice), and
//! malformed colors are replaced by [`ThemeConfig::sanitized`]. Resolution
//! never fails.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{
    lenient_str, ButtonStyle, CardStyle, ContentLayout, HeaderStyle, Spacing, Typography,
};

/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex")
});

/// Returns `true` if `value` is a hex color the renderer can use.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

// ---------------------------------------------------------------------------
// Template kinds
// ---------------------------------------------------------------------------

/// The five built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    #[default]
    Classic,
    Corporate,
    Showcase,
    Modern,
    Minimal,
}

impl TemplateKind {
    pub const ALL: &'static [TemplateKind] = &[
        TemplateKind::Classic,
        TemplateKind::Corporate,
        TemplateKind::Showcase,
        TemplateKind::Modern,
        TemplateKind::Minimal,
    ];

    /// Parse a template name; anything unrecognized is `Classic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "corporate" => Self::Corporate,
            "showcase" => Self::Showcase,
            "modern" => Self::Modern,
            "minimal" => Self::Minimal,
            _ => Self::Classic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Corporate => "corporate",
            Self::Showcase => "showcase",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Corporate => "Corporate",
            Self::Showcase => "Showcase",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_str(deserializer)?
            .map(|raw| Self::from_name(&raw))
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColors")]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        classic().colors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayout {
    pub header_style: HeaderStyle,
    pub content_layout: ContentLayout,
    pub button_style: ButtonStyle,
    pub card_style: CardStyle,
    pub spacing: Spacing,
    pub typography: Typography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEffects")]
pub struct ThemeEffects {
    pub animations: bool,
    pub shadows: bool,
    pub gradients: bool,
    pub blur: bool,
}

impl Default for ThemeEffects {
    fn default() -> Self {
        classic().effects
    }
}

/// The resolved visual configuration of a template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub colors: ThemeColors,
    #[serde(deserialize_with = "null_as_default")]
    pub layout: ThemeLayout,
    #[serde(deserialize_with = "null_as_default")]
    pub effects: ThemeEffects,
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wire form of [`ThemeColors`]. A slot that is missing, `null` or not a
/// string takes the classic color; malformed strings are kept for
/// [`ThemeConfig::sanitized`].
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawColors {
    primary: serde_json::Value,
    accent: serde_json::Value,
    background: serde_json::Value,
    surface: serde_json::Value,
    text: serde_json::Value,
    text_secondary: serde_json::Value,
}

impl From<RawColors> for ThemeColors {
    fn from(raw: RawColors) -> Self {
        let fallback = classic().colors;
        let pick = |value: serde_json::Value, default: String| match value {
            serde_json::Value::String(s) => s,
            _ => default,
        };
        ThemeColors {
            primary: pick(raw.primary, fallback.primary),
            accent: pick(raw.accent, fallback.accent),
            background: pick(raw.background, fallback.background),
            surface: pick(raw.surface, fallback.surface),
            text: pick(raw.text, fallback.text),
            text_secondary: pick(raw.text_secondary, fallback.text_secondary),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawEffects {
    animations: serde_json::Value,
    shadows: serde_json::Value,
    gradients: serde_json::Value,
    blur: serde_json::Value,
}

impl From<RawEffects> for ThemeEffects {
    fn from(raw: RawEffects) -> Self {
        let fallback = classic().effects;
        ThemeEffects {
            animations: raw.animations.as_bool().unwrap_or(fallback.animations),
            shadows: raw.shadows.as_bool().unwrap_or(fallback.shadows),
            gradients: raw.gradients.as_bool().unwrap_or(fallback.gradients),
            blur: raw.blur.as_bool().unwrap_or(fallback.blur),
        }
    }
}

impl ThemeConfig {
    /// Replace every malformed color with the classic preset's color for
    /// the same slot. Layout and effects are already total after parsing.
    pub fn sanitized(mut self) -> Self {
        let fallback = classic().colors;
        let slots = [
            (&mut self.colors.primary, fallback.primary),
            (&mut self.colors.accent, fallback.accent),
            (&mut self.colors.background, fallback.background),
            (&mut self.colors.surface, fallback.surface),
            (&mut self.colors.text, fallback.text),
            (&mut self.colors.text_secondary, fallback.text_secondary),
        ];
        for (slot, default) in slots {
            if !is_valid_hex_color(slot) {
                *slot = default;
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

fn colors(
    primary: &str,
    accent: &str,
    background: &str,
    surface: &str,
    text: &str,
    text_secondary: &str,
) -> ThemeColors {
    ThemeColors {
        primary: primary.to_string(),
        accent: accent.to_string(),
        background: background.to_string(),
        surface: surface.to_string(),
        text: text.to_string(),
        text_secondary: text_secondary.to_string(),
    }
}

fn classic() -> ThemeConfig {
    ThemeConfig {
        colors: colors("#3b82f6", "#8b5cf6", "#ffffff", "#f8fafc", "#1e293b", "#64748b"),
        layout: ThemeLayout {
            header_style: HeaderStyle::Classic,
            content_layout: ContentLayout::List,
            button_style: ButtonStyle::Rounded,
            card_style: CardStyle::Elevated,
            spacing: Spacing::Normal,
            typography: Typography::Modern,
        },
        effects: ThemeEffects {
            animations: true,
            shadows: true,
            gradients: false,
            blur: false,
        },
    }
}

fn corporate() -> ThemeConfig {
    ThemeConfig {
        colors: colors("#1e3a8a", "#0ea5e9", "#f8fafc", "#ffffff", "#0f172a", "#475569"),
        layout: ThemeLayout {
            header_style: HeaderStyle::Compact,
            content_layout: ContentLayout::Grid,
            button_style: ButtonStyle::Square,
            card_style: CardStyle::Outlined,
            spacing: Spacing::Normal,
            typography: Typography::Classic,
        },
        effects: ThemeEffects {
            animations: false,
            shadows: true,
            gradients: false,
            blur: false,
        },
    }
}

fn showcase() -> ThemeConfig {
    ThemeConfig {
        colors: colors("#7c3aed", "#ec4899", "#0f0f23", "#1a1a2e", "#f8fafc", "#cbd5e1"),
        layout: ThemeLayout {
            header_style: HeaderStyle::Hero,
            content_layout: ContentLayout::Carousel,
            button_style: ButtonStyle::Pill,
            card_style: CardStyle::Glass,
            spacing: Spacing::Spacious,
            typography: Typography::Bold,
        },
        effects: ThemeEffects {
            animations: true,
            shadows: true,
            gradients: true,
            blur: true,
        },
    }
}

fn modern() -> ThemeConfig {
    ThemeConfig {
        colors: colors("#10b981", "#06b6d4", "#f0fdf4", "#ffffff", "#064e3b", "#047857"),
        layout: ThemeLayout {
            header_style: HeaderStyle::Modern,
            content_layout: ContentLayout::Cards,
            button_style: ButtonStyle::Rounded,
            card_style: CardStyle::Elevated,
            spacing: Spacing::Comfortable,
            typography: Typography::Modern,
        },
        effects: ThemeEffects {
            animations: true,
            shadows: true,
            gradients: true,
            blur: false,
        },
    }
}

fn minimal() -> ThemeConfig {
    ThemeConfig {
        colors: colors("#111827", "#6b7280", "#ffffff", "#fafafa", "#111827", "#6b7280"),
        layout: ThemeLayout {
            header_style: HeaderStyle::Minimal,
            content_layout: ContentLayout::Compact,
            button_style: ButtonStyle::Outline,
            card_style: CardStyle::Flat,
            spacing: Spacing::Spacious,
            typography: Typography::Minimal,
        },
        effects: ThemeEffects {
            animations: false,
            shadows: false,
            gradients: false,
            blur: false,
        },
    }
}

/// The complete theme of a built-in template.
pub fn preset(kind: TemplateKind) -> ThemeConfig {
    match kind {
        TemplateKind::Classic => classic(),
        TemplateKind::Corporate => corporate(),
        TemplateKind::Showcase => showcase(),
        TemplateKind::Modern => modern(),
        TemplateKind::Minimal => minimal(),
    }
}

/// Look up a preset by template name. Unknown names yield the classic preset.
pub fn preset_for_name(name: &str) -> ThemeConfig {
    preset(TemplateKind::from_name(name))
}

/// A named preset, as listed by the presets endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NamedPreset {
    pub template: TemplateKind,
    pub label: &'static str,
    pub theme: ThemeConfig,
}

/// All five presets in display order.
pub fn all_presets() -> Vec<NamedPreset> {
    TemplateKind::ALL
        .iter()
        .map(|&kind| NamedPreset {
            template: kind,
            label: kind.label(),
            theme: preset(kind),
        })
        .collect()
}

/// Effective theme: a custom override wins over the template's preset.
pub fn resolve_theme(template: TemplateKind, custom_theme: Option<&ThemeConfig>) -> ThemeConfig {
    match custom_theme {
        Some(custom) => custom.clone().sanitized(),
        None => preset(template),
    }
}
