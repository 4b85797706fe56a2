//! Layout option catalog.
//!
//! Each layout axis is a closed enum. Every axis:
//! - lists its options in display order (`ALL`)
//! - maps each option to a [`LayoutOption`] with label, description and preview
//! - deserializes unknown strings, `null` and non-strings to its first option
//!
//! Axes are independent; any header style combines with any content layout.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One selectable entry of a layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutOption {
    /// Machine value, unique within its axis.
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Small illustrative glyph string for the builder UI.
    pub preview: &'static str,
}

/// Read any JSON value, keeping it only if it is a string.
pub(crate) fn lenient_str<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

macro_rules! layout_axis {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal, $desc:literal, $preview:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every option in display order. The first one is the fallback.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            pub fn option(self) -> LayoutOption {
                match self {
                    $( $name::$variant => LayoutOption {
                        value: $value,
                        label: $label,
                        description: $desc,
                        preview: $preview,
                    } ),+
                }
            }

            /// Parse a machine value, falling back to the first option.
            pub fn from_value(value: &str) -> Self {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == value)
                    .unwrap_or_default()
            }

            /// Catalog entries for this axis in display order.
            pub fn options() -> Vec<LayoutOption> {
                Self::ALL.iter().map(|v| v.option()).collect()
            }

            /// Draw one option uniformly at random.
            pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self::ALL[rng.random_range(0..Self::ALL.len())]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok(lenient_str(deserializer)?
                    .map(|raw| Self::from_value(&raw))
                    .unwrap_or_default())
            }
        }
    };
}

layout_axis! {
    /// How the app header is drawn.
    HeaderStyle {
        Classic => ("classic", "Classic", "Cover image with the app name below it", "[▭▭▭]\n ◉ Aa"),
        Modern => ("modern", "Modern", "Gradient band with a floating icon", "[▒▒▒]\n  ◉"),
        Minimal => ("minimal", "Minimal", "Plain title without imagery", " Aa\n ───"),
        Hero => ("hero", "Hero", "Full-bleed cover with the title overlaid", "[▓Aa▓]"),
        Compact => ("compact", "Compact", "Slim top bar with icon and name inline", "◉ Aa ─"),
        Centered => ("centered", "Centered", "Round avatar centered above the title", "  ◉\n  Aa"),
        Split => ("split", "Split", "Icon on one side, text on the other", "◉ | Aa"),
    }
}

layout_axis! {
    /// How content items are arranged.
    ContentLayout {
        List => ("list", "List", "One item per row", "▭\n▭\n▭"),
        Grid => ("grid", "Grid", "Two-column grid of tiles", "▫▫\n▫▫"),
        Cards => ("cards", "Cards", "Full-width cards with thumbnails", "▢\n▢"),
        Masonry => ("masonry", "Masonry", "Staggered columns of varying height", "▯▫\n▫▯"),
        Carousel => ("carousel", "Carousel", "Horizontally scrolling strip", "◂▢▢▸"),
        Timeline => ("timeline", "Timeline", "Items along a vertical line", "●─\n│\n●─"),
        Magazine => ("magazine", "Magazine", "Large lead item followed by a list", "▇▇\n▭▭"),
        Compact => ("compact", "Compact", "Dense rows without thumbnails", "─\n─\n─"),
    }
}

layout_axis! {
    /// Shape of action buttons.
    ButtonStyle {
        Rounded => ("rounded", "Rounded", "Softly rounded corners", "( ok )"),
        Square => ("square", "Square", "Sharp corners", "[ ok ]"),
        Pill => ("pill", "Pill", "Fully rounded ends", "(( ok ))"),
        Outline => ("outline", "Outline", "Transparent fill with a border", "┌ok┐"),
    }
}

layout_axis! {
    /// Surface treatment of content cards.
    CardStyle {
        Elevated => ("elevated", "Elevated", "Raised with a drop shadow", "▢▁"),
        Flat => ("flat", "Flat", "Filled surface without depth", "■"),
        Outlined => ("outlined", "Outlined", "Thin border, no fill", "□"),
        Glass => ("glass", "Glass", "Translucent blurred surface", "▣"),
    }
}

layout_axis! {
    /// Distance between blocks and items.
    Spacing {
        Normal => ("normal", "Normal", "Balanced spacing", "▭ ▭"),
        Compact => ("compact", "Compact", "Tight spacing for dense content", "▭▭"),
        Comfortable => ("comfortable", "Comfortable", "Generous breathing room", "▭  ▭"),
        Spacious => ("spacious", "Spacious", "Airy layout with wide gaps", "▭   ▭"),
    }
}

layout_axis! {
    /// Font pairing for titles and body text.
    Typography {
        Modern => ("modern", "Modern", "Clean geometric sans-serif", "Aa"),
        Classic => ("classic", "Classic", "Traditional serif headings", "𝐀𝐚"),
        Elegant => ("elegant", "Elegant", "Light, high-contrast display face", "𝒜𝒶"),
        Bold => ("bold", "Bold", "Heavy headings for strong emphasis", "𝗔𝗮"),
        Minimal => ("minimal", "Minimal", "Neutral system font", "aa"),
    }
}

/// The whole catalog, one list per axis, as served to the builder UI.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutCatalog {
    pub header_style: Vec<LayoutOption>,
    pub content_layout: Vec<LayoutOption>,
    pub button_style: Vec<LayoutOption>,
    pub card_style: Vec<LayoutOption>,
    pub spacing: Vec<LayoutOption>,
    pub typography: Vec<LayoutOption>,
}

/// Build the full layout catalog.
pub fn catalog() -> LayoutCatalog {
    LayoutCatalog {
        header_style: HeaderStyle::options(),
        content_layout: ContentLayout::options(),
        button_style: ButtonStyle::options(),
        card_style: CardStyle::options(),
        spacing: Spacing::options(),
        typography: Typography::options(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(values: Vec<LayoutOption>) {
        let set: HashSet<_> = values.iter().map(|o| o.value).collect();
        assert_eq!(set.len(), values.len(), "duplicate values in axis");
    }

    #[test]
    fn axis_sizes_match_catalog() {
        assert_eq!(HeaderStyle::ALL.len(), 7);
        assert_eq!(ContentLayout::ALL.len(), 8);
        assert_eq!(ButtonStyle::ALL.len(), 4);
        assert_eq!(CardStyle::ALL.len(), 4);
        assert_eq!(Spacing::ALL.len(), 4);
        assert_eq!(Typography::ALL.len(), 5);
    }

    #[test]
    fn values_are_unique_within_each_axis() {
        let c = catalog();
        assert_unique(c.header_style);
        assert_unique(c.content_layout);
        assert_unique(c.button_style);
        assert_unique(c.card_style);
        assert_unique(c.spacing);
        assert_unique(c.typography);
    }

    #[test]
    fn from_value_round_trips_every_option() {
        for v in ContentLayout::ALL {
            assert_eq!(ContentLayout::from_value(v.as_str()), *v);
        }
    }

    #[test]
    fn unknown_value_falls_back_to_first_option() {
        assert_eq!(HeaderStyle::from_value("neon"), HeaderStyle::Classic);
        assert_eq!(ContentLayout::from_value(""), ContentLayout::List);
        assert_eq!(Typography::from_value("comic"), Typography::Modern);
        assert_eq!(Spacing::from_value("huge"), Spacing::Normal);
    }

    #[test]
    fn deserialize_unknown_string_does_not_fail() {
        let style: CardStyle = serde_json::from_str("\"holographic\"").unwrap();
        assert_eq!(style, CardStyle::Elevated);
        let style: CardStyle = serde_json::from_str("\"glass\"").unwrap();
        assert_eq!(style, CardStyle::Glass);
    }

    #[test]
    fn deserialize_null_or_non_string_falls_back() {
        let style: HeaderStyle = serde_json::from_str("null").unwrap();
        assert_eq!(style, HeaderStyle::Classic);
        let spacing: Spacing = serde_json::from_str("42").unwrap();
        assert_eq!(spacing, Spacing::Normal);
    }

    #[test]
    fn serializes_as_machine_value() {
        assert_eq!(serde_json::to_string(&ButtonStyle::Pill).unwrap(), "\"pill\"");
    }

    #[test]
    fn option_labels_are_present() {
        for opt in HeaderStyle::options() {
            assert!(!opt.label.is_empty());
            assert!(!opt.description.is_empty());
        }
    }
}
