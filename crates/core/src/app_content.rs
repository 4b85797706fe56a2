//! App content payload consumed by the renderer.
//!
//! The stored/wire form is a flat record ([`AppContentRecord`]) whose field
//! names follow the app table. Bonus slots 1–4 carry a thumbnail there,
//! slots 5–9 do not. Internally the payload is an [`AppContentData`] with a
//! fixed list of nine [`BonusSlot`]s.

use serde::{Deserialize, Serialize};

use crate::plan::{clamp_plan_limit, MIN_PLAN_LIMIT};

/// Number of bonus slots an app can carry.
pub const BONUS_SLOT_COUNT: u8 = 9;

/// Bonus slots that have a thumbnail field in the stored record.
pub const BONUS_SLOTS_WITH_THUMBNAIL: u8 = 4;

/// The main downloadable item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainProduct {
    pub url: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// One of the nine optional secondary items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusSlot {
    /// 1-based slot number; stable regardless of which other slots are set.
    pub slot: u8,
    pub url: Option<String>,
    pub label: Option<String>,
    pub thumbnail: Option<String>,
}

/// The end user's product and branding payload.
///
/// Every field is optional in practice; the renderer supplies display
/// fallbacks. `bonuses` always holds exactly [`BONUS_SLOT_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AppContentRecord", into = "AppContentRecord")]
pub struct AppContentData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand_color: Option<String>,
    pub icon_url: Option<String>,
    pub cover_url: Option<String>,
    pub main_product: MainProduct,
    pub bonuses: Vec<BonusSlot>,
    /// `None` means downloads are allowed.
    pub allow_pdf_download: Option<bool>,
    /// Visible content slots (main product included), always in `1..=10`.
    pub user_plan_limits: u8,
}

impl Default for AppContentData {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            brand_color: None,
            icon_url: None,
            cover_url: None,
            main_product: MainProduct::default(),
            bonuses: (1..=BONUS_SLOT_COUNT)
                .map(|slot| BonusSlot {
                    slot,
                    ..BonusSlot::default()
                })
                .collect(),
            allow_pdf_download: None,
            user_plan_limits: MIN_PLAN_LIMIT,
        }
    }
}

impl AppContentData {
    /// Whether download actions may be offered at all.
    pub fn downloads_allowed(&self) -> bool {
        self.allow_pdf_download != Some(false)
    }

    /// Bonus slots that should be shown under `plan_limits`: slot `n` is
    /// visible iff `n < plan_limits` and its URL is set.
    pub fn visible_bonuses(&self, plan_limits: u8) -> impl Iterator<Item = &BonusSlot> {
        self.bonuses
            .iter()
            .filter(move |b| b.slot < plan_limits && b.url.is_some())
    }

    /// Set a bonus slot's URL and label. Out-of-range slots are ignored.
    pub fn with_bonus(mut self, slot: u8, url: &str, label: Option<&str>) -> Self {
        if let Some(entry) = self.bonuses.iter_mut().find(|b| b.slot == slot) {
            entry.url = non_empty(Some(url.to_string()));
            entry.label = label.map(str::to_string);
        }
        self
    }

    /// Sample content used by the admin template preview.
    pub fn preview_sample() -> Self {
        let mut data = Self {
            name: Some("Sample App".into()),
            description: Some("A preview of how your template looks".into()),
            brand_color: Some("#3b82f6".into()),
            main_product: MainProduct {
                url: Some("https://example.com/main.pdf".into()),
                label: Some("Complete Guide".into()),
                description: Some("Everything you need in one PDF".into()),
                thumbnail: None,
            },
            user_plan_limits: 4,
            ..Self::default()
        };
        for (slot, label) in [(1, "Checklist"), (2, "Workbook"), (3, "Bonus Recipes")] {
            data = data.with_bonus(slot, &format!("https://example.com/bonus{slot}.pdf"), Some(label));
        }
        data
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// Flat record form of [`AppContentData`], as stored in the `apps.content`
/// column and accepted by the render endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppContentRecord {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub cor: Option<String>,
    pub icone_url: Option<String>,
    pub capa_url: Option<String>,
    pub produto_principal_url: Option<String>,
    pub main_product_label: Option<String>,
    pub main_product_description: Option<String>,
    pub produto_principal_thumbnail: Option<String>,
    pub bonus1_url: Option<String>,
    pub bonus1_label: Option<String>,
    pub bonus1_thumbnail: Option<String>,
    pub bonus2_url: Option<String>,
    pub bonus2_label: Option<String>,
    pub bonus2_thumbnail: Option<String>,
    pub bonus3_url: Option<String>,
    pub bonus3_label: Option<String>,
    pub bonus3_thumbnail: Option<String>,
    pub bonus4_url: Option<String>,
    pub bonus4_label: Option<String>,
    pub bonus4_thumbnail: Option<String>,
    pub bonus5_url: Option<String>,
    pub bonus5_label: Option<String>,
    pub bonus6_url: Option<String>,
    pub bonus6_label: Option<String>,
    pub bonus7_url: Option<String>,
    pub bonus7_label: Option<String>,
    pub bonus8_url: Option<String>,
    pub bonus8_label: Option<String>,
    pub bonus9_url: Option<String>,
    pub bonus9_label: Option<String>,
    pub allow_pdf_download: Option<bool>,
    pub user_plan_limits: Option<i64>,
}

impl From<AppContentRecord> for AppContentData {
    fn from(r: AppContentRecord) -> Self {
        let slots = [
            (r.bonus1_url, r.bonus1_label, r.bonus1_thumbnail),
            (r.bonus2_url, r.bonus2_label, r.bonus2_thumbnail),
            (r.bonus3_url, r.bonus3_label, r.bonus3_thumbnail),
            (r.bonus4_url, r.bonus4_label, r.bonus4_thumbnail),
            (r.bonus5_url, r.bonus5_label, None),
            (r.bonus6_url, r.bonus6_label, None),
            (r.bonus7_url, r.bonus7_label, None),
            (r.bonus8_url, r.bonus8_label, None),
            (r.bonus9_url, r.bonus9_label, None),
        ];
        let bonuses = slots
            .into_iter()
            .zip(1..=BONUS_SLOT_COUNT)
            .map(|((url, label, thumbnail), slot)| BonusSlot {
                slot,
                url: non_empty(url),
                label: non_empty(label),
                thumbnail: non_empty(thumbnail),
            })
            .collect();

        Self {
            name: non_empty(r.nome),
            description: non_empty(r.descricao),
            brand_color: non_empty(r.cor),
            icon_url: non_empty(r.icone_url),
            cover_url: non_empty(r.capa_url),
            main_product: MainProduct {
                url: non_empty(r.produto_principal_url),
                label: non_empty(r.main_product_label),
                description: non_empty(r.main_product_description),
                thumbnail: non_empty(r.produto_principal_thumbnail),
            },
            bonuses,
            allow_pdf_download: r.allow_pdf_download,
            user_plan_limits: r
                .user_plan_limits
                .map_or(MIN_PLAN_LIMIT, clamp_plan_limit),
        }
    }
}

impl From<AppContentData> for AppContentRecord {
    fn from(d: AppContentData) -> Self {
        let mut r = AppContentRecord {
            nome: d.name,
            descricao: d.description,
            cor: d.brand_color,
            icone_url: d.icon_url,
            capa_url: d.cover_url,
            produto_principal_url: d.main_product.url,
            main_product_label: d.main_product.label,
            main_product_description: d.main_product.description,
            produto_principal_thumbnail: d.main_product.thumbnail,
            allow_pdf_download: d.allow_pdf_download,
            user_plan_limits: Some(i64::from(d.user_plan_limits)),
            ..AppContentRecord::default()
        };
        for b in d.bonuses {
            let (url, label, thumb) = match b.slot {
                1 => (&mut r.bonus1_url, &mut r.bonus1_label, Some(&mut r.bonus1_thumbnail)),
                2 => (&mut r.bonus2_url, &mut r.bonus2_label, Some(&mut r.bonus2_thumbnail)),
                3 => (&mut r.bonus3_url, &mut r.bonus3_label, Some(&mut r.bonus3_thumbnail)),
                4 => (&mut r.bonus4_url, &mut r.bonus4_label, Some(&mut r.bonus4_thumbnail)),
                5 => (&mut r.bonus5_url, &mut r.bonus5_label, None),
                6 => (&mut r.bonus6_url, &mut r.bonus6_label, None),
                7 => (&mut r.bonus7_url, &mut r.bonus7_label, None),
                8 => (&mut r.bonus8_url, &mut r.bonus8_label, None),
                9 => (&mut r.bonus9_url, &mut r.bonus9_label, None),
                _ => continue,
            };
            *url = b.url;
            *label = b.label;
            if let Some(thumb) = thumb {
                *thumb = b.thumbnail;
            }
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record_has_nine_unset_slots() {
        let data: AppContentData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data.bonuses.len(), BONUS_SLOT_COUNT as usize);
        assert!(data.bonuses.iter().all(|b| b.url.is_none()));
        assert_eq!(data.user_plan_limits, 1);
        assert!(data.downloads_allowed());
    }

    #[test]
    fn wire_names_are_mapped() {
        let data: AppContentData = serde_json::from_value(json!({
            "nome": "Demo",
            "produto_principal_url": "x.pdf",
            "bonus2_url": "b2.pdf",
            "bonus2_thumbnail": "b2.png",
            "allow_pdf_download": false,
            "user_plan_limits": 3
        }))
        .unwrap();

        assert_eq!(data.name.as_deref(), Some("Demo"));
        assert_eq!(data.main_product.url.as_deref(), Some("x.pdf"));
        assert_eq!(data.bonuses[1].url.as_deref(), Some("b2.pdf"));
        assert_eq!(data.bonuses[1].thumbnail.as_deref(), Some("b2.png"));
        assert!(!data.downloads_allowed());
        assert_eq!(data.user_plan_limits, 3);
    }

    #[test]
    fn late_slots_have_no_thumbnail_field() {
        let data: AppContentData = serde_json::from_value(json!({
            "bonus5_url": "b5.pdf",
            "bonus5_thumbnail": "ignored.png"
        }))
        .unwrap();
        assert_eq!(data.bonuses[4].url.as_deref(), Some("b5.pdf"));
        assert_eq!(data.bonuses[4].thumbnail, None);

        let out = serde_json::to_value(&data).unwrap();
        assert!(out.get("bonus5_thumbnail").is_none());
        assert!(out.get("bonus4_thumbnail").is_some());
    }

    #[test]
    fn blank_strings_count_as_unset() {
        let data: AppContentData = serde_json::from_value(json!({
            "nome": "   ",
            "bonus1_url": ""
        }))
        .unwrap();
        assert_eq!(data.name, None);
        assert_eq!(data.bonuses[0].url, None);
    }

    #[test]
    fn plan_limits_are_clamped() {
        let data: AppContentData =
            serde_json::from_value(json!({ "user_plan_limits": 99 })).unwrap();
        assert_eq!(data.user_plan_limits, 10);
        let data: AppContentData =
            serde_json::from_value(json!({ "user_plan_limits": 0 })).unwrap();
        assert_eq!(data.user_plan_limits, 1);
    }

    #[test]
    fn visible_bonuses_respects_limit_and_url() {
        let data = AppContentData::default()
            .with_bonus(1, "b1.pdf", None)
            .with_bonus(3, "b3.pdf", None)
            .with_bonus(4, "b4.pdf", None);

        let slots: Vec<u8> = data.visible_bonuses(4).map(|b| b.slot).collect();
        assert_eq!(slots, vec![1, 3]);

        let slots: Vec<u8> = data.visible_bonuses(10).map(|b| b.slot).collect();
        assert_eq!(slots, vec![1, 3, 4]);

        assert_eq!(data.visible_bonuses(1).count(), 0);
    }

    #[test]
    fn record_round_trip_preserves_slots() {
        let data = AppContentData::preview_sample();
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["bonus2_label"], "Workbook");
        let back: AppContentData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }
}
