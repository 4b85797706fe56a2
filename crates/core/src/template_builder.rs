//! Custom template records, drafts and the builder's local state.
//!
//! Persistence happens elsewhere; [`TemplateBuilder`] only mirrors the
//! records the admin is working on and is updated through its `apply_*`
//! methods once the corresponding store call has succeeded. A failed call
//! therefore leaves the local state untouched.
//!
//! Flags:
//! - `is_active` is exclusive: at most one record has it.
//! - `is_published` is independent per record.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{
    lenient_str, ButtonStyle, CardStyle, ContentLayout, HeaderStyle, Spacing, Typography,
};
use crate::error::CoreError;
use crate::theme::{
    null_as_default, TemplateKind, ThemeColors, ThemeConfig, ThemeEffects, ThemeLayout,
};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

/// Maximum length for a custom template name.
pub const MAX_TEMPLATE_NAME_LEN: usize = 200;

/// Maximum length for a custom template description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Appended to the name of a duplicated template.
pub const DUPLICATE_SUFFIX: &str = " (Copy)";

/// Primary colors offered by random template generation.
pub const RANDOM_PALETTE: [&str; 10] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#6366f1", "#8b5cf6",
    "#ec4899", "#64748b",
];

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Closed set of template categories. Unknown names map to `Business`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateCategory {
    #[default]
    Business,
    Education,
    Health,
    Lifestyle,
    Creative,
    Technology,
}

impl TemplateCategory {
    pub const ALL: &'static [TemplateCategory] = &[
        TemplateCategory::Business,
        TemplateCategory::Education,
        TemplateCategory::Health,
        TemplateCategory::Lifestyle,
        TemplateCategory::Creative,
        TemplateCategory::Technology,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "education" => Self::Education,
            "health" => Self::Health,
            "lifestyle" => Self::Lifestyle,
            "creative" => Self::Creative,
            "technology" => Self::Technology,
            _ => Self::Business,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Education => "education",
            Self::Health => "health",
            Self::Lifestyle => "lifestyle",
            Self::Creative => "creative",
            Self::Technology => "technology",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_str(deserializer)?
            .map(|raw| Self::from_name(&raw))
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Records and drafts
// ---------------------------------------------------------------------------

/// A persisted custom template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    /// Base layout renderer.
    pub template: TemplateKind,
    pub colors: ThemeColors,
    pub layout: ThemeLayout,
    pub effects: ThemeEffects,
    pub is_active: bool,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomTemplate {
    pub fn theme(&self) -> ThemeConfig {
        ThemeConfig {
            colors: self.colors.clone(),
            layout: self.layout,
            effects: self.effects,
        }
    }

    /// The editable part of this record.
    pub fn to_draft(&self) -> TemplateDraft {
        TemplateDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            template: self.template,
            colors: self.colors.clone(),
            layout: self.layout,
            effects: self.effects,
            is_active: self.is_active,
            is_published: self.is_published,
        }
    }

    /// Configuration for a duplicate: same look, suffixed name, both flags off.
    pub fn duplicate_draft(&self) -> TemplateDraft {
        TemplateDraft {
            name: format!("{}{DUPLICATE_SUFFIX}", self.name),
            is_active: false,
            is_published: false,
            ..self.to_draft()
        }
    }
}

/// An unsaved template configuration.
///
/// `TemplateDraft::default()` is the seed for every new template: classic
/// base and theme, `business` category, empty name and description, inactive
/// and unpublished.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub template: TemplateKind,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: ThemeColors,
    #[serde(deserialize_with = "null_as_default")]
    pub layout: ThemeLayout,
    #[serde(deserialize_with = "null_as_default")]
    pub effects: ThemeEffects,
    pub is_active: bool,
    pub is_published: bool,
}

impl TemplateDraft {
    pub fn theme(&self) -> ThemeConfig {
        ThemeConfig {
            colors: self.colors.clone(),
            layout: self.layout,
            effects: self.effects,
        }
    }

    /// Check the fields the builder form requires before saving.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_template_name(&self.name)?;
        validate_template_description(&self.description)
    }
}

// ---------------------------------------------------------------------------
// Patches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsPatch {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPatch {
    pub header_style: Option<HeaderStyle>,
    pub content_layout: Option<ContentLayout>,
    pub button_style: Option<ButtonStyle>,
    pub card_style: Option<CardStyle>,
    pub spacing: Option<Spacing>,
    pub typography: Option<Typography>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsPatch {
    pub animations: Option<bool>,
    pub shadows: Option<bool>,
    pub gradients: Option<bool>,
    pub blur: Option<bool>,
}

/// A partial template: used both for creation (merged over the default
/// draft) and for updates (merged over the stored record).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<TemplateCategory>,
    pub template: Option<TemplateKind>,
    pub colors: Option<ColorsPatch>,
    pub layout: Option<LayoutPatch>,
    pub effects: Option<EffectsPatch>,
    pub is_active: Option<bool>,
    pub is_published: Option<bool>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl TemplatePatch {
    /// Merge this patch over `base`. Fields absent from the patch keep the
    /// base value, including both flags.
    pub fn apply_to(self, mut base: TemplateDraft) -> TemplateDraft {
        set(&mut base.name, self.name);
        set(&mut base.description, self.description);
        set(&mut base.category, self.category);
        set(&mut base.template, self.template);

        if let Some(c) = self.colors {
            set(&mut base.colors.primary, c.primary);
            set(&mut base.colors.accent, c.accent);
            set(&mut base.colors.background, c.background);
            set(&mut base.colors.surface, c.surface);
            set(&mut base.colors.text, c.text);
            set(&mut base.colors.text_secondary, c.text_secondary);
        }
        if let Some(l) = self.layout {
            set(&mut base.layout.header_style, l.header_style);
            set(&mut base.layout.content_layout, l.content_layout);
            set(&mut base.layout.button_style, l.button_style);
            set(&mut base.layout.card_style, l.card_style);
            set(&mut base.layout.spacing, l.spacing);
            set(&mut base.layout.typography, l.typography);
        }
        if let Some(e) = self.effects {
            set(&mut base.effects.animations, e.animations);
            set(&mut base.effects.shadows, e.shadows);
            set(&mut base.effects.gradients, e.gradients);
            set(&mut base.effects.blur, e.blur);
        }

        set(&mut base.is_active, self.is_active);
        set(&mut base.is_published, self.is_published);
        base
    }

    /// Draft for a new template: this patch over the default draft.
    pub fn into_new_draft(self) -> TemplateDraft {
        self.apply_to(TemplateDraft::default())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a template name: non-blank and within length limit.
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_TEMPLATE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Template name too long: {} chars (max {MAX_TEMPLATE_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a template description: non-blank and within length limit.
pub fn validate_template_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template description must not be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Template description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
            description.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Random generation
// ---------------------------------------------------------------------------

/// Fill `draft` with one uniformly drawn option per layout axis and a
/// primary color from [`RANDOM_PALETTE`]. Name, description and category
/// are left as they are.
pub fn randomize_draft<R: Rng + ?Sized>(draft: &mut TemplateDraft, rng: &mut R) {
    draft.layout = ThemeLayout {
        header_style: HeaderStyle::random(rng),
        content_layout: ContentLayout::random(rng),
        button_style: ButtonStyle::random(rng),
        card_style: CardStyle::random(rng),
        spacing: Spacing::random(rng),
        typography: Typography::random(rng),
    };
    draft.colors.primary = RANDOM_PALETTE[rng.random_range(0..RANDOM_PALETTE.len())].to_string();
}

// ---------------------------------------------------------------------------
// Builder state
// ---------------------------------------------------------------------------

/// Local state of the template builder screen.
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    templates: Vec<CustomTemplate>,
    draft: TemplateDraft,
    editing: Option<DbId>,
}

impl TemplateBuilder {
    /// Start from the records loaded from the store.
    pub fn new(templates: Vec<CustomTemplate>) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    pub fn templates(&self) -> &[CustomTemplate] {
        &self.templates
    }

    pub fn draft(&self) -> &TemplateDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TemplateDraft {
        &mut self.draft
    }

    /// Id of the record loaded into the draft, if any.
    pub fn editing(&self) -> Option<DbId> {
        self.editing
    }

    pub fn active(&self) -> Option<&CustomTemplate> {
        self.templates.iter().find(|t| t.is_active)
    }

    pub fn published(&self) -> impl Iterator<Item = &CustomTemplate> {
        self.templates.iter().filter(|t| t.is_published)
    }

    /// Reset the draft to the default template.
    pub fn start_new(&mut self) {
        self.draft = TemplateDraft::default();
        self.editing = None;
    }

    /// Load a stored record into the draft for editing.
    pub fn edit(&mut self, id: DbId) -> Result<(), CoreError> {
        let record = self.find(id)?;
        self.draft = record.to_draft();
        self.editing = Some(id);
        Ok(())
    }

    /// The draft, validated, ready to send to the store.
    pub fn submission(&self) -> Result<TemplateDraft, CoreError> {
        self.draft.validate()?;
        Ok(self.draft.clone())
    }

    /// Randomize the draft's layout and primary color.
    pub fn generate_random_template<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        randomize_draft(&mut self.draft, rng);
    }

    /// Template kind and theme for the live preview: the draft while
    /// editing, else the active record, else the classic preset.
    pub fn preview_theme(&self) -> (TemplateKind, Option<ThemeConfig>) {
        if self.editing.is_some() || self.draft != TemplateDraft::default() {
            return (self.draft.template, Some(self.draft.theme()));
        }
        match self.active() {
            Some(active) => (active.template, Some(active.theme())),
            None => (TemplateKind::Classic, None),
        }
    }

    /// Record a successful create; the new record becomes the edited one.
    pub fn apply_created(&mut self, record: CustomTemplate) {
        if record.is_active {
            self.clear_active_except(record.id);
        }
        self.editing = Some(record.id);
        self.draft = record.to_draft();
        self.templates.push(record);
    }

    /// Record a successful update or duplicate.
    pub fn apply_saved(&mut self, record: CustomTemplate) {
        if record.is_active {
            self.clear_active_except(record.id);
        }
        if self.editing == Some(record.id) {
            self.draft = record.to_draft();
        }
        match self.templates.iter_mut().find(|t| t.id == record.id) {
            Some(existing) => *existing = record,
            None => self.templates.push(record),
        }
        self.sync_draft_flags();
    }

    /// Record a successful activation: `id` becomes the only active record.
    pub fn apply_activated(&mut self, id: DbId) -> Result<(), CoreError> {
        self.find(id)?;
        for t in &mut self.templates {
            t.is_active = t.id == id;
        }
        self.sync_draft_flags();
        Ok(())
    }

    pub fn apply_deactivated(&mut self, id: DbId) -> Result<(), CoreError> {
        self.find_mut(id)?.is_active = false;
        self.sync_draft_flags();
        Ok(())
    }

    /// Record a successful publish/unpublish of one record.
    pub fn apply_published(&mut self, id: DbId, published: bool) -> Result<(), CoreError> {
        self.find_mut(id)?.is_published = published;
        self.sync_draft_flags();
        Ok(())
    }

    /// Record a successful delete. No other record is activated in its place.
    pub fn apply_deleted(&mut self, id: DbId) -> Result<(), CoreError> {
        self.find(id)?;
        self.templates.retain(|t| t.id != id);
        if self.editing == Some(id) {
            self.start_new();
        }
        Ok(())
    }

    fn find(&self, id: DbId) -> Result<&CustomTemplate, CoreError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound {
                entity: "CustomTemplate",
                id,
            })
    }

    fn find_mut(&mut self, id: DbId) -> Result<&mut CustomTemplate, CoreError> {
        self.templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound {
                entity: "CustomTemplate",
                id,
            })
    }

    fn clear_active_except(&mut self, id: DbId) {
        for t in &mut self.templates {
            if t.id != id {
                t.is_active = false;
            }
        }
    }

    /// Mirror the edited record's flags into the draft.
    fn sync_draft_flags(&mut self) {
        let Some(id) = self.editing else {
            return;
        };
        if let Some(record) = self.templates.iter().find(|t| t.id == id) {
            self.draft.is_active = record.is_active;
            self.draft.is_published = record.is_published;
        }
    }
}
