//! The rendered view tree and its user actions.

use serde::Serialize;

use crate::catalog::{ContentLayout, HeaderStyle};
use crate::theme::{TemplateKind, ThemeConfig};

use super::style::{Background, ResolvedStyle, TemplateStyle};

/// Receives user interactions from a rendered app.
///
/// Implementations are supplied by the embedding surface; the renderer never
/// views, downloads or persists anything itself and does not catch panics
/// raised here.
pub trait ActionHandler {
    fn on_view_pdf(&mut self, url: &str, title: &str);

    fn on_download(&mut self, url: &str, filename: &str);

    fn on_template_change(&mut self, _template: TemplateKind) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    View,
    Download,
}

/// A button bound to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewAction {
    pub kind: ActionKind,
    pub caption: String,
    pub url: String,
    /// Title for `View`, filename for `Download`.
    pub target: String,
}

impl ViewAction {
    /// Fire this action against `handler`.
    pub fn invoke(&self, handler: &mut dyn ActionHandler) {
        match self.kind {
            ActionKind::View => handler.on_view_pdf(&self.url, &self.target),
            ActionKind::Download => handler.on_download(&self.url, &self.target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBar {
    pub time: String,
    /// `true` when the time follows the preview clock.
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconView {
    Image { url: String },
    Placeholder { initial: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    pub variant: HeaderStyle,
    pub title: String,
    pub description: Option<String>,
    pub icon: IconView,
    pub cover_url: Option<String>,
    pub background: Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductBlock {
    pub section_title: Option<String>,
    pub featured: bool,
    pub label: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub actions: Vec<ViewAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusEntry {
    /// 1-based slot number of the underlying bonus.
    pub slot: u8,
    pub ordinal: Option<String>,
    pub label: String,
    pub thumbnail: Option<String>,
    pub actions: Vec<ViewAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusListBlock {
    pub section_title: Option<String>,
    pub layout: ContentLayout,
    pub entries: Vec<BonusEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSwitcher {
    pub current: TemplateKind,
    pub options: Vec<TemplateKind>,
}

/// A fully rendered app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedApp {
    pub template: TemplateKind,
    pub theme: ThemeConfig,
    pub template_style: TemplateStyle,
    pub style: ResolvedStyle,
    pub status_bar: StatusBar,
    pub header: HeaderBlock,
    pub main_product: Option<ProductBlock>,
    pub bonus_list: Option<BonusListBlock>,
    pub template_switcher: Option<TemplateSwitcher>,
}

impl RenderedApp {
    /// Every action in display order: main product first, then bonuses.
    pub fn actions(&self) -> impl Iterator<Item = &ViewAction> {
        let main = self.main_product.iter().flat_map(|p| p.actions.iter());
        let bonuses = self
            .bonus_list
            .iter()
            .flat_map(|l| l.entries.iter())
            .flat_map(|e| e.actions.iter());
        main.chain(bonuses)
    }

    /// Forward a template selection to `handler`. Ignored when the render
    /// has no template switcher.
    pub fn select_template(&self, template: TemplateKind, handler: &mut dyn ActionHandler) {
        if self.template_switcher.is_some() {
            handler.on_template_change(template);
        }
    }
}
