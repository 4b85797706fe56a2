//! Theme renderer.
//!
//! [`render`] is a pure mapping from a template, the app's content and the
//! viewer options to a [`RenderedApp`] tree. One parameterized routine
//! covers all five templates: the template kind selects a
//! [`TemplateStyle`], the resolved theme's layout axes drive the rest.
//!
//! Rendering never fails. Missing content falls back to default labels and
//! a placeholder icon, and actions without a target are omitted.

pub mod status_bar;
pub mod style;
pub mod view;

use chrono::Utc;

use crate::app_content::{AppContentData, BonusSlot};
use crate::labels::RenderLabels;
use crate::theme::{is_valid_hex_color, resolve_theme, TemplateKind, ThemeConfig};

pub use status_bar::{StatusClock, PLACEHOLDER_TIME};
pub use style::{header_shows_cover, Background, ResolvedStyle, TemplateStyle};
pub use view::{
    ActionHandler, ActionKind, BonusEntry, BonusListBlock, HeaderBlock, IconView, ProductBlock,
    RenderedApp, StatusBar, TemplateSwitcher, ViewAction,
};

/// Viewer-side inputs to a render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Overrides the plan limit carried by the content.
    pub user_plan_limits: Option<u8>,
    /// A download handler is available.
    pub can_download: bool,
    /// A template-change handler is available.
    pub can_change_template: bool,
    pub is_preview: bool,
    /// Supersedes the template's preset when present.
    pub custom_theme: Option<ThemeConfig>,
    /// Preview clock; computed on the spot when previewing without one.
    pub clock: Option<StatusClock>,
}

/// Render `content` with `template`.
pub fn render(
    template: TemplateKind,
    content: &AppContentData,
    options: &RenderOptions,
    labels: &RenderLabels,
) -> RenderedApp {
    let theme = resolve_theme(template, options.custom_theme.as_ref());
    let template_style = TemplateStyle::for_template(template);
    let style = ResolvedStyle::from_theme(&theme);

    let plan_limits = options
        .user_plan_limits
        .unwrap_or(content.user_plan_limits);
    let download = options.can_download && content.downloads_allowed();

    let status_bar = render_status_bar(options);
    let header = render_header(content, &theme, &style, labels);
    let main_product = render_main_product(content, &template_style, download, labels);
    let bonus_list = render_bonus_list(content, &theme, &template_style, plan_limits, download, labels);
    let template_switcher = options.can_change_template.then(|| TemplateSwitcher {
        current: template,
        options: TemplateKind::ALL.to_vec(),
    });

    RenderedApp {
        template,
        theme,
        template_style,
        style,
        status_bar,
        header,
        main_product,
        bonus_list,
        template_switcher,
    }
}

fn render_status_bar(options: &RenderOptions) -> StatusBar {
    if !options.is_preview {
        return StatusBar {
            time: PLACEHOLDER_TIME.to_string(),
            live: false,
        };
    }
    let time = match &options.clock {
        Some(clock) => clock.text().to_string(),
        None => StatusClock::new(Utc::now()).text().to_string(),
    };
    StatusBar { time, live: true }
}

fn render_header(
    content: &AppContentData,
    theme: &ThemeConfig,
    style: &ResolvedStyle,
    labels: &RenderLabels,
) -> HeaderBlock {
    let title = content
        .name
        .clone()
        .unwrap_or_else(|| labels.default_app_name.clone());

    let icon = match &content.icon_url {
        Some(url) => IconView::Image { url: url.clone() },
        None => {
            let initial = title
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            let color = content
                .brand_color
                .as_deref()
                .filter(|c| is_valid_hex_color(c))
                .unwrap_or(theme.colors.primary.as_str())
                .to_string();
            IconView::Placeholder { initial, color }
        }
    };

    let variant = theme.layout.header_style;
    let cover_url = if header_shows_cover(variant) {
        content.cover_url.clone()
    } else {
        None
    };

    HeaderBlock {
        variant,
        title,
        description: content.description.clone(),
        icon,
        cover_url,
        background: style.header_background.clone(),
    }
}

/// View action plus, when allowed, a download action for one document.
fn document_actions(url: &str, title: &str, download: bool, labels: &RenderLabels) -> Vec<ViewAction> {
    let mut actions = vec![ViewAction {
        kind: ActionKind::View,
        caption: labels.view_action.clone(),
        url: url.to_string(),
        target: title.to_string(),
    }];
    if download {
        actions.push(ViewAction {
            kind: ActionKind::Download,
            caption: labels.download_action.clone(),
            url: url.to_string(),
            target: download_filename(title),
        });
    }
    actions
}

/// Filename offered for a download: the title with a `.pdf` extension.
pub fn download_filename(title: &str) -> String {
    if title.to_ascii_lowercase().ends_with(".pdf") {
        title.to_string()
    } else {
        format!("{title}.pdf")
    }
}

fn render_main_product(
    content: &AppContentData,
    template_style: &TemplateStyle,
    download: bool,
    labels: &RenderLabels,
) -> Option<ProductBlock> {
    let main = &content.main_product;
    let url = main.url.as_deref()?;
    let label = main
        .label
        .clone()
        .unwrap_or_else(|| labels.default_main_label.clone());

    Some(ProductBlock {
        section_title: template_style
            .section_titles
            .then(|| labels.main_product_title.clone()),
        featured: template_style.featured_main,
        actions: document_actions(url, &label, download, labels),
        description: main.description.clone(),
        thumbnail: main.thumbnail.clone().filter(|_| template_style.show_thumbnails),
        label,
    })
}

fn render_bonus_entry(
    bonus: &BonusSlot,
    position: usize,
    template_style: &TemplateStyle,
    download: bool,
    labels: &RenderLabels,
) -> Option<BonusEntry> {
    let url = bonus.url.as_deref()?;
    let label = bonus
        .label
        .clone()
        .unwrap_or_else(|| labels.bonus_label(bonus.slot));

    Some(BonusEntry {
        slot: bonus.slot,
        ordinal: template_style
            .numbered_bonuses
            .then(|| format!("{:02}", position + 1)),
        actions: document_actions(url, &label, download, labels),
        thumbnail: bonus.thumbnail.clone().filter(|_| template_style.show_thumbnails),
        label,
    })
}

fn render_bonus_list(
    content: &AppContentData,
    theme: &ThemeConfig,
    template_style: &TemplateStyle,
    plan_limits: u8,
    download: bool,
    labels: &RenderLabels,
) -> Option<BonusListBlock> {
    if plan_limits <= 1 {
        return None;
    }

    let entries: Vec<BonusEntry> = content
        .visible_bonuses(plan_limits)
        .enumerate()
        .filter_map(|(i, b)| render_bonus_entry(b, i, template_style, download, labels))
        .collect();

    if entries.is_empty() {
        return None;
    }

    Some(BonusListBlock {
        section_title: template_style
            .section_titles
            .then(|| labels.bonus_section_title.clone()),
        layout: theme.layout.content_layout,
        entries,
    })
}
