//! Native preview of the page.
//!
//! [`PreviewView`] renders a state snapshot into editor markup (with the
//! drag handles and test hooks the editor needs) plus a [`ViewFrame`] of
//! laid-out boxes for the capture backends.

use std::fmt::Write;

use page_core::{EditorState, Element, Section, Selection};

use crate::layout::{layout_page, ViewFrame};
use crate::view::{RenderedView, ScrollOffset, StyleSheet, ViewSize, ViewStyle};
use crate::xml::{css_value, escape_xml};

/// Id of the preview's root node.
pub const ROOT_ID: &str = "landing-page-root";

/// Rules of the built-in preview stylesheet.
pub const BASE_RULES: &[&str] = &[
    "*, *::before, *::after { box-sizing: border-box; }",
    "body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; }",
    ".lp-root { width: 100%; }",
    ".lp-section { padding: 64px 48px; min-height: 120px; display: flex; flex-direction: column; gap: 16px; }",
    ".lp-text { margin: 0; white-space: pre-wrap; line-height: 1.4; }",
    ".lp-image { display: block; margin: 0 auto; max-width: 100%; object-fit: cover; }",
    ".lp-button { display: inline-block; align-self: center; padding: 12px 24px; text-decoration: none; font-weight: 600; }",
];

/// Preview configuration.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Visible viewport size.
    pub viewport: ViewSize,
    /// Stylesheets attached in addition to the built-in one.
    pub extra_stylesheets: Vec<StyleSheet>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            viewport: ViewSize {
                width: 1280.0,
                height: 800.0,
            },
            extra_stylesheets: Vec::new(),
        }
    }
}

/// In-process rendered view of the page.
#[derive(Debug, Clone)]
pub struct PreviewView {
    config: PreviewConfig,
    style: ViewStyle,
    scroll: ScrollOffset,
    frame: ViewFrame,
    body: String,
}

impl PreviewView {
    /// Create an empty preview.
    #[must_use]
    pub fn new(config: PreviewConfig) -> Self {
        let mut view = Self {
            config,
            style: ViewStyle::default(),
            scroll: ScrollOffset::ORIGIN,
            frame: ViewFrame::default(),
            body: String::new(),
        };
        view.render(&EditorState::new());
        view
    }

    /// Create a preview already rendered from `state`.
    #[must_use]
    pub fn from_state(config: PreviewConfig, state: &EditorState) -> Self {
        let mut view = Self::new(config);
        view.render(state);
        view
    }

    fn inline_px(value: Option<&str>) -> Option<f32> {
        value.and_then(|v| page_core::parse_px(v).ok())
    }
}

impl RenderedView for PreviewView {
    fn inline_style(&self) -> ViewStyle {
        self.style.clone()
    }

    fn set_inline_style(&mut self, style: &ViewStyle) {
        self.style = style.clone();
        // Re-clamp against the new visible box.
        let offset = self.scroll;
        self.scroll_to(offset);
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn scroll_to(&mut self, offset: ScrollOffset) {
        let client = self.client_size();
        let extent = self.scroll_size();
        self.scroll = ScrollOffset {
            x: offset.x.clamp(0.0, (extent.width - client.width).max(0.0)),
            y: offset.y.clamp(0.0, (extent.height - client.height).max(0.0)),
        };
    }

    fn client_size(&self) -> ViewSize {
        ViewSize {
            width: Self::inline_px(self.style.width.as_deref())
                .unwrap_or(self.config.viewport.width),
            height: Self::inline_px(self.style.height.as_deref())
                .unwrap_or(self.config.viewport.height),
        }
    }

    fn scroll_size(&self) -> ViewSize {
        let client = self.client_size();
        ViewSize {
            width: self.frame.width.max(client.width),
            height: self.frame.height.max(client.height),
        }
    }

    fn outer_html(&self) -> String {
        let style = self.style.to_css();
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div id="{ROOT_ID}" class="lp-root" data-testid="page-preview""#
        );
        if !style.is_empty() {
            let _ = write!(html, r#" style="{}""#, escape_xml(&style));
        }
        html.push('>');
        html.push_str(&self.body);
        html.push_str("</div>");
        html
    }

    fn stylesheets(&self) -> Vec<StyleSheet> {
        let mut sheets = vec![StyleSheet::inline(
            BASE_RULES.iter().map(|r| (*r).to_string()).collect(),
        )];
        sheets.extend(self.config.extra_stylesheets.iter().cloned());
        sheets
    }

    fn frame(&self) -> &ViewFrame {
        &self.frame
    }

    fn render(&mut self, state: &EditorState) {
        self.frame = layout_page(&state.sections, self.config.viewport.width);
        self.body = render_body(state);
        let offset = self.scroll;
        self.scroll_to(offset);
    }
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

fn render_body(state: &EditorState) -> String {
    let mut html = String::new();
    for section in &state.sections {
        render_section(&mut html, section, &state.selection);
    }
    html
}

fn render_section(html: &mut String, section: &Section, selection: &Selection) {
    let id = section.id;
    let _ = write!(
        html,
        r#"<section class="lp-section lp-section-{kind}" data-editor-section="{id}" data-rbd-draggable-id="{id}" data-testid="section-{id}" draggable="true""#,
        kind = section.kind.as_str(),
    );
    if selection.section_id() == Some(id) {
        html.push_str(r#" data-editor-selected="true""#);
    }
    let _ = write!(
        html,
        r#" aria-label="{}" style="background-color: {};">"#,
        escape_xml(&section.title),
        css_value(&section.background_color),
    );

    for element in &section.elements {
        render_element(html, element, selection.element_id() == Some(element.id()));
    }
    html.push_str("</section>");
}

fn render_element(html: &mut String, element: &Element, selected: bool) {
    let id = element.id();
    let hooks = format!(
        r#"data-editor-element="{id}" data-testid="element-{id}"{}"#,
        if selected {
            r#" data-editor-selected="true""#
        } else {
            ""
        }
    );
    match element {
        Element::Text(text) => {
            let _ = write!(
                html,
                r#"<p class="lp-element lp-text" {hooks} style="font-size: {}; color: {}; font-weight: {}; text-align: {};">{}</p>"#,
                css_value(&text.font_size),
                css_value(&text.color),
                css_value(&text.font_weight),
                text.text_align.as_css(),
                escape_xml(&text.content),
            );
        }
        Element::Image(image) => {
            let _ = write!(
                html,
                r#"<img class="lp-element lp-image" {hooks} src="{}" alt="{}" style="width: {}; height: {};">"#,
                escape_xml(&image.src),
                escape_xml(&image.alt),
                css_value(&image.width),
                css_value(&image.height),
            );
        }
        Element::Button(button) => {
            let _ = write!(
                html,
                r#"<a class="lp-element lp-button" {hooks} href="{}" style="background-color: {}; color: {}; border-radius: {};">{}</a>"#,
                escape_xml(&button.url),
                css_value(&button.background_color),
                css_value(&button.text_color),
                css_value(&button.border_radius),
                escape_xml(&button.label),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_core::{EditorStore, SectionKind};

    fn tall_state() -> EditorState {
        let store = EditorStore::new();
        for kind in SectionKind::ALL {
            store.add_section(kind);
        }
        store.snapshot()
    }

    #[test]
    fn test_markup_carries_editor_hooks() {
        let store = EditorStore::new();
        let hero = store.add_section(SectionKind::Hero);
        store.select_section(hero);
        let view = PreviewView::from_state(PreviewConfig::default(), &store.snapshot());

        let html = view.outer_html();
        assert!(html.starts_with(r#"<div id="landing-page-root""#));
        assert!(html.contains(&format!(r#"data-rbd-draggable-id="{hero}""#)));
        assert!(html.contains(r#"data-editor-selected="true""#));
        assert!(html.contains("lp-button"));
        assert!(html.contains("background-color: #1e3a8a;"));
    }

    #[test]
    fn test_content_is_escaped() {
        let store = EditorStore::new();
        let section = store.add_section(SectionKind::Custom);
        store.add_element(section, Element::text("<script>alert(1)</script>"));
        let view = PreviewView::from_state(PreviewConfig::default(), &store.snapshot());
        let html = view.outer_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut view = PreviewView::from_state(PreviewConfig::default(), &tall_state());
        let extent = view.scroll_size();
        assert!(extent.height > 800.0);

        view.scroll_to(ScrollOffset { x: 50.0, y: 1.0e6 });
        let offset = view.scroll_offset();
        assert!(offset.x.abs() < f32::EPSILON);
        assert!((offset.y - (extent.height - 800.0)).abs() < 0.001);
    }

    #[test]
    fn test_inline_height_changes_client_size() {
        let mut view = PreviewView::from_state(PreviewConfig::default(), &tall_state());
        let extent = view.scroll_size();
        view.set_inline_style(&ViewStyle {
            height: Some(format!("{}px", extent.height)),
            ..ViewStyle::default()
        });
        assert!((view.client_size().height - extent.height).abs() < 0.001);
        assert!(view.outer_html().contains("style=\"height:"));
    }

    #[test]
    fn test_stylesheets_include_extras() {
        let config = PreviewConfig {
            extra_stylesheets: vec![StyleSheet::opaque("https://fonts.example.com/a.css")],
            ..PreviewConfig::default()
        };
        let view = PreviewView::new(config);
        let sheets = view.stylesheets();
        assert_eq!(sheets.len(), 2);
        assert!(sheets[0].rules.is_some());
        assert!(sheets[1].rules.is_none());
    }
}
