//! Box layout of the rendered page.
//!
//! The preview stacks sections vertically and, inside each section, stacks
//! elements with a fixed gap. The resulting [`ViewFrame`] is what capture
//! backends draw; it is not a general layout engine.

use page_core::{CssLength, Element, ElementId, Section, SectionId, TextAlign};

/// Vertical padding inside a section.
pub const SECTION_PADDING_Y: f32 = 64.0;
/// Horizontal padding inside a section.
pub const SECTION_PADDING_X: f32 = 48.0;
/// Gap between stacked elements.
pub const ELEMENT_GAP: f32 = 16.0;
/// Height of a section with no elements.
pub const EMPTY_SECTION_HEIGHT: f32 = 120.0;
/// Font size used when an element's font size does not parse.
pub const FALLBACK_FONT_PX: f32 = 16.0;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.4;
/// Height of a button.
pub const BUTTON_HEIGHT: f32 = 48.0;

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.55;

/// An axis-aligned rectangle in page pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A drawable box produced by layout.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameNode {
    /// A section background.
    Block {
        /// Source section.
        section: SectionId,
        /// Bounds.
        rect: Rect,
        /// CSS background color.
        fill: String,
    },
    /// Wrapped text.
    Text {
        /// Source element.
        element: ElementId,
        /// Bounds.
        rect: Rect,
        /// Wrapped lines.
        lines: Vec<String>,
        /// Font size in pixels.
        font_size: f32,
        /// CSS color.
        color: String,
        /// Whether to draw bold.
        bold: bool,
        /// Horizontal alignment.
        align: TextAlign,
    },
    /// An image.
    Image {
        /// Source element.
        element: ElementId,
        /// Bounds.
        rect: Rect,
        /// Image URL or data URI.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// A link button.
    Button {
        /// Source element.
        element: ElementId,
        /// Bounds.
        rect: Rect,
        /// Caption.
        label: String,
        /// Link target.
        url: String,
        /// CSS background color.
        fill: String,
        /// CSS text color.
        text_color: String,
        /// Corner radius in pixels.
        radius: f32,
    },
}

impl FrameNode {
    /// Bounds of the node.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Block { rect, .. }
            | Self::Text { rect, .. }
            | Self::Image { rect, .. }
            | Self::Button { rect, .. } => *rect,
        }
    }
}

/// The laid-out page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFrame {
    /// Page width in pixels.
    pub width: f32,
    /// Total content height in pixels.
    pub height: f32,
    /// Boxes in paint order.
    pub nodes: Vec<FrameNode>,
}

/// Lay out sections top to bottom at the given page width.
#[must_use]
pub fn layout_page(sections: &[Section], width: f32) -> ViewFrame {
    let width = width.max(1.0);
    let content_width = (width - SECTION_PADDING_X * 2.0).max(1.0);
    let mut nodes = Vec::new();
    let mut top = 0.0_f32;

    for section in sections {
        let block_index = nodes.len();
        nodes.push(FrameNode::Block {
            section: section.id,
            rect: Rect::default(),
            fill: section.background_color.clone(),
        });

        let mut cursor = top + SECTION_PADDING_Y;
        for (index, element) in section.elements.iter().enumerate() {
            if index > 0 {
                cursor += ELEMENT_GAP;
            }
            let node = layout_element(element, SECTION_PADDING_X, cursor, content_width);
            cursor = node.rect().bottom();
            nodes.push(node);
        }

        let height = if section.elements.is_empty() {
            EMPTY_SECTION_HEIGHT
        } else {
            cursor + SECTION_PADDING_Y - top
        };
        nodes[block_index] = FrameNode::Block {
            section: section.id,
            rect: Rect {
                x: 0.0,
                y: top,
                width,
                height,
            },
            fill: section.background_color.clone(),
        };
        top += height;
    }

    ViewFrame {
        width,
        height: top,
        nodes,
    }
}

fn layout_element(element: &Element, x: f32, y: f32, content_width: f32) -> FrameNode {
    match element {
        Element::Text(text) => {
            let font_size = match page_core::parse_px(&text.font_size) {
                Ok(px) if px > 0.0 => px,
                _ => {
                    tracing::debug!(
                        element = %text.id,
                        font_size = %text.font_size,
                        "unparseable font size"
                    );
                    FALLBACK_FONT_PX
                }
            };
            let lines = wrap_text(&text.content, font_size, content_width);
            #[allow(clippy::cast_precision_loss)]
            let height = lines.len() as f32 * font_size * LINE_HEIGHT;
            FrameNode::Text {
                element: text.id,
                rect: Rect {
                    x,
                    y,
                    width: content_width,
                    height,
                },
                lines,
                font_size,
                color: text.color.clone(),
                bold: is_bold(&text.font_weight),
                align: text.text_align,
            }
        }
        Element::Image(image) => {
            let width = CssLength::parse(&image.width)
                .map_or(content_width, |w| w.resolve(content_width, content_width))
                .clamp(1.0, content_width);
            let height = CssLength::parse(&image.height)
                .map_or(width * 9.0 / 16.0, |h| h.resolve(width, width * 9.0 / 16.0))
                .max(1.0);
            FrameNode::Image {
                element: image.id,
                rect: Rect {
                    x: x + (content_width - width) / 2.0,
                    y,
                    width,
                    height,
                },
                src: image.src.clone(),
                alt: image.alt.clone(),
            }
        }
        Element::Button(button) => {
            #[allow(clippy::cast_precision_loss)]
            let label_width = button.label.chars().count() as f32 * 16.0 * GLYPH_ADVANCE;
            let width = (label_width + 48.0).min(content_width);
            let radius = page_core::parse_px(&button.border_radius).unwrap_or(0.0);
            FrameNode::Button {
                element: button.id,
                rect: Rect {
                    x: x + (content_width - width) / 2.0,
                    y,
                    width,
                    height: BUTTON_HEIGHT,
                },
                label: button.label.clone(),
                url: button.url.clone(),
                fill: button.background_color.clone(),
                text_color: button.text_color.clone(),
                radius: radius.min(BUTTON_HEIGHT / 2.0),
            }
        }
    }
}

/// Whether a CSS font weight renders bold.
#[must_use]
pub fn is_bold(weight: &str) -> bool {
    let weight = weight.trim().to_ascii_lowercase();
    weight == "bold" || weight == "bolder" || weight.parse::<u16>().is_ok_and(|w| w >= 600)
}

/// Greedy word wrap using an average glyph width estimate.
///
/// `\n` starts a new paragraph; an empty paragraph keeps one empty line.
#[must_use]
pub fn wrap_text(content: &str, font_size: f32, max_width: f32) -> Vec<String> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_chars = ((max_width / (font_size * GLYPH_ADVANCE)).floor() as usize).max(1);
    let mut lines = Vec::new();

    for paragraph in content.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_core::{ElementPatch, SectionKind, TextPatch};

    #[test]
    fn test_sections_stack_vertically() {
        let a = Section::new(SectionKind::Custom);
        let b = Section::new(SectionKind::Custom).with_elements(vec![Element::text("Hi")]);
        let frame = layout_page(&[a, b], 800.0);

        let blocks: Vec<_> = frame
            .nodes
            .iter()
            .filter(|n| matches!(n, FrameNode::Block { .. }))
            .map(FrameNode::rect)
            .collect();
        assert_eq!(blocks.len(), 2);
        assert!((blocks[0].height - EMPTY_SECTION_HEIGHT).abs() < f32::EPSILON);
        assert!((blocks[1].y - EMPTY_SECTION_HEIGHT).abs() < f32::EPSILON);
        assert!((frame.height - blocks[1].bottom()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_height_follows_font_size() {
        let mut text = Element::text("One line");
        text.apply(ElementPatch::Text(TextPatch {
            font_size: Some("20px".to_string()),
            ..TextPatch::default()
        }))
        .expect("same kind");
        let section = Section::new(SectionKind::Custom).with_elements(vec![text]);
        let frame = layout_page(&[section], 800.0);

        let FrameNode::Text { rect, font_size, .. } = &frame.nodes[1] else {
            panic!("expected text node");
        };
        assert!((font_size - 20.0).abs() < f32::EPSILON);
        assert!((rect.height - 28.0).abs() < 0.001);
    }

    #[test]
    fn test_malformed_font_size_falls_back() {
        let mut text = Element::text("x");
        text.apply(ElementPatch::Text(TextPatch {
            font_size: Some("huge".to_string()),
            ..TextPatch::default()
        }))
        .expect("same kind");
        let frame = layout_page(
            &[Section::new(SectionKind::Custom).with_elements(vec![text])],
            800.0,
        );
        let FrameNode::Text { font_size, .. } = &frame.nodes[1] else {
            panic!("expected text node");
        };
        assert!((font_size - FALLBACK_FONT_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn test_image_percent_width_is_centered() {
        let mut image = Element::image("https://example.com/a.png", "A");
        if let Element::Image(img) = &mut image {
            img.width = "50%".to_string();
            img.height = "100px".to_string();
        }
        let frame = layout_page(
            &[Section::new(SectionKind::Custom).with_elements(vec![image])],
            496.0,
        );
        let FrameNode::Image { rect, .. } = &frame.nodes[1] else {
            panic!("expected image node");
        };
        assert!((rect.width - 200.0).abs() < 0.001);
        assert!((rect.x - 148.0).abs() < 0.001);
        assert!((rect.height - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("alpha beta gamma\n\ndelta", 10.0, 60.0);
        // 60 / 5.5 => 10 chars per line
        assert_eq!(lines, vec!["alpha beta", "gamma", "", "delta"]);
    }

    #[test]
    fn test_is_bold() {
        assert!(is_bold("bold"));
        assert!(is_bold("700"));
        assert!(!is_bold("400"));
        assert!(!is_bold("normal"));
    }
}
