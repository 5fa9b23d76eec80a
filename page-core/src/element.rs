//! Page elements - the content primitives placed inside sections.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PageError, PageResult};

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an element ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Text block.
    Text,
    /// Image.
    Image,
    /// Link button.
    Button,
}

impl ElementType {
    /// Tag used in serialized form and markup class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified.
    Justify,
}

impl TextAlign {
    /// CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// A block of styled text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Text content; `\n` separates paragraphs.
    pub content: String,
    /// CSS font size, e.g. `"48px"`.
    pub font_size: String,
    /// CSS color.
    pub color: String,
    /// CSS font weight, e.g. `"bold"` or `"600"`.
    pub font_weight: String,
    /// Horizontal alignment.
    pub text_align: TextAlign,
}

/// An image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Image URL or `data:` URI.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// CSS width (`"100%"`, `"320px"`, `"auto"`).
    pub width: String,
    /// CSS height (`"auto"`, `"240px"`).
    pub height: String,
}

/// A call-to-action link styled as a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Button caption.
    pub label: String,
    /// Link target.
    pub url: String,
    /// CSS background color.
    pub background_color: String,
    /// CSS text color.
    pub text_color: String,
    /// CSS border radius, e.g. `"8px"`.
    pub border_radius: String,
}

/// A content element. Exhaustive: every consumer matches all kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Text block.
    Text(TextElement),
    /// Image.
    Image(ImageElement),
    /// Link button.
    Button(ButtonElement),
}

impl Element {
    /// Create a text element with default styling.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextElement {
            id: ElementId::new(),
            content: content.into(),
            font_size: "16px".to_string(),
            color: "#1f2937".to_string(),
            font_weight: "normal".to_string(),
            text_align: TextAlign::Left,
        })
    }

    /// Create an image element filling the section width.
    #[must_use]
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image(ImageElement {
            id: ElementId::new(),
            src: src.into(),
            alt: alt.into(),
            width: "100%".to_string(),
            height: "auto".to_string(),
        })
    }

    /// Create a button element with default styling.
    #[must_use]
    pub fn button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Button(ButtonElement {
            id: ElementId::new(),
            label: label.into(),
            url: url.into(),
            background_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
            border_radius: "8px".to_string(),
        })
    }

    /// The element's identifier.
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Text(t) => t.id,
            Self::Image(i) => i.id,
            Self::Button(b) => b.id,
        }
    }

    /// The element's kind.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text(_) => ElementType::Text,
            Self::Image(_) => ElementType::Image,
            Self::Button(_) => ElementType::Button,
        }
    }

    /// Return the element with a freshly minted ID.
    #[must_use]
    pub fn with_fresh_id(mut self) -> Self {
        let id = ElementId::new();
        match &mut self {
            Self::Text(t) => t.id = id,
            Self::Image(i) => i.id = id,
            Self::Button(b) => b.id = id,
        }
        self
    }

    /// Merge a partial update into this element.
    ///
    /// The patch must be of the same kind as the element; the stored
    /// discriminant decides, never the patch.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::KindMismatch`] and leaves the element untouched
    /// if the patch targets a different kind.
    pub fn apply(&mut self, patch: ElementPatch) -> PageResult<()> {
        match (self, patch) {
            (Self::Text(t), ElementPatch::Text(p)) => {
                merge(&mut t.content, p.content);
                merge(&mut t.font_size, p.font_size);
                merge(&mut t.color, p.color);
                merge(&mut t.font_weight, p.font_weight);
                merge(&mut t.text_align, p.text_align);
                Ok(())
            }
            (Self::Image(i), ElementPatch::Image(p)) => {
                merge(&mut i.src, p.src);
                merge(&mut i.alt, p.alt);
                merge(&mut i.width, p.width);
                merge(&mut i.height, p.height);
                Ok(())
            }
            (Self::Button(b), ElementPatch::Button(p)) => {
                merge(&mut b.label, p.label);
                merge(&mut b.url, p.url);
                merge(&mut b.background_color, p.background_color);
                merge(&mut b.text_color, p.text_color);
                merge(&mut b.border_radius, p.border_radius);
                Ok(())
            }
            (element, patch) => Err(PageError::KindMismatch {
                expected: element.element_type(),
                found: patch.element_type(),
            }),
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Partial update for a text element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    /// New content.
    pub content: Option<String>,
    /// New font size.
    pub font_size: Option<String>,
    /// New color.
    pub color: Option<String>,
    /// New font weight.
    pub font_weight: Option<String>,
    /// New alignment.
    pub text_align: Option<TextAlign>,
}

/// Partial update for an image element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePatch {
    /// New source.
    pub src: Option<String>,
    /// New alt text.
    pub alt: Option<String>,
    /// New width.
    pub width: Option<String>,
    /// New height.
    pub height: Option<String>,
}

/// Partial update for a button element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonPatch {
    /// New label.
    pub label: Option<String>,
    /// New link target.
    pub url: Option<String>,
    /// New background color.
    pub background_color: Option<String>,
    /// New text color.
    pub text_color: Option<String>,
    /// New border radius.
    pub border_radius: Option<String>,
}

/// A kind-tagged partial update. IDs are not patchable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementPatch {
    /// Update a text element.
    Text(TextPatch),
    /// Update an image element.
    Image(ImagePatch),
    /// Update a button element.
    Button(ButtonPatch),
}

impl ElementPatch {
    /// The kind this patch applies to.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text(_) => ElementType::Text,
            Self::Image(_) => ElementType::Image,
            Self::Button(_) => ElementType::Button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_patch_merges_only_given_fields() {
        let mut element = Element::text("Hello");
        let id = element.id();
        element
            .apply(ElementPatch::Text(TextPatch {
                content: Some("Updated".to_string()),
                text_align: Some(TextAlign::Center),
                ..TextPatch::default()
            }))
            .expect("same kind");

        let Element::Text(text) = &element else {
            panic!("kind changed");
        };
        assert_eq!(text.id, id);
        assert_eq!(text.content, "Updated");
        assert_eq!(text.text_align, TextAlign::Center);
        assert_eq!(text.font_size, "16px");
    }

    #[test]
    fn test_patch_of_other_kind_is_rejected() {
        let mut element = Element::text("Keep me");
        let before = element.clone();
        let result = element.apply(ElementPatch::Image(ImagePatch {
            src: Some("https://example.com/a.png".to_string()),
            ..ImagePatch::default()
        }));

        assert!(matches!(
            result,
            Err(PageError::KindMismatch {
                expected: ElementType::Text,
                found: ElementType::Image,
            })
        ));
        assert_eq!(element, before);
    }

    #[test]
    fn test_serde_uses_type_tag() {
        let element = Element::button("Go", "https://example.com");
        let json = serde_json::to_value(&element).expect("serialize");
        assert_eq!(json["type"], "button");
        assert_eq!(json["backgroundColor"], "#2563eb");

        let back: Element = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, element);
    }

    #[test]
    fn test_patch_deserializes_partial_fields() {
        let patch: ElementPatch =
            serde_json::from_str(r#"{"type":"image","width":"50%"}"#).expect("patch");
        assert_eq!(
            patch,
            ElementPatch::Image(ImagePatch {
                width: Some("50%".to_string()),
                ..ImagePatch::default()
            })
        );
    }

    #[test]
    fn test_fresh_id_differs() {
        let element = Element::image("https://example.com/a.png", "A");
        let copy = element.clone().with_fresh_id();
        assert_ne!(element.id(), copy.id());
        assert_eq!(copy.element_type(), ElementType::Image);
    }
}
