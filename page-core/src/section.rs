//! Sections - top-level page blocks that own an ordered list of elements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementId};

/// Unique identifier for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(Uuid);

impl SectionId {
    /// Create a new unique section ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a section ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The semantic kind of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Headline block at the top of the page.
    Hero,
    /// Product feature highlights.
    Feature,
    /// Pricing plans.
    Pricing,
    /// Customer quotes.
    Testimonial,
    /// Contact call-to-action.
    Contact,
    /// Page footer.
    Footer,
    /// Free-form block with no template content.
    Custom,
}

impl SectionKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Feature,
        Self::Pricing,
        Self::Testimonial,
        Self::Contact,
        Self::Footer,
        Self::Custom,
    ];

    /// Lowercase identifier used in serialized form and CSS class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Feature => "feature",
            Self::Pricing => "pricing",
            Self::Testimonial => "testimonial",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label shown in the section palette.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Feature => "Features",
            Self::Pricing => "Pricing",
            Self::Testimonial => "Testimonials",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
            Self::Custom => "Custom",
        }
    }

    /// Background color a new section of this kind starts with.
    #[must_use]
    pub const fn default_background(self) -> &'static str {
        match self {
            Self::Hero => "#1e3a8a",
            Self::Feature | Self::Custom => "#ffffff",
            Self::Pricing => "#f8fafc",
            Self::Testimonial => "#eef2ff",
            Self::Contact => "#f1f5f9",
            Self::Footer => "#111827",
        }
    }

    /// Title a new section of this kind starts with.
    #[must_use]
    pub fn default_title(self) -> String {
        format!("{} Section", self.label())
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown section type {s:?} (expected one of {})", known.join(", "))
            })
    }
}

/// A page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique identifier.
    pub id: SectionId,
    /// Semantic kind.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Section title (slide title on deck export).
    pub title: String,
    /// Owned elements in render order.
    pub elements: Vec<Element>,
    /// CSS background color.
    pub background_color: String,
}

impl Section {
    /// Create an empty section of the given kind with its default title and background.
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: SectionId::new(),
            kind,
            title: kind.default_title(),
            elements: Vec::new(),
            background_color: kind.default_background().to_string(),
        }
    }

    /// Set the elements.
    #[must_use]
    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    /// Find an element by ID.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Find an element by ID for mutation.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Check whether the section owns the element.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    /// Deep copy with every ID re-minted.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: SectionId::new(),
            kind: self.kind,
            title: self.title.clone(),
            elements: self
                .elements
                .iter()
                .cloned()
                .map(Element::with_fresh_id)
                .collect(),
            background_color: self.background_color.clone(),
        }
    }

    /// Merge a partial update into this section.
    pub fn apply(&mut self, patch: SectionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(elements) = patch.elements {
            self.elements = elements;
        }
        if let Some(color) = patch.background_color {
            self.background_color = color;
        }
    }
}

/// Partial update for a section. IDs are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    /// New kind.
    #[serde(rename = "type")]
    pub kind: Option<SectionKind>,
    /// New title.
    pub title: Option<String>,
    /// Replacement element list.
    pub elements: Option<Vec<Element>>,
    /// New background color.
    pub background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
        assert_eq!(" Hero ".parse::<SectionKind>(), Ok(SectionKind::Hero));
        assert!("banner".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_new_section_defaults() {
        let section = Section::new(SectionKind::Footer);
        assert_eq!(section.title, "Footer Section");
        assert_eq!(section.background_color, "#111827");
        assert!(section.elements.is_empty());
    }

    #[test]
    fn test_duplicate_remints_ids() {
        let section = Section::new(SectionKind::Hero)
            .with_elements(vec![Element::text("a"), Element::button("b", "#")]);
        let copy = section.duplicate();

        assert_ne!(copy.id, section.id);
        assert_eq!(copy.elements.len(), 2);
        for (orig, dup) in section.elements.iter().zip(&copy.elements) {
            assert_ne!(orig.id(), dup.id());
            assert_eq!(orig.element_type(), dup.element_type());
        }
    }

    #[test]
    fn test_serialized_kind_field_is_type() {
        let section = Section::new(SectionKind::Pricing);
        let json = serde_json::to_value(&section).expect("serialize");
        assert_eq!(json["type"], "pricing");
        assert_eq!(json["backgroundColor"], "#f8fafc");
    }
}
