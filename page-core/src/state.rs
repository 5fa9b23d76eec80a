//! Editor state: the ordered section list plus the selection cursor.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;
use crate::section::{Section, SectionId};

/// What the editor currently has selected.
///
/// An element selection always carries its owning section, so a selected
/// element outside the selected section cannot be represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A section, with no element selected inside it.
    Section {
        /// Selected section.
        section: SectionId,
    },
    /// An element and the section that owns it.
    Element {
        /// Owning section.
        section: SectionId,
        /// Selected element.
        element: ElementId,
    },
}

impl Selection {
    /// The selected section, if any.
    #[must_use]
    pub const fn section_id(&self) -> Option<SectionId> {
        match *self {
            Self::None => None,
            Self::Section { section } | Self::Element { section, .. } => Some(section),
        }
    }

    /// The selected element, if any.
    #[must_use]
    pub const fn element_id(&self) -> Option<ElementId> {
        match *self {
            Self::Element { element, .. } => Some(element),
            Self::None | Self::Section { .. } => None,
        }
    }
}

/// The complete editor state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Sections in page order.
    pub sections: Vec<Section>,
    /// Selection cursor.
    #[serde(default)]
    pub selection: Selection,
}

impl EditorState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a state from JSON and repair its selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an editor state.
    pub fn from_json(json: &str) -> crate::PageResult<Self> {
        let mut state: Self = serde_json::from_str(json)?;
        state.reconcile_selection();
        Ok(state)
    }

    /// Serialize the state to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::PageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Currently selected section ID.
    #[must_use]
    pub fn selected_section_id(&self) -> Option<SectionId> {
        self.selection.section_id()
    }

    /// Currently selected element ID.
    #[must_use]
    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selection.element_id()
    }

    /// Find a section by ID.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Find a section by ID for mutation.
    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Position of a section in page order.
    #[must_use]
    pub fn section_index(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// The section owning an element.
    #[must_use]
    pub fn owner_of(&self, element: ElementId) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|s| s.contains(element))
            .map(|s| s.id)
    }

    /// Drop any part of the selection that no longer names live data.
    ///
    /// A dangling element selection falls back to its section; a dangling
    /// section selection is cleared.
    pub fn reconcile_selection(&mut self) {
        self.selection = match self.selection {
            Selection::None => Selection::None,
            Selection::Section { section } => match self.section(section) {
                Some(_) => Selection::Section { section },
                None => Selection::None,
            },
            Selection::Element { section, element } => match self.section(section) {
                Some(s) if s.contains(element) => Selection::Element { section, element },
                Some(_) => Selection::Section { section },
                None => Selection::None,
            },
        };
    }
}
