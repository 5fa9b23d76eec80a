//! Shared editor storage.
//!
//! [`EditorStore`] is the single source of truth for the page being edited.
//! It is a cheap-to-clone handle: hand a clone to every view that reads or
//! mutates the page. All mutations go through the methods below, each of
//! which re-validates the selection before releasing the lock and bumps the
//! revision that subscribed views watch.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;

use crate::element::{Element, ElementId, ElementPatch};
use crate::section::{Section, SectionId, SectionKind, SectionPatch};
use crate::state::{EditorState, Selection};
use crate::template::template_for;
use crate::{PageError, PageResult};

/// Thread-safe editor storage shared across views and exporters.
///
/// # Example
///
/// ```
/// use page_core::{EditorStore, SectionKind};
///
/// let store = EditorStore::new();
/// let hero = store.add_section(SectionKind::Hero);
/// let footer = store.add_section(SectionKind::Footer);
///
/// store.move_section(1, 0).unwrap();
/// let order: Vec<_> = store.sections().iter().map(|s| s.id).collect();
/// assert_eq!(order, vec![footer, hero]);
/// ```
#[derive(Debug, Clone)]
pub struct EditorStore {
    state: Arc<RwLock<EditorState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Create a store with an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(EditorState::new())
    }

    /// Create a store seeded with an existing state.
    ///
    /// The selection is repaired if it names missing sections or elements.
    #[must_use]
    pub fn from_state(mut state: EditorState) -> Self {
        state.reconcile_selection();
        let (tx, _rx) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(state)),
            revision: Arc::new(tx),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// A deep copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> EditorState {
        self.read().clone()
    }

    /// A deep copy of the sections in page order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        self.read().sections.clone()
    }

    /// A copy of one section.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<Section> {
        self.read().section(id).cloned()
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.read().sections.len()
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.read().selection
    }

    /// Monotonic revision, bumped after every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Subscribe to revision changes.
    ///
    /// Views re-render when the receiver reports a change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    // -----------------------------------------------------------------------
    // Sections
    // -----------------------------------------------------------------------

    /// Append a new section of the given kind with template content.
    pub fn add_section(&self, kind: SectionKind) -> SectionId {
        let section = Section::new(kind).with_elements(template_for(kind));
        let id = section.id;
        self.mutate(|state| {
            state.sections.push(section);
            true
        });
        tracing::debug!(section = %id, %kind, "section added");
        id
    }

    /// Remove a section and everything it owns.
    ///
    /// Returns `false` if no section has this ID.
    pub fn remove_section(&self, id: SectionId) -> bool {
        let removed = self.mutate(|state| {
            let before = state.sections.len();
            state.sections.retain(|s| s.id != id);
            state.sections.len() != before
        });
        if removed {
            tracing::debug!(section = %id, "section removed");
        }
        removed
    }

    /// Merge a partial update into a section.
    ///
    /// Replacement elements whose IDs are already used by another section,
    /// or repeated within the list, are given fresh ones. Returns `false` if
    /// no section has this ID.
    pub fn update_section(&self, id: SectionId, mut patch: SectionPatch) -> bool {
        self.mutate(|state| {
            if let Some(elements) = patch.elements.take() {
                patch.elements = Some(claim_element_ids(state, id, elements));
            }
            let Some(section) = state.section_mut(id) else {
                return false;
            };
            section.apply(patch);
            true
        })
    }

    /// Deep-copy a section and insert the copy right after it.
    ///
    /// Returns the copy's ID, or `None` if no section has this ID.
    pub fn duplicate_section(&self, id: SectionId) -> Option<SectionId> {
        let mut copy_id = None;
        self.mutate(|state| {
            let Some(index) = state.section_index(id) else {
                return false;
            };
            let copy = state.sections[index].duplicate();
            copy_id = Some(copy.id);
            state.sections.insert(index + 1, copy);
            true
        });
        copy_id
    }

    /// Move the section at `from` so that it ends up at index `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::IndexOutOfRange`] if either index does not name
    /// an existing position; the order is left unchanged.
    pub fn move_section(&self, from: usize, to: usize) -> PageResult<()> {
        self.try_mutate(|state| reorder(&mut state.sections, from, to)).map(|_| ())
    }

    /// Select a section; element selection is always cleared.
    ///
    /// Selecting an unknown ID clears the selection.
    pub fn select_section(&self, id: SectionId) {
        self.mutate(|state| {
            let next = if state.section(id).is_some() {
                Selection::Section { section: id }
            } else {
                tracing::debug!(section = %id, "select of unknown section clears selection");
                Selection::None
            };
            let changed = state.selection != next;
            state.selection = next;
            changed
        });
    }

    /// Remove all sections and clear the selection.
    pub fn clear(&self) {
        self.mutate(|state| {
            let changed = !state.sections.is_empty() || state.selection != Selection::None;
            state.sections.clear();
            changed
        });
    }

    // -----------------------------------------------------------------------
    // Elements
    // -----------------------------------------------------------------------

    /// Append an element to a section.
    ///
    /// An element whose ID already exists anywhere on the page is given a
    /// fresh one. Returns the stored element's ID, or `None` if the section
    /// does not exist.
    pub fn add_element(&self, section_id: SectionId, element: Element) -> Option<ElementId> {
        let mut added = None;
        self.mutate(|state| {
            let element = if state.owner_of(element.id()).is_some() {
                element.with_fresh_id()
            } else {
                element
            };
            let Some(section) = state.section_mut(section_id) else {
                return false;
            };
            added = Some(element.id());
            section.elements.push(element);
            true
        });
        added
    }

    /// Remove an element from a section.
    ///
    /// Returns `false` if the section or element does not exist.
    pub fn remove_element(&self, section_id: SectionId, element_id: ElementId) -> bool {
        self.mutate(|state| {
            let Some(section) = state.section_mut(section_id) else {
                return false;
            };
            let before = section.elements.len();
            section.elements.retain(|e| e.id() != element_id);
            section.elements.len() != before
        })
    }

    /// Merge a kind-matched partial update into an element.
    ///
    /// Returns `Ok(false)` if the section or element does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::KindMismatch`] if the patch is for another kind
    /// of element; the element is left unchanged.
    pub fn update_element(
        &self,
        section_id: SectionId,
        element_id: ElementId,
        patch: ElementPatch,
    ) -> PageResult<bool> {
        self.try_mutate(|state| {
            let Some(element) = state
                .section_mut(section_id)
                .and_then(|s| s.element_mut(element_id))
            else {
                return Ok(false);
            };
            element.apply(patch)?;
            Ok(true)
        })
    }

    /// Move an element within its section.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::SectionNotFound`] if the section does not exist
    /// and [`PageError::IndexOutOfRange`] for out-of-range indices.
    pub fn move_element(&self, section_id: SectionId, from: usize, to: usize) -> PageResult<()> {
        self.try_mutate(|state| {
            let section = state
                .section_mut(section_id)
                .ok_or_else(|| PageError::SectionNotFound(section_id.to_string()))?;
            reorder(&mut section.elements, from, to)
        })
        .map(|_| ())
    }

    /// Select an element together with the section that owns it.
    ///
    /// Returns `false` and leaves the selection unchanged if no section owns
    /// the element.
    pub fn select_element(&self, id: ElementId) -> bool {
        let mut found = false;
        self.mutate(|state| {
            let Some(section) = state.owner_of(id) else {
                return false;
            };
            found = true;
            let next = Selection::Element {
                section,
                element: id,
            };
            let changed = state.selection != next;
            state.selection = next;
            changed
        });
        found
    }

    /// Clear the selection.
    pub fn reset_selection(&self) {
        self.mutate(|state| {
            let changed = state.selection != Selection::None;
            state.selection = Selection::None;
            changed
        });
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, EditorState> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EditorState> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Apply a mutation; `f` reports whether it changed anything.
    fn mutate<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut EditorState) -> bool,
    {
        let changed = {
            let mut state = self.write();
            let changed = f(&mut state);
            if changed {
                state.reconcile_selection();
            }
            changed
        };
        if changed {
            self.bump();
        }
        changed
    }

    /// Apply a fallible mutation; `f` reports whether it changed anything.
    /// Failed mutations must not have touched state.
    fn try_mutate<F>(&self, f: F) -> PageResult<bool>
    where
        F: FnOnce(&mut EditorState) -> PageResult<bool>,
    {
        let changed = {
            let mut state = self.write();
            let changed = f(&mut state)?;
            if changed {
                state.reconcile_selection();
            }
            changed
        };
        if changed {
            self.bump();
        }
        Ok(changed)
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Move `items[from]` to index `to`, shifting the rest.
///
/// Returns whether the order changed.
fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> PageResult<bool> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(PageError::IndexOutOfRange { index, len });
        }
    }
    if from == to {
        return Ok(false);
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(true)
}

/// Re-mint element IDs that `owner` may not take: those held by any other
/// section and repeats within `elements`.
fn claim_element_ids(
    state: &EditorState,
    owner: SectionId,
    elements: Vec<Element>,
) -> Vec<Element> {
    let mut seen = HashSet::with_capacity(elements.len());
    elements
        .into_iter()
        .map(|element| {
            let id = element.id();
            let foreign = state
                .sections
                .iter()
                .any(|s| s.id != owner && s.contains(id));
            if foreign || !seen.insert(id) {
                let fresh = element.with_fresh_id();
                tracing::debug!(from = %id, to = %fresh.id(), "re-minted colliding element id");
                seen.insert(fresh.id());
                fresh
            } else {
                element
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementType, ImagePatch, TextPatch};

    fn ids(store: &EditorStore) -> Vec<SectionId> {
        store.sections().iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_add_section_uses_template() {
        let store = EditorStore::new();
        let id = store.add_section(SectionKind::Hero);

        let section = store.section(id).expect("section exists");
        assert_eq!(section.kind, SectionKind::Hero);
        assert_eq!(section.title, "Hero Section");
        assert_eq!(section.background_color, "#1e3a8a");
        assert!(!section.elements.is_empty());
    }

    #[test]
    fn test_add_custom_section_is_empty() {
        let store = EditorStore::new();
        let id = store.add_section(SectionKind::Custom);
        assert!(store.section(id).expect("exists").elements.is_empty());
    }

    #[test]
    fn test_two_sections_from_same_template_do_not_share_ids() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Feature);
        let b = store.add_section(SectionKind::Feature);
        let a_ids: Vec<_> = store
            .section(a)
            .expect("a")
            .elements
            .iter()
            .map(Element::id)
            .collect();
        let b = store.section(b).expect("b");
        assert!(b.elements.iter().all(|e| !a_ids.contains(&e.id())));
    }

    #[test]
    fn test_move_section_first_to_last() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Feature);
        let c = store.add_section(SectionKind::Footer);

        store.move_section(0, 2).expect("in range");
        assert_eq!(ids(&store), vec![b, c, a]);
    }

    #[test]
    fn test_move_section_out_of_range_is_rejected() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Footer);
        let revision = store.revision();

        let err = store.move_section(0, 2).expect_err("to out of range");
        assert!(matches!(err, PageError::IndexOutOfRange { index: 2, len: 2 }));
        let err = store.move_section(5, 0).expect_err("from out of range");
        assert!(matches!(err, PageError::IndexOutOfRange { index: 5, len: 2 }));

        assert_eq!(ids(&store), vec![a, b]);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_move_section_in_place_does_not_bump_revision() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Footer);
        let rx = store.subscribe();
        let revision = store.revision();

        store.move_section(1, 1).expect("in range");
        assert_eq!(ids(&store), vec![a, b]);
        assert_eq!(store.revision(), revision);
        assert!(!rx.has_changed().expect("sender alive"));

        store.move_section(1, 0).expect("in range");
        assert_eq!(store.revision(), revision + 1);
        assert!(rx.has_changed().expect("sender alive"));
    }

    #[test]
    fn test_remove_section_is_idempotent() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        store.add_section(SectionKind::Footer);

        assert!(store.remove_section(a));
        let after_first = store.snapshot();
        let revision = store.revision();

        assert!(!store.remove_section(a));
        assert_eq!(store.snapshot(), after_first);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_remove_selected_section_clears_selection() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let element = store.section(a).expect("a").elements[0].id();
        assert!(store.select_element(element));

        store.remove_section(a);
        assert_eq!(store.selection(), Selection::None);
    }

    #[test]
    fn test_remove_other_section_keeps_selection() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Footer);
        store.select_section(a);

        store.remove_section(b);
        assert_eq!(store.selection(), Selection::Section { section: a });
    }

    #[test]
    fn test_select_section_clears_element_selection() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Pricing);
        let element = store.section(a).expect("a").elements[0].id();

        assert!(store.select_element(element));
        assert_eq!(store.snapshot().selected_element_id(), Some(element));

        store.select_section(b);
        let state = store.snapshot();
        assert_eq!(state.selected_section_id(), Some(b));
        assert_eq!(state.selected_element_id(), None);

        store.select_section(a);
        assert_eq!(store.snapshot().selected_element_id(), None);
    }

    #[test]
    fn test_select_unknown_section_clears_everything() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let element = store.section(a).expect("a").elements[0].id();
        store.select_element(element);

        store.select_section(SectionId::new());
        assert_eq!(store.selection(), Selection::None);
    }

    #[test]
    fn test_select_element_sets_owning_section() {
        let store = EditorStore::new();
        store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Contact);
        let element = store.section(b).expect("b").elements[1].id();

        assert!(store.select_element(element));
        assert_eq!(
            store.selection(),
            Selection::Element {
                section: b,
                element
            }
        );
        assert!(!store.select_element(ElementId::new()));
        assert_eq!(store.snapshot().selected_element_id(), Some(element));
    }

    #[test]
    fn test_reset_selection() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        store.select_section(a);
        store.reset_selection();
        assert_eq!(store.selection(), Selection::None);
    }

    #[test]
    fn test_update_section_merges_fields() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let elements_before = store.section(a).expect("a").elements;

        assert!(store.update_section(
            a,
            SectionPatch {
                title: Some("Welcome".to_string()),
                background_color: Some("#000000".to_string()),
                ..SectionPatch::default()
            }
        ));

        let section = store.section(a).expect("a");
        assert_eq!(section.title, "Welcome");
        assert_eq!(section.background_color, "#000000");
        assert_eq!(section.kind, SectionKind::Hero);
        assert_eq!(section.elements, elements_before);

        assert!(!store.update_section(SectionId::new(), SectionPatch::default()));
    }

    #[test]
    fn test_replacing_elements_revalidates_element_selection() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let element = store.section(a).expect("a").elements[0].id();
        store.select_element(element);

        store.update_section(
            a,
            SectionPatch {
                elements: Some(vec![Element::text("replacement")]),
                ..SectionPatch::default()
            },
        );
        assert_eq!(store.selection(), Selection::Section { section: a });
    }

    #[test]
    fn test_replacing_elements_remints_ids_owned_elsewhere() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Custom);
        let borrowed = store.section(a).expect("a").elements;
        let a_ids: Vec<_> = borrowed.iter().map(Element::id).collect();

        let mut list = borrowed.clone();
        list.push(borrowed[0].clone());
        assert!(store.update_section(
            b,
            SectionPatch {
                elements: Some(list),
                ..SectionPatch::default()
            }
        ));

        let b_ids: Vec<_> = store
            .section(b)
            .expect("b")
            .elements
            .iter()
            .map(Element::id)
            .collect();
        assert_eq!(b_ids.len(), a_ids.len() + 1);
        assert!(b_ids.iter().all(|id| !a_ids.contains(id)));
        let unique: HashSet<_> = b_ids.iter().collect();
        assert_eq!(unique.len(), b_ids.len());
        assert_eq!(store.section(a).expect("a").elements, borrowed);

        assert!(store.select_element(b_ids[0]));
        assert_eq!(
            store.selection(),
            Selection::Element {
                section: b,
                element: b_ids[0]
            }
        );
    }

    #[test]
    fn test_replacing_elements_keeps_own_ids() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Feature);
        let mut elements = store.section(a).expect("a").elements;
        elements.reverse();

        assert!(store.update_section(
            a,
            SectionPatch {
                elements: Some(elements.clone()),
                ..SectionPatch::default()
            }
        ));
        assert_eq!(store.section(a).expect("a").elements, elements);
    }

    #[test]
    fn test_add_element_to_missing_section_is_noop() {
        let store = EditorStore::new();
        let revision = store.revision();
        assert!(store
            .add_element(SectionId::new(), Element::text("orphan"))
            .is_none());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_add_element_remints_duplicate_ids() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Custom);
        let b = store.add_section(SectionKind::Custom);
        let element = Element::text("shared");
        let original = element.id();

        let first = store.add_element(a, element.clone()).expect("added to a");
        let second = store.add_element(b, element).expect("added to b");
        assert_eq!(first, original);
        assert_ne!(second, original);
    }

    #[test]
    fn test_remove_element() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Custom);
        let id = store.add_element(a, Element::text("x")).expect("added");
        store.select_element(id);

        assert!(store.remove_element(a, id));
        assert!(!store.remove_element(a, id));
        assert!(store.section(a).expect("a").elements.is_empty());
        assert_eq!(store.selection(), Selection::Section { section: a });
    }

    #[test]
    fn test_update_element_preserves_kind() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Custom);
        let id = store.add_element(a, Element::text("before")).expect("added");

        let updated = store
            .update_element(
                a,
                id,
                ElementPatch::Text(TextPatch {
                    font_size: Some("24px".to_string()),
                    ..TextPatch::default()
                }),
            )
            .expect("same kind");
        assert!(updated);

        let err = store
            .update_element(
                a,
                id,
                ElementPatch::Image(ImagePatch {
                    src: Some("https://example.com/x.png".to_string()),
                    ..ImagePatch::default()
                }),
            )
            .expect_err("other kind");
        assert!(matches!(err, PageError::KindMismatch { .. }));

        let section = store.section(a).expect("a");
        let Element::Text(text) = &section.elements[0] else {
            panic!("element changed kind");
        };
        assert_eq!(section.elements[0].element_type(), ElementType::Text);
        assert_eq!(text.content, "before");
        assert_eq!(text.font_size, "24px");
    }

    #[test]
    fn test_update_missing_element_is_noop() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Custom);
        let revision = store.revision();
        let result =
            store.update_element(a, ElementId::new(), ElementPatch::Text(TextPatch::default()));
        assert!(!result.expect("not an error"));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_move_element() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Custom);
        let x = store.add_element(a, Element::text("x")).expect("x");
        let y = store.add_element(a, Element::text("y")).expect("y");
        let z = store.add_element(a, Element::text("z")).expect("z");

        let order = |store: &EditorStore| -> Vec<ElementId> {
            store
                .section(a)
                .expect("a")
                .elements
                .iter()
                .map(Element::id)
                .collect()
        };

        store.move_element(a, 2, 0).expect("in range");
        assert_eq!(order(&store), vec![z, x, y]);

        let revision = store.revision();
        store.move_element(a, 1, 1).expect("in place");
        assert_eq!(order(&store), vec![z, x, y]);
        assert_eq!(store.revision(), revision);

        assert!(matches!(
            store.move_element(a, 0, 3),
            Err(PageError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            store.move_element(SectionId::new(), 0, 0),
            Err(PageError::SectionNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_section_inserts_after_source() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let b = store.add_section(SectionKind::Footer);

        let copy = store.duplicate_section(a).expect("duplicated");
        assert_eq!(ids(&store), vec![a, copy, b]);
        assert!(store.duplicate_section(SectionId::new()).is_none());
    }

    #[test]
    fn test_clear() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        store.select_section(a);
        store.clear();
        assert_eq!(store.section_count(), 0);
        assert_eq!(store.selection(), Selection::None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = EditorStore::new();
        let view = store.clone();
        let id = store.add_section(SectionKind::Hero);
        assert!(view.section(id).is_some());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = EditorStore::new();
        let a = store.add_section(SectionKind::Hero);
        let snapshot = store.snapshot();
        store.update_section(
            a,
            SectionPatch {
                title: Some("Changed".to_string()),
                ..SectionPatch::default()
            },
        );
        assert_eq!(snapshot.sections[0].title, "Hero Section");
    }

    #[tokio::test]
    async fn test_subscribers_see_revisions() {
        let store = EditorStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), 0);

        store.add_section(SectionKind::Hero);
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 1);

        store.remove_section(SectionId::new());
        assert!(!rx.has_changed().expect("sender alive"));
    }
}
