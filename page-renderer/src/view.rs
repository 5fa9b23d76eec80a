//! The live rendered view and the capture guard around it.
//!
//! Export producers that read pixels or markup do so from a
//! [`RenderedView`]. The view is shared behind a [`ViewHandle`] whose async
//! mutex admits one capture at a time; a [`CaptureGuard`] expands the view
//! to its full content for the duration of a capture and puts the saved
//! inline style and scroll offset back when it is dropped.

use std::fmt;
use std::sync::Arc;

use page_core::{EditorState, EditorStore};
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::layout::ViewFrame;

/// Inline style properties the capture discipline touches.
///
/// `None` means the property is not set inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStyle {
    /// Inline `width`.
    pub width: Option<String>,
    /// Inline `height`.
    pub height: Option<String>,
    /// Inline `overflow`.
    pub overflow: Option<String>,
    /// Inline `position`.
    pub position: Option<String>,
}

impl ViewStyle {
    /// Render as a `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        [
            ("width", &self.width),
            ("height", &self.height),
            ("overflow", &self.overflow),
            ("position", &self.position),
        ]
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Scroll position of the view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    /// Horizontal offset in pixels.
    pub x: f32,
    /// Vertical offset in pixels.
    pub y: f32,
}

impl ScrollOffset {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
}

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewSize {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// A stylesheet attached to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// Where the sheet came from, if it is external.
    pub href: Option<String>,
    /// CSS rules, or `None` when the rules cannot be read (cross-origin).
    pub rules: Option<Vec<String>>,
}

impl StyleSheet {
    /// A readable sheet.
    #[must_use]
    pub fn inline(rules: Vec<String>) -> Self {
        Self {
            href: None,
            rules: Some(rules),
        }
    }

    /// An external sheet whose rules are not readable.
    #[must_use]
    pub fn opaque(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            rules: None,
        }
    }
}

/// The live, rendered form of the page.
pub trait RenderedView: Send + Sync {
    /// Current inline style of the root node.
    fn inline_style(&self) -> ViewStyle;

    /// Replace the inline style of the root node.
    fn set_inline_style(&mut self, style: &ViewStyle);

    /// Current scroll position.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Scroll to a position.
    fn scroll_to(&mut self, offset: ScrollOffset);

    /// Visible size of the view.
    fn client_size(&self) -> ViewSize;

    /// Full content size of the view.
    fn scroll_size(&self) -> ViewSize;

    /// Serialized markup of the root node and its descendants.
    fn outer_html(&self) -> String;

    /// Stylesheets attached to the view.
    fn stylesheets(&self) -> Vec<StyleSheet>;

    /// The laid-out boxes of the current render.
    fn frame(&self) -> &ViewFrame;

    /// Re-render from a state snapshot.
    fn render(&mut self, state: &EditorState);
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// Shared, lockable reference to the rendered view.
#[derive(Clone)]
pub struct ViewHandle {
    inner: Arc<Mutex<Box<dyn RenderedView>>>,
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle").finish_non_exhaustive()
    }
}

impl ViewHandle {
    /// Wrap a view.
    #[must_use]
    pub fn new(view: impl RenderedView + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(view))),
        }
    }

    /// Wait for exclusive access to the view.
    pub async fn lock(&self) -> MutexGuard<'_, Box<dyn RenderedView>> {
        self.inner.lock().await
    }

    /// Exclusive access without waiting, if nobody holds the view.
    #[must_use]
    pub fn try_lock(&self) -> Option<MutexGuard<'_, Box<dyn RenderedView>>> {
        self.inner.try_lock().ok()
    }

    /// Run a closure against the view while holding the lock.
    pub async fn with_view<R>(&self, f: impl FnOnce(&mut dyn RenderedView) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(guard.as_mut())
    }

    /// Re-render the view from a state snapshot.
    pub async fn refresh(&self, state: &EditorState) {
        self.inner.lock().await.render(state);
    }

    /// Keep the view in step with the store.
    ///
    /// Renders once immediately, then again on every revision. Abort the
    /// returned task to stop syncing.
    #[must_use]
    pub fn spawn_sync(&self, store: EditorStore) -> JoinHandle<()> {
        let handle = self.clone();
        let mut revisions = store.subscribe();
        tokio::spawn(async move {
            handle.refresh(&store.snapshot()).await;
            while revisions.changed().await.is_ok() {
                let revision = *revisions.borrow_and_update();
                handle.refresh(&store.snapshot()).await;
                tracing::debug!(revision, "preview re-rendered");
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Capture guard
// ---------------------------------------------------------------------------

/// Expands a view for capture and restores it on drop.
///
/// Restoration runs on every exit path, including early returns, panics
/// and cancelled futures.
pub struct CaptureGuard<'a> {
    view: &'a mut dyn RenderedView,
    saved_style: ViewStyle,
    saved_scroll: ScrollOffset,
}

impl<'a> CaptureGuard<'a> {
    /// Save the view's inline style and scroll, then expand it so the whole
    /// content is visible from the origin.
    pub fn expand(view: &'a mut dyn RenderedView) -> Self {
        let saved_style = view.inline_style();
        let saved_scroll = view.scroll_offset();
        let extent = view.scroll_size();

        view.set_inline_style(&ViewStyle {
            width: Some(format!("{}px", extent.width)),
            height: Some(format!("{}px", extent.height)),
            overflow: Some("visible".to_string()),
            position: Some("relative".to_string()),
        });
        view.scroll_to(ScrollOffset::ORIGIN);
        tracing::debug!(
            width = extent.width,
            height = extent.height,
            "view expanded for capture"
        );

        Self {
            view,
            saved_style,
            saved_scroll,
        }
    }

    /// The expanded view.
    #[must_use]
    pub fn view(&self) -> &dyn RenderedView {
        &*self.view
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        self.view.set_inline_style(&self.saved_style);
        self.view.scroll_to(self.saved_scroll);
        tracing::debug!("view restored after capture");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        style: ViewStyle,
        scroll: ScrollOffset,
        calls: Vec<&'static str>,
        frame: ViewFrame,
    }

    impl RenderedView for Recorder {
        fn inline_style(&self) -> ViewStyle {
            self.style.clone()
        }
        fn set_inline_style(&mut self, style: &ViewStyle) {
            self.calls.push("style");
            self.style = style.clone();
        }
        fn scroll_offset(&self) -> ScrollOffset {
            self.scroll
        }
        fn scroll_to(&mut self, offset: ScrollOffset) {
            self.calls.push("scroll");
            self.scroll = offset;
        }
        fn client_size(&self) -> ViewSize {
            ViewSize {
                width: 100.0,
                height: 50.0,
            }
        }
        fn scroll_size(&self) -> ViewSize {
            ViewSize {
                width: 100.0,
                height: 400.0,
            }
        }
        fn outer_html(&self) -> String {
            String::new()
        }
        fn stylesheets(&self) -> Vec<StyleSheet> {
            Vec::new()
        }
        fn frame(&self) -> &ViewFrame {
            &self.frame
        }
        fn render(&mut self, _state: &EditorState) {}
    }

    #[test]
    fn test_guard_expands_then_restores() {
        let mut view = Recorder {
            style: ViewStyle {
                height: Some("50px".to_string()),
                ..ViewStyle::default()
            },
            scroll: ScrollOffset { x: 0.0, y: 120.0 },
            ..Recorder::default()
        };

        {
            let guard = CaptureGuard::expand(&mut view);
            let style = guard.view().inline_style();
            assert_eq!(style.height.as_deref(), Some("400px"));
            assert_eq!(style.overflow.as_deref(), Some("visible"));
            assert_eq!(style.position.as_deref(), Some("relative"));
            assert_eq!(guard.view().scroll_offset(), ScrollOffset::ORIGIN);
        }

        assert_eq!(view.style.height.as_deref(), Some("50px"));
        assert_eq!(view.style.overflow, None);
        assert_eq!(view.scroll, ScrollOffset { x: 0.0, y: 120.0 });
        // style restored before scroll
        assert_eq!(view.calls, vec!["style", "scroll", "style", "scroll"]);
    }

    #[test]
    fn test_style_to_css() {
        let style = ViewStyle {
            width: Some("10px".to_string()),
            overflow: Some("hidden".to_string()),
            ..ViewStyle::default()
        };
        assert_eq!(style.to_css(), "width: 10px; overflow: hidden;");
        assert_eq!(ViewStyle::default().to_css(), "");
    }

    #[tokio::test]
    async fn test_handle_serializes_access() {
        let handle = ViewHandle::new(Recorder::default());
        let guard = handle.lock().await;
        assert!(handle.try_lock().is_none());
        drop(guard);
        assert!(handle.try_lock().is_some());
    }
}
