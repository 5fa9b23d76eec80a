//! Capture backends: turn a rendered view into SVG or raster pixels.

use async_trait::async_trait;

use crate::error::ExportResult;
use crate::layout::Rect;
use crate::svg::{frame_to_svg, rasterize, ForeignContent, RasterImage};
use crate::view::RenderedView;

/// Options for a single capture.
#[derive(Debug, Clone, Copy)]
pub struct CaptureOptions {
    /// Device pixels per CSS pixel for raster captures.
    pub pixel_ratio: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { pixel_ratio: 2.0 }
    }
}

/// Something that can capture the visible part of a view.
///
/// Callers expand the view (see [`crate::view::CaptureGuard`]) before
/// capturing when they want the whole page.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &str;

    /// Capture the view as an SVG document.
    async fn capture_vector(
        &self,
        view: &dyn RenderedView,
        options: &CaptureOptions,
    ) -> ExportResult<String>;

    /// Capture the view as raster pixels.
    async fn capture_raster(
        &self,
        view: &dyn RenderedView,
        options: &CaptureOptions,
    ) -> ExportResult<RasterImage>;
}

/// Captures the view's own layout frame through resvg.
///
/// Vector captures refuse image sources that would have to be fetched from
/// elsewhere; raster captures draw placeholders for them instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCapture;

impl NativeCapture {
    fn visible_region(view: &dyn RenderedView) -> Rect {
        let offset = view.scroll_offset();
        let client = view.client_size();
        Rect {
            x: offset.x,
            y: offset.y,
            width: client.width,
            height: client.height,
        }
    }
}

#[async_trait]
impl CaptureBackend for NativeCapture {
    fn name(&self) -> &str {
        "native"
    }

    async fn capture_vector(
        &self,
        view: &dyn RenderedView,
        _options: &CaptureOptions,
    ) -> ExportResult<String> {
        frame_to_svg(view.frame(), Self::visible_region(view), ForeignContent::Reject)
    }

    async fn capture_raster(
        &self,
        view: &dyn RenderedView,
        options: &CaptureOptions,
    ) -> ExportResult<RasterImage> {
        let svg = frame_to_svg(
            view.frame(),
            Self::visible_region(view),
            ForeignContent::Placeholder,
        )?;
        rasterize(&svg, options.pixel_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{PreviewConfig, PreviewView};
    use crate::view::{CaptureGuard, ScrollOffset};
    use page_core::{EditorStore, SectionKind};

    fn preview() -> PreviewView {
        let store = EditorStore::new();
        store.add_section(SectionKind::Hero);
        store.add_section(SectionKind::Footer);
        let config = PreviewConfig {
            viewport: crate::view::ViewSize {
                width: 320.0,
                height: 200.0,
            },
            ..PreviewConfig::default()
        };
        PreviewView::from_state(config, &store.snapshot())
    }

    #[tokio::test]
    async fn test_capture_clips_to_visible_region() {
        let mut view = preview();
        view.scroll_to(ScrollOffset { x: 0.0, y: 50.0 });
        let svg = NativeCapture
            .capture_vector(&view, &CaptureOptions::default())
            .await
            .expect("capture");
        assert!(svg.contains(r#"viewBox="0 50 320 200""#));
    }

    #[tokio::test]
    async fn test_expanded_capture_covers_full_page() {
        let mut view = preview();
        let extent = view.scroll_size();
        let guard = CaptureGuard::expand(&mut view);
        let image = NativeCapture
            .capture_raster(guard.view(), &CaptureOptions { pixel_ratio: 1.0 })
            .await
            .expect("capture");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = extent.height.ceil() as u32;
        assert_eq!(image.height, expected);
        assert_eq!(image.width, 320);
    }
}
