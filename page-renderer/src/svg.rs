//! SVG drawing of a laid-out frame and rasterization through resvg.

use std::fmt::Write;
use std::sync::{Arc, LazyLock};

use base64::Engine;
use page_core::{RgbColor, TextAlign};

use crate::error::{ExportError, ExportResult};
use crate::layout::{FrameNode, Rect, ViewFrame};
use crate::xml::{escape_xml, strip_control};

/// How to treat image sources that cannot be inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignContent {
    /// Fail the capture on sources other than `data:` and `http(s):`.
    Reject,
    /// Draw a placeholder box for anything that is not a `data:` URI.
    Placeholder,
}

/// A rasterized capture.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// Device pixels per CSS pixel.
    pub scale: f32,
    /// PNG-encoded pixels.
    pub png: Vec<u8>,
}

/// Draw the part of `frame` inside `region` as a standalone SVG document.
///
/// # Errors
///
/// Returns [`ExportError::Capture`] when `mode` is [`ForeignContent::Reject`]
/// and an image source can be neither embedded nor referenced.
pub fn frame_to_svg(
    frame: &ViewFrame,
    region: Rect,
    mode: ForeignContent,
) -> ExportResult<String> {
    let width = region.width.max(1.0);
    let height = region.height.max(1.0);
    let mut svg = String::with_capacity(4096);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{} {} {width} {height}">"#,
        region.x, region.y,
    );

    for node in frame.nodes.iter().filter(|n| n.rect().intersects(&region)) {
        match node {
            FrameNode::Block { rect, fill, .. } => {
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    color_or(fill, RgbColor::WHITE),
                );
            }
            FrameNode::Text {
                rect,
                lines,
                font_size,
                color,
                bold,
                align,
                ..
            } => {
                let (x, anchor) = match align {
                    TextAlign::Left | TextAlign::Justify => (rect.x, "start"),
                    TextAlign::Center => (rect.x + rect.width / 2.0, "middle"),
                    TextAlign::Right => (rect.x + rect.width, "end"),
                };
                let line_height = font_size * crate::layout::LINE_HEIGHT;
                for (i, line) in lines.iter().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    let baseline = rect.y + i as f32 * line_height + font_size;
                    let _ = write!(
                        svg,
                        r#"<text x="{x}" y="{baseline}" font-family="sans-serif" font-size="{font_size}" font-weight="{}" text-anchor="{anchor}" fill="{}">{}</text>"#,
                        if *bold { "bold" } else { "normal" },
                        color_or(color, RgbColor::BLACK),
                        escape_xml(&strip_control(line)),
                    );
                }
            }
            FrameNode::Image { rect, src, alt, .. } => {
                draw_image(&mut svg, *rect, src, alt, mode)?;
            }
            FrameNode::Button {
                rect,
                label,
                fill,
                text_color,
                radius,
                ..
            } => {
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    color_or(fill, RgbColor::new(0x25, 0x63, 0xEB)),
                );
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
                    rect.x + rect.width / 2.0,
                    rect.y + rect.height / 2.0 + 6.0,
                    color_or(text_color, RgbColor::WHITE),
                    escape_xml(&strip_control(label)),
                );
            }
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn draw_image(
    svg: &mut String,
    rect: Rect,
    src: &str,
    alt: &str,
    mode: ForeignContent,
) -> ExportResult<()> {
    let trimmed = src.trim();
    let embeddable = trimmed.starts_with("data:image/");
    let remote = trimmed.starts_with("http://") || trimmed.starts_with("https://");

    if embeddable || (remote && mode == ForeignContent::Reject) {
        let _ = write!(
            svg,
            r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" href="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape_xml(trimmed),
        );
        return Ok(());
    }

    if mode == ForeignContent::Reject {
        return Err(ExportError::Capture(format!(
            "image source cannot be captured: {}",
            truncate(trimmed, 64)
        )));
    }

    tracing::debug!(src = %truncate(trimmed, 64), "drawing image placeholder");
    let _ = write!(
        svg,
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#e5e7eb"/><text x="{}" y="{}" font-family="sans-serif" font-size="14" text-anchor="middle" fill="#6b7280">{}</text>"##,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.x + rect.width / 2.0,
        rect.y + rect.height / 2.0,
        escape_xml(&strip_control(alt)),
    );
    Ok(())
}

fn color_or(input: &str, fallback: RgbColor) -> String {
    RgbColor::parse(input).unwrap_or(fallback).to_string()
}

fn truncate(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &input[..idx]),
        None => input.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

/// Family the generic `sans-serif` and `serif` names resolve to.
const BUNDLED_FAMILY: &str = "Tuffy";

/// Shared font database: the bundled face first, then whatever the host has.
static FONTS: LazyLock<Arc<usvg::fontdb::Database>> = LazyLock::new(|| {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(include_bytes!("../assets/fonts/Tuffy.ttf").to_vec());
    db.load_system_fonts();
    db.set_sans_serif_family(BUNDLED_FAMILY);
    db.set_serif_family(BUNDLED_FAMILY);
    tracing::debug!(faces = db.len(), "font database loaded");
    Arc::new(db)
});

fn render_options() -> usvg::Options<'static> {
    usvg::Options {
        font_family: BUNDLED_FAMILY.to_string(),
        fontdb: Arc::clone(&FONTS),
        ..usvg::Options::default()
    }
}

/// Rasterize an SVG document at `pixel_ratio` device pixels per CSS pixel.
///
/// # Errors
///
/// Returns [`ExportError::Render`] if the SVG does not parse, the pixmap
/// cannot be allocated, or PNG encoding fails.
pub fn rasterize(svg: &str, pixel_ratio: f32) -> ExportResult<RasterImage> {
    let scale = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };

    let opt = render_options();
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| ExportError::Render(format!("SVG parse error: {e}")))?;

    let size = tree.size();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (px_w, px_h) = (
        (size.width() * scale).ceil() as u32,
        (size.height() * scale).ceil() as u32,
    );
    let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
        .ok_or_else(|| ExportError::Render(format!("cannot allocate {px_w}x{px_h} pixmap")))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let png = pixmap
        .encode_png()
        .map_err(|e| ExportError::Render(format!("PNG encode error: {e}")))?;

    Ok(RasterImage {
        width: pixmap.width(),
        height: pixmap.height(),
        scale,
        png,
    })
}

/// Wrap a raster capture in an SVG document at its CSS pixel size.
#[must_use]
pub fn wrap_raster_as_svg(image: &RasterImage) -> String {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (
        image.width as f32 / image.scale,
        image.height as f32 / image.scale,
    );
    let encoded = base64::engine::general_purpose::STANDARD.encode(&image.png);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><image x="0" y="0" width="{width}" height="{height}" href="data:image/png;base64,{encoded}"/></svg>"#
    )
}
