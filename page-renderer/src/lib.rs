//! # Page Renderer
//!
//! Preview rendering and the export pipeline for the landing page builder.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐ revision ┌──────────────┐  lock + expand  ┌──────────────┐
//! │ EditorStore  │─────────▶│ PreviewView  │◀────────────────│ PageExporter │
//! │ (page-core)  │ snapshot │ (ViewHandle) │                 │              │
//! └──────┬───────┘          └──────────────┘                 └──────┬───────┘
//!        │                                                          │
//!        └──────────────── snapshot (slide deck) ──────────────────▶│
//!                                                                   ▼
//!                                   PPTX · HTML zip · SVG · PNG · bundle zip
//!                                                                   │
//!                                                                   ▼
//!                                                            ArtifactSink
//! ```
//!
//! The slide deck is built from the store alone. Markup, vector and raster
//! exports read the rendered view through [`ViewHandle`], which admits one
//! capture at a time and restores the view when the capture ends.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capture;
pub mod error;
pub mod export;
pub mod layout;
pub mod preview;
pub mod sink;
pub mod svg;
pub mod view;

mod xml;

pub use capture::{CaptureBackend, CaptureOptions, NativeCapture};
pub use error::{ExportError, ExportResult};
pub use export::bundle::{BundleOutcome, BundleRequest, FormatSelection};
pub use export::{slugify, Artifact, ExportConfig, ExportFormat, PageExporter};
pub use layout::{FrameNode, Rect, ViewFrame};
pub use preview::{PreviewConfig, PreviewView};
pub use sink::{ArtifactSink, DirectorySink};
pub use svg::RasterImage;
pub use view::{
    CaptureGuard, RenderedView, ScrollOffset, StyleSheet, ViewHandle, ViewSize, ViewStyle,
};

/// Renderer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
