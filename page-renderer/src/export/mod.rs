//! Export pipeline.
//!
//! [`PageExporter`] reads the editor store and the rendered view and turns
//! them into downloadable [`Artifact`]s:
//!
//! | Format | Producer | Reads | Single export |
//! |--------|----------|-------|---------------|
//! | PPTX | [`document`] | store snapshot | `<slug>.pptx` |
//! | HTML | [`markup`] | rendered view | `<slug>-html.zip` with `index.html` |
//! | SVG | [`snapshot`] | rendered view | `<slug>.svg` |
//! | PNG | [`snapshot`] | rendered view | `<slug>.png` |
//!
//! Bundles ([`bundle`]) run any subset of these in the order above and
//! pack the results into one archive.

pub mod archive;
pub mod bundle;
pub mod document;
pub mod markup;
pub mod snapshot;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use page_core::EditorStore;
use serde::{Deserialize, Serialize};

use crate::capture::{CaptureBackend, CaptureOptions, NativeCapture};
use crate::error::{ExportError, ExportResult};
use crate::view::ViewHandle;

use self::archive::ArchiveBuilder;

/// Name used when the project name yields an empty slug.
pub const DEFAULT_SLUG: &str = "landing-page";

/// An export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PowerPoint slide deck.
    Pptx,
    /// Standalone HTML page.
    Html,
    /// SVG image.
    Svg,
    /// PNG image.
    Png,
}

impl ExportFormat {
    /// All formats, in bundle order.
    pub const ALL: [Self; 4] = [Self::Pptx, Self::Html, Self::Svg, Self::Png];

    /// File extension of the format's payload.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// MIME type of the format's payload.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Html => "text/html",
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }

    /// Directory holding the format's entry inside a bundle.
    #[must_use]
    pub const fn bundle_dir(self) -> &'static str {
        self.extension()
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pptx => "PowerPoint",
            Self::Html => "HTML",
            Self::Svg => "SVG",
            Self::Png => "PNG",
        }
    }

    /// Whether producing this format needs the rendered view.
    #[must_use]
    pub const fn requires_view(self) -> bool {
        !matches!(self, Self::Pptx)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pptx" | "ppt" | "powerpoint" => Ok(Self::Pptx),
            "html" | "htm" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            other => Err(format!(
                "unknown export format '{other}' (expected pptx, html, svg or png)"
            )),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Device pixels per CSS pixel for raster output (default: 2.0).
    pub pixel_ratio: f32,
    /// Slide width in inches (default: 10).
    pub slide_width_in: f32,
    /// Slide height in inches (default: 5.625, 16:9).
    pub slide_height_in: f32,
    /// Application name recorded in document metadata.
    pub application: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            slide_width_in: 10.0,
            slide_height_in: 5.625,
            application: "Page Studio".to_string(),
        }
    }
}

/// A finished export, ready to hand to an [`crate::sink::ArtifactSink`].
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Format produced, or `None` for a bundle.
    pub format: Option<ExportFormat>,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
    /// Non-fatal problems met while producing the artifact.
    pub warnings: Vec<String>,
}

/// Turn a project name into a file-name-safe slug.
///
/// Runs of anything other than ASCII letters and digits become one `-`.
/// Falls back to [`DEFAULT_SLUG`] when nothing is left.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// Raw output of one producer before it is named and packaged.
#[derive(Debug, Clone)]
pub(crate) struct Payload {
    pub(crate) bytes: Vec<u8>,
    pub(crate) warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Produces exports of the page held by an [`EditorStore`].
///
/// Producers only read the store. Those that need the rendered view take
/// its lock for the whole capture, so two captures never overlap.
#[derive(Clone)]
pub struct PageExporter {
    store: EditorStore,
    view: Option<ViewHandle>,
    capture: Arc<dyn CaptureBackend>,
    fallback: Arc<dyn CaptureBackend>,
    config: ExportConfig,
}

impl fmt::Debug for PageExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageExporter")
            .field("capture", &self.capture.name())
            .field("fallback", &self.fallback.name())
            .field("has_view", &self.view.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PageExporter {
    /// Create an exporter with native capture and default settings.
    #[must_use]
    pub fn new(store: EditorStore) -> Self {
        Self {
            store,
            view: None,
            capture: Arc::new(NativeCapture),
            fallback: Arc::new(NativeCapture),
            config: ExportConfig::default(),
        }
    }

    /// Replace the export settings.
    #[must_use]
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the primary and fallback capture backends.
    #[must_use]
    pub fn with_capture(
        mut self,
        primary: Arc<dyn CaptureBackend>,
        fallback: Arc<dyn CaptureBackend>,
    ) -> Self {
        self.capture = primary;
        self.fallback = fallback;
        self
    }

    /// Attach the rendered view used by markup and image exports.
    pub fn attach_view(&mut self, view: ViewHandle) {
        self.view = Some(view);
    }

    /// Whether a rendered view is attached.
    #[must_use]
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    /// Current export settings.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The store being exported.
    #[must_use]
    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    fn require_view(&self) -> ExportResult<&ViewHandle> {
        self.view.as_ref().ok_or(ExportError::ViewUnavailable)
    }

    fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            pixel_ratio: self.config.pixel_ratio,
        }
    }

    /// Export in a single format.
    ///
    /// # Errors
    ///
    /// See the per-format methods.
    pub async fn export(&self, format: ExportFormat, project_name: &str) -> ExportResult<Artifact> {
        match format {
            ExportFormat::Pptx => self.export_document(project_name).await,
            ExportFormat::Html => self.export_markup(project_name).await,
            ExportFormat::Svg => self.export_vector(project_name).await,
            ExportFormat::Png => self.export_raster(project_name).await,
        }
    }

    /// Export a slide deck with one slide per section.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be assembled. Malformed style
    /// values never fail the export; they are reported as warnings.
    pub async fn export_document(&self, project_name: &str) -> ExportResult<Artifact> {
        let payload = self.produce(ExportFormat::Pptx, project_name).await?;
        Ok(single_artifact(ExportFormat::Pptx, project_name, payload))
    }

    /// Export a zip archive holding a standalone `index.html`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ViewUnavailable`] without a view, or an error
    /// if the archive cannot be written.
    pub async fn export_markup(&self, project_name: &str) -> ExportResult<Artifact> {
        let payload = self.produce(ExportFormat::Html, project_name).await?;
        let mut archive = ArchiveBuilder::new();
        archive.add("index.html", &payload.bytes)?;
        let artifact = Artifact {
            format: Some(ExportFormat::Html),
            file_name: format!("{}-html.zip", slugify(project_name)),
            mime_type: "application/zip".to_string(),
            bytes: archive.finish()?,
            warnings: payload.warnings,
        };
        log_artifact(&artifact);
        Ok(artifact)
    }

    /// Export the whole page as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ViewUnavailable`] without a view, or a capture
    /// error if both the vector capture and the raster fallback fail.
    pub async fn export_vector(&self, project_name: &str) -> ExportResult<Artifact> {
        let payload = self.produce(ExportFormat::Svg, project_name).await?;
        Ok(single_artifact(ExportFormat::Svg, project_name, payload))
    }

    /// Export the whole page as PNG at the configured pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ViewUnavailable`] without a view, or the
    /// capture error.
    pub async fn export_raster(&self, project_name: &str) -> ExportResult<Artifact> {
        let payload = self.produce(ExportFormat::Png, project_name).await?;
        Ok(single_artifact(ExportFormat::Png, project_name, payload))
    }

    /// Run one producer and return its raw payload.
    pub(crate) async fn produce(
        &self,
        format: ExportFormat,
        project_name: &str,
    ) -> ExportResult<Payload> {
        tracing::info!(%format, project = %project_name, "export started");
        let title = document_title(project_name);

        match format {
            ExportFormat::Pptx => {
                let state = self.store.snapshot();
                let deck = document::build_deck(&state.sections, &self.config, &title)?;
                Ok(Payload {
                    bytes: deck.bytes,
                    warnings: deck.warnings,
                })
            }
            ExportFormat::Html => {
                let view = self.require_view()?;
                let doc = markup::capture_markup(view, &title).await;
                Ok(Payload {
                    bytes: doc.html.into_bytes(),
                    warnings: doc.warnings,
                })
            }
            ExportFormat::Svg => {
                let view = self.require_view()?;
                let capture = snapshot::capture_vector(
                    view,
                    self.capture.as_ref(),
                    self.fallback.as_ref(),
                    &self.capture_options(),
                )
                .await?;
                let warnings = capture
                    .fallback_reason
                    .map(|reason| {
                        vec![format!(
                            "Vector capture failed ({reason}); the SVG embeds a raster image instead"
                        )]
                    })
                    .unwrap_or_default();
                Ok(Payload {
                    bytes: capture.svg.into_bytes(),
                    warnings,
                })
            }
            ExportFormat::Png => {
                let view = self.require_view()?;
                let image = snapshot::capture_raster(
                    view,
                    self.capture.as_ref(),
                    &self.capture_options(),
                )
                .await?;
                Ok(Payload {
                    bytes: image.png,
                    warnings: Vec::new(),
                })
            }
        }
    }
}

fn document_title(project_name: &str) -> String {
    let trimmed = project_name.trim();
    if trimmed.is_empty() {
        "Landing Page".to_string()
    } else {
        trimmed.to_string()
    }
}

fn single_artifact(format: ExportFormat, project_name: &str, payload: Payload) -> Artifact {
    let artifact = Artifact {
        format: Some(format),
        file_name: format!("{}.{}", slugify(project_name), format.extension()),
        mime_type: format.mime_type().to_string(),
        bytes: payload.bytes,
        warnings: payload.warnings,
    };
    log_artifact(&artifact);
    artifact
}

fn log_artifact(artifact: &Artifact) {
    tracing::info!(
        file = %artifact.file_name,
        bytes = artifact.bytes.len(),
        warnings = artifact.warnings.len(),
        "export finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Landing Page!"), "my-landing-page");
        assert_eq!(slugify("  --Spring   Sale 2025-- "), "spring-sale-2025");
        assert_eq!(slugify("???"), DEFAULT_SLUG);
        assert_eq!(slugify(""), DEFAULT_SLUG);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("PPTX".parse::<ExportFormat>(), Ok(ExportFormat::Pptx));
        assert_eq!(" svg ".parse::<ExportFormat>(), Ok(ExportFormat::Svg));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_only_document_works_without_view() {
        let needing: Vec<_> = ExportFormat::ALL
            .into_iter()
            .filter(|f| f.requires_view())
            .collect();
        assert_eq!(
            needing,
            vec![ExportFormat::Html, ExportFormat::Svg, ExportFormat::Png]
        );
    }

    #[tokio::test]
    async fn test_document_export_needs_no_view() {
        let store = EditorStore::new();
        store.add_section(page_core::SectionKind::Hero);
        let exporter = PageExporter::new(store);

        let artifact = exporter.export_document("Launch Day").await.expect("deck");
        assert_eq!(artifact.file_name, "launch-day.pptx");
        assert_eq!(artifact.format, Some(ExportFormat::Pptx));
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_view_exports_need_view() {
        let exporter = PageExporter::new(EditorStore::new());
        for format in [ExportFormat::Html, ExportFormat::Svg, ExportFormat::Png] {
            let err = exporter.export(format, "x").await.expect_err("no view");
            assert!(matches!(err, ExportError::ViewUnavailable));
        }
    }
}
