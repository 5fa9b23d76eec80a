//! Multi-format export bundles.

use serde::{Deserialize, Serialize};

use super::archive::ArchiveBuilder;
use super::{log_artifact, slugify, Artifact, ExportFormat, PageExporter};
use crate::error::{ExportError, ExportResult};

/// Which formats to include in a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSelection {
    /// Include the slide deck.
    pub pptx: bool,
    /// Include the HTML page.
    pub html: bool,
    /// Include the SVG image.
    pub svg: bool,
    /// Include the PNG image.
    pub png: bool,
}

impl FormatSelection {
    /// Every format.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            pptx: true,
            html: true,
            svg: true,
            png: true,
        }
    }

    /// Select exactly the given formats.
    #[must_use]
    pub fn from_formats(formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        let mut selection = Self::default();
        for format in formats {
            selection.set(format, true);
        }
        selection
    }

    /// Turn one format on or off.
    pub fn set(&mut self, format: ExportFormat, enabled: bool) {
        match format {
            ExportFormat::Pptx => self.pptx = enabled,
            ExportFormat::Html => self.html = enabled,
            ExportFormat::Svg => self.svg = enabled,
            ExportFormat::Png => self.png = enabled,
        }
    }

    /// Whether a format is selected.
    #[must_use]
    pub const fn contains(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Pptx => self.pptx,
            ExportFormat::Html => self.html,
            ExportFormat::Svg => self.svg,
            ExportFormat::Png => self.png,
        }
    }

    /// Selected formats in bundle order.
    #[must_use]
    pub fn formats(&self) -> Vec<ExportFormat> {
        ExportFormat::ALL
            .into_iter()
            .filter(|f| self.contains(*f))
            .collect()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.pptx || self.html || self.svg || self.png)
    }
}

/// A bundle export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRequest {
    /// Project name; slugified for file names.
    pub project_name: String,
    /// Formats to include.
    pub formats: FormatSelection,
}

/// Result of a bundle export.
#[derive(Debug, Clone)]
pub struct BundleOutcome {
    /// The archive.
    pub artifact: Artifact,
    /// Formats that made it into the archive.
    pub included: Vec<ExportFormat>,
    /// Formats that failed, with the failure message.
    pub omitted: Vec<(ExportFormat, String)>,
}

/// Path of a format's entry inside a bundle.
#[must_use]
pub fn entry_path(format: ExportFormat, slug: &str) -> String {
    match format {
        ExportFormat::Html => "html/index.html".to_string(),
        other => format!("{}/{slug}.{}", other.bundle_dir(), other.extension()),
    }
}

impl PageExporter {
    /// Export several formats into one zip archive.
    ///
    /// Producers run one after another in [`ExportFormat::ALL`] order. A
    /// producer that fails is logged and left out; the rest still ship.
    ///
    /// # Errors
    ///
    /// - [`ExportError::NoFormatsSelected`] if the selection is empty.
    /// - [`ExportError::ViewUnavailable`] if a selected format needs the
    ///   rendered view and none is attached.
    /// - [`ExportError::BundleEmpty`] if every selected producer failed.
    pub async fn export_bundle(&self, request: &BundleRequest) -> ExportResult<BundleOutcome> {
        if request.formats.is_empty() {
            return Err(ExportError::NoFormatsSelected);
        }
        let formats = request.formats.formats();
        if !self.has_view() && formats.iter().any(|f| f.requires_view()) {
            return Err(ExportError::ViewUnavailable);
        }

        let slug = slugify(&request.project_name);
        tracing::info!(
            project = %request.project_name,
            formats = ?formats,
            "bundle export started"
        );

        let mut archive = ArchiveBuilder::new();
        let mut included = Vec::new();
        let mut omitted = Vec::new();
        let mut warnings = Vec::new();

        for format in formats {
            match self.produce(format, &request.project_name).await {
                Ok(payload) => {
                    archive.add(&entry_path(format, &slug), &payload.bytes)?;
                    warnings.extend(
                        payload
                            .warnings
                            .into_iter()
                            .map(|w| format!("{}: {w}", format.label())),
                    );
                    included.push(format);
                }
                Err(err) => {
                    tracing::warn!(%format, error = %err, "bundle entry omitted");
                    warnings.push(format!("{} was not included: {err}", format.label()));
                    omitted.push((format, err.to_string()));
                }
            }
        }

        if included.is_empty() {
            return Err(ExportError::BundleEmpty);
        }

        let artifact = Artifact {
            format: None,
            file_name: format!("{slug}-export.zip"),
            mime_type: "application/zip".to_string(),
            bytes: archive.finish()?,
            warnings,
        };
        log_artifact(&artifact);

        Ok(BundleOutcome {
            artifact,
            included,
            omitted,
        })
    }
}
