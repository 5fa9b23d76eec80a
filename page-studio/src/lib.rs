//! # Page Studio
//!
//! Command-line host for the landing page builder.
//!
//! Seeds an editor store (from section kinds or a saved page state),
//! renders the preview, and writes exports to a directory.
//!
//! ## Usage
//!
//! ```bash
//! page-studio --sections hero,feature,pricing,footer export pptx
//! page-studio --state page.json --project "Spring Launch" bundle --formats html,svg
//! page-studio sections
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `StudioConfig` - Project name, output directory, page seed, preview and export settings
//! - `Studio` - Owns the store, the rendered preview and the exporter

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fmt::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use page_core::{EditorState, EditorStore, PageError, SectionKind};
use page_renderer::{
    ArtifactSink, BundleOutcome, BundleRequest, DirectorySink, ExportConfig, ExportError,
    ExportFormat, FormatSelection, PageExporter, PreviewConfig, PreviewView, ViewHandle, ViewSize,
};
use thiserror::Error;

/// Sections used when neither `--sections` nor `--state` is given.
pub const DEFAULT_SECTIONS: [SectionKind; 3] =
    [SectionKind::Hero, SectionKind::Feature, SectionKind::Footer];

/// Command-line arguments for page-studio.
#[derive(Debug, Clone, Parser)]
#[command(name = "page-studio")]
#[command(about = "Build a landing page from sections and export it")]
#[command(version)]
pub struct CliArgs {
    /// Project name, used for document titles and file names
    #[arg(long, env = "PAGE_STUDIO_PROJECT", default_value = "Landing Page")]
    pub project: String,

    /// Directory exports are written to
    #[arg(long, short, env = "PAGE_STUDIO_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Comma-separated section kinds to start the page with
    #[arg(long, value_delimiter = ',', conflicts_with = "state")]
    pub sections: Vec<SectionKind>,

    /// Saved page state (JSON) to start from
    #[arg(long, env = "PAGE_STUDIO_STATE")]
    pub state: Option<PathBuf>,

    /// Preview viewport width in pixels
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Preview viewport height in pixels
    #[arg(long, default_value = "800")]
    pub height: u32,

    /// Device pixels per CSS pixel for PNG output
    #[arg(long, env = "PAGE_STUDIO_PIXEL_RATIO", default_value = "2.0")]
    pub pixel_ratio: f32,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Studio commands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Export the page in one format
    Export {
        /// pptx, html, svg or png
        format: ExportFormat,
    },
    /// Export several formats into one zip archive
    Bundle {
        /// Comma-separated formats to include
        #[arg(long, value_delimiter = ',', required = true)]
        formats: Vec<ExportFormat>,
    },
    /// List the page's sections and the available section kinds
    Sections,
    /// Print the page state as JSON
    State,
}

/// Where the initial page comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PageSeed {
    /// Add sections of these kinds, with template content.
    Sections(Vec<SectionKind>),
    /// Load a saved [`EditorState`].
    StateFile(PathBuf),
}

/// Studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Project name.
    pub project_name: String,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Initial page.
    pub seed: PageSeed,
    /// Preview settings.
    pub preview: PreviewConfig,
    /// Export settings.
    pub export: ExportConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            project_name: "Landing Page".to_string(),
            output_dir: PathBuf::from("."),
            seed: PageSeed::Sections(DEFAULT_SECTIONS.to_vec()),
            preview: PreviewConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl From<CliArgs> for StudioConfig {
    fn from(args: CliArgs) -> Self {
        let seed = match (args.state, args.sections) {
            (Some(path), _) => PageSeed::StateFile(path),
            (None, sections) if sections.is_empty() => {
                PageSeed::Sections(DEFAULT_SECTIONS.to_vec())
            }
            (None, sections) => PageSeed::Sections(sections),
        };
        #[allow(clippy::cast_precision_loss)]
        let viewport = ViewSize {
            width: args.width.max(1) as f32,
            height: args.height.max(1) as f32,
        };
        Self {
            project_name: args.project,
            output_dir: args.output,
            seed,
            preview: PreviewConfig {
                viewport,
                ..PreviewConfig::default()
            },
            export: ExportConfig {
                pixel_ratio: args.pixel_ratio,
                ..ExportConfig::default()
            },
        }
    }
}

/// Errors reported by the studio.
#[derive(Debug, Error)]
pub enum StudioError {
    /// The saved page state could not be read.
    #[error("cannot read page state {path}: {source}")]
    StateRead {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The saved page state is not a valid page.
    #[error("invalid page state: {0}")]
    InvalidState(#[from] PageError),

    /// An export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl StudioError {
    /// Message suitable for showing the user.
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::Export(e) => e.user_notice(),
            other => other.to_string(),
        }
    }
}

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

/// A loaded page with its preview and exporter.
#[derive(Debug)]
pub struct Studio {
    project_name: String,
    store: EditorStore,
    view: ViewHandle,
    exporter: PageExporter,
    sink: DirectorySink,
}

impl Studio {
    /// Seed the store and render the preview.
    ///
    /// # Errors
    ///
    /// Returns an error if a state file cannot be read or parsed.
    pub async fn open(config: StudioConfig) -> StudioResult<Self> {
        let store = match &config.seed {
            PageSeed::Sections(kinds) => {
                let store = EditorStore::new();
                for kind in kinds {
                    store.add_section(*kind);
                }
                store
            }
            PageSeed::StateFile(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| StudioError::StateRead {
                        path: path.clone(),
                        source,
                    })?;
                EditorStore::from_state(EditorState::from_json(&json)?)
            }
        };
        tracing::info!(
            sections = store.section_count(),
            project = %config.project_name,
            "page loaded"
        );

        let view = ViewHandle::new(PreviewView::from_state(
            config.preview.clone(),
            &store.snapshot(),
        ));
        let mut exporter = PageExporter::new(store.clone()).with_config(config.export.clone());
        exporter.attach_view(view.clone());

        Ok(Self {
            project_name: config.project_name,
            store,
            view,
            exporter,
            sink: DirectorySink::new(config.output_dir),
        })
    }

    /// The page being edited.
    #[must_use]
    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    /// The rendered preview.
    #[must_use]
    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    /// Export one format and write it to the output directory.
    ///
    /// # Errors
    ///
    /// Returns the export or write error.
    pub async fn export(&self, format: ExportFormat) -> StudioResult<PathBuf> {
        self.view.refresh(&self.store.snapshot()).await;
        let artifact = self.exporter.export(format, &self.project_name).await?;
        for warning in &artifact.warnings {
            tracing::warn!(file = %artifact.file_name, "{warning}");
        }
        Ok(self.sink.deliver(&artifact).await?)
    }

    /// Export several formats into one archive and write it.
    ///
    /// # Errors
    ///
    /// Returns the bundle or write error.
    pub async fn bundle(&self, formats: &[ExportFormat]) -> StudioResult<(PathBuf, BundleOutcome)> {
        self.view.refresh(&self.store.snapshot()).await;
        let request = BundleRequest {
            project_name: self.project_name.clone(),
            formats: FormatSelection::from_formats(formats.iter().copied()),
        };
        let outcome = self.exporter.export_bundle(&request).await?;
        for warning in &outcome.artifact.warnings {
            tracing::warn!(file = %outcome.artifact.file_name, "{warning}");
        }
        let path = self.sink.deliver(&outcome.artifact).await?;
        Ok((path, outcome))
    }

    /// Human-readable listing of the page and the available section kinds.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let sections = self.store.sections();
        let _ = writeln!(out, "{} ({} sections)", self.project_name, sections.len());
        for (index, section) in sections.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. [{}] {} - {} elements, background {}",
                index + 1,
                section.kind,
                section.title,
                section.elements.len(),
                section.background_color,
            );
        }
        let kinds: Vec<_> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        let _ = writeln!(out, "Available kinds: {}", kinds.join(", "));
        out
    }

    /// The page state as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn state_json(&self) -> StudioResult<String> {
        Ok(self.store.snapshot().to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("page-studio").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn test_cli_export_command() {
        let args = parse(&["--sections", "hero,pricing", "export", "pptx"]);
        assert_eq!(
            args.command,
            Command::Export {
                format: ExportFormat::Pptx
            }
        );
        let config = StudioConfig::from(args);
        assert_eq!(
            config.seed,
            PageSeed::Sections(vec![SectionKind::Hero, SectionKind::Pricing])
        );
    }

    #[test]
    fn test_cli_bundle_formats() {
        let args = parse(&["bundle", "--formats", "html,svg"]);
        assert_eq!(
            args.command,
            Command::Bundle {
                formats: vec![ExportFormat::Html, ExportFormat::Svg]
            }
        );
    }

    #[test]
    fn test_cli_rejects_unknown_values() {
        assert!(CliArgs::try_parse_from(["page-studio", "export", "pdf"]).is_err());
        assert!(
            CliArgs::try_parse_from(["page-studio", "--sections", "banner", "sections"]).is_err()
        );
        assert!(CliArgs::try_parse_from([
            "page-studio",
            "--sections",
            "hero",
            "--state",
            "page.json",
            "sections"
        ])
        .is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = parse(&[
            "--project",
            "Spring Sale",
            "--width",
            "800",
            "--pixel-ratio",
            "1.5",
            "sections",
        ]);
        let config = StudioConfig::from(args);
        assert_eq!(config.project_name, "Spring Sale");
        assert_eq!(config.seed, PageSeed::Sections(DEFAULT_SECTIONS.to_vec()));
        assert!((config.preview.viewport.width - 800.0).abs() < f32::EPSILON);
        assert!((config.export.pixel_ratio - 1.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_studio_exports_to_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StudioConfig {
            project_name: "Spring Sale".to_string(),
            output_dir: dir.path().to_path_buf(),
            export: ExportConfig {
                pixel_ratio: 1.0,
                ..ExportConfig::default()
            },
            ..StudioConfig::new()
        };
        let studio = Studio::open(config).await.expect("open");

        let path = studio.export(ExportFormat::Pptx).await.expect("pptx");
        assert_eq!(path, dir.path().join("spring-sale.pptx"));

        let (path, outcome) = studio
            .bundle(&[ExportFormat::Png, ExportFormat::Html])
            .await
            .expect("bundle");
        assert_eq!(path, dir.path().join("spring-sale-export.zip"));
        assert_eq!(outcome.included, vec![ExportFormat::Html, ExportFormat::Png]);
    }

    #[tokio::test]
    async fn test_studio_loads_state_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = EditorStore::new();
        store.add_section(SectionKind::Contact);
        let path = dir.path().join("page.json");
        std::fs::write(&path, store.snapshot().to_json().expect("json")).expect("write");

        let config = StudioConfig {
            seed: PageSeed::StateFile(path),
            ..StudioConfig::new()
        };
        let studio = Studio::open(config).await.expect("open");
        assert_eq!(studio.store().section_count(), 1);
        assert!(studio.describe().contains("[contact] Contact Section"));
    }

    #[tokio::test]
    async fn test_missing_state_file_is_reported() {
        let config = StudioConfig {
            seed: PageSeed::StateFile(PathBuf::from("/nonexistent/page.json")),
            ..StudioConfig::new()
        };
        let err = Studio::open(config).await.expect_err("missing file");
        assert!(matches!(err, StudioError::StateRead { .. }));
    }
}
