//! Destinations for finished artifacts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{ExportError, ExportResult};
use crate::export::Artifact;

/// Somewhere an artifact can be delivered.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Deliver the artifact and return where it went.
    async fn deliver(&self, artifact: &Artifact) -> ExportResult<PathBuf>;
}

/// Writes artifacts into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    async fn deliver(&self, artifact: &Artifact) -> ExportResult<PathBuf> {
        // Only the final component is used so a name cannot escape the root.
        let name = Path::new(&artifact.file_name)
            .file_name()
            .ok_or_else(|| {
                ExportError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid artifact file name: {:?}", artifact.file_name),
                ))
            })?
            .to_owned();

        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(name);
        tokio::fs::write(&path, &artifact.bytes).await?;
        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "artifact written");
        Ok(path)
    }
}
