//! Renderer and export error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while rendering or exporting a page.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An export needing the live view was requested before one was attached.
    #[error("No rendered view is available")]
    ViewUnavailable,

    /// A bundle was requested with no formats selected.
    #[error("No export formats selected")]
    NoFormatsSelected,

    /// Every producer selected for a bundle failed.
    #[error("Every selected export format failed")]
    BundleEmpty,

    /// The capture backend could not capture the view.
    #[error("Capture failed: {0}")]
    Capture(String),

    /// SVG parsing, rasterization or encoding failed.
    #[error("Render failed: {0}")]
    Render(String),

    /// Archive assembly failed.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Message suitable for a user-visible failure notice.
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::ViewUnavailable => {
                "The page preview is not ready yet. Open the preview and try again.".to_string()
            }
            Self::NoFormatsSelected => "Select at least one export format.".to_string(),
            Self::BundleEmpty => {
                "None of the selected formats could be exported. Try a different selection."
                    .to_string()
            }
            other => format!("Export failed: {other}. Try exporting in another format."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_failures_suggest_another_format() {
        let notice = ExportError::Capture("foreign content".to_string()).user_notice();
        assert!(notice.contains("foreign content"));
        assert!(notice.contains("another format"));
    }

    #[test]
    fn test_precondition_notices() {
        assert!(ExportError::NoFormatsSelected
            .user_notice()
            .contains("at least one"));
        assert!(ExportError::ViewUnavailable.user_notice().contains("preview"));
    }
}
