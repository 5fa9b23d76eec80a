//! Vector and raster producers.

use crate::capture::{CaptureBackend, CaptureOptions};
use crate::error::{ExportError, ExportResult};
use crate::svg::{wrap_raster_as_svg, RasterImage};
use crate::view::{CaptureGuard, ViewHandle};

/// An SVG capture and how it was obtained.
#[derive(Debug, Clone)]
pub struct VectorCapture {
    /// SVG document.
    pub svg: String,
    /// Set when the primary backend failed and a wrapped raster was used.
    pub fallback_reason: Option<String>,
}

/// Capture the whole page as SVG.
///
/// Tries `primary` first. If it fails, captures a raster through `fallback`
/// (still under the same lock and expansion) and wraps it in an SVG image.
///
/// # Errors
///
/// Returns [`ExportError::Capture`] naming both failures if both backends
/// fail.
pub async fn capture_vector(
    view: &ViewHandle,
    primary: &dyn CaptureBackend,
    fallback: &dyn CaptureBackend,
    options: &CaptureOptions,
) -> ExportResult<VectorCapture> {
    let mut locked = view.lock().await;
    let guard = CaptureGuard::expand(locked.as_mut());

    match primary.capture_vector(guard.view(), options).await {
        Ok(svg) => Ok(VectorCapture {
            svg,
            fallback_reason: None,
        }),
        Err(primary_err) => {
            tracing::warn!(
                backend = primary.name(),
                fallback = fallback.name(),
                error = %primary_err,
                "vector capture failed, falling back to raster"
            );
            let raster = fallback
                .capture_raster(guard.view(), options)
                .await
                .map_err(|fallback_err| {
                    tracing::warn!(error = %fallback_err, "fallback raster capture failed");
                    ExportError::Capture(format!(
                        "{primary_err}; fallback also failed: {fallback_err}"
                    ))
                })?;
            Ok(VectorCapture {
                svg: wrap_raster_as_svg(&raster),
                fallback_reason: Some(primary_err.to_string()),
            })
        }
    }
}

/// Capture the whole page as PNG pixels.
///
/// # Errors
///
/// Returns the backend's error if the capture fails.
pub async fn capture_raster(
    view: &ViewHandle,
    backend: &dyn CaptureBackend,
    options: &CaptureOptions,
) -> ExportResult<RasterImage> {
    let mut locked = view.lock().await;
    let guard = CaptureGuard::expand(locked.as_mut());
    backend.capture_raster(guard.view(), options).await
}
