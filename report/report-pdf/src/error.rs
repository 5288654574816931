//! Error types for report rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering a report document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured report font could not be opened.
    #[error("report font unavailable: {}", path.display())]
    FontUnavailable {
        /// Path the deployment configured.
        path: PathBuf,
    },

    /// The PDF backend rejected the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

impl RenderError {
    /// Creates a font unavailable error.
    #[must_use]
    pub fn font_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::FontUnavailable { path: path.into() }
    }

    /// Creates a PDF backend error.
    #[must_use]
    pub fn pdf(reason: impl Into<String>) -> Self {
        Self::Pdf(reason.into())
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
