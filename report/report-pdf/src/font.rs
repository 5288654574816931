//! Report font configuration.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};

/// Deployment-supplied font for report rendering.
///
/// The report body is Japanese text, so the configured font MUST cover the
/// CJK range — the reference deployment ships IPAexGothic. A Latin-only
/// font silently corrupts or drops every non-Latin character in the
/// rendered document, which is why the font is a deployment configuration
/// option rather than a built-in constant.
///
/// # Example
///
/// ```
/// use report_pdf::FontConfig;
///
/// let font = FontConfig::new("fonts/ipaexg.ttf");
/// assert!(font.path().ends_with("ipaexg.ttf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    path: PathBuf,
}

impl FontConfig {
    /// Creates a font configuration from a TTF path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the font file for embedding.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontUnavailable`] if the file cannot be
    /// opened.
    pub fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|_| RenderError::font_unavailable(self.path.clone()))
    }
}
