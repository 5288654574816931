//! Checkpoint persistence for classifier weights.

use std::path::Path;

use burn::module::Module;
use burn::prelude::Backend;
use burn::record::{BinFileRecorder, FullPrecisionSettings, PrettyJsonFileRecorder, Recorder};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Supported checkpoint file formats.
///
/// # Example
///
/// ```
/// use arch_model::CheckpointFormat;
///
/// let format = CheckpointFormat::from_extension("bin");
/// assert_eq!(format, Some(CheckpointFormat::Binary));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckpointFormat {
    /// Binary format - compact and fast. The deployment default.
    #[default]
    Binary,

    /// JSON format - human-readable, for debugging and inspection.
    Json,
}

impl CheckpointFormat {
    /// Determines the format from a file extension.
    ///
    /// - `.bin`, `.burn` -> Binary
    /// - `.json` -> Json
    /// - Other -> None
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "bin" | "burn" => Some(Self::Binary),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determines the format from a file path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the default file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Binary => "bin",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for CheckpointFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Saves classifier weights to a checkpoint file.
///
/// # Arguments
///
/// - `model`: The model to save
/// - `path`: Output file path (without extension)
/// - `format`: Checkpoint format to use
///
/// # Returns
///
/// The full path of the written checkpoint (extension added).
///
/// # Errors
///
/// Returns [`ModelError::SaveCheckpoint`] if writing fails.
pub fn save_checkpoint<B, M>(model: &M, path: &str, format: CheckpointFormat) -> Result<String>
where
    B: Backend,
    M: Module<B>,
{
    let full_path = format!("{}.{}", path, format.extension());
    let record = model.clone().into_record();

    match format {
        CheckpointFormat::Binary => {
            let recorder = BinFileRecorder::<FullPrecisionSettings>::new();
            recorder
                .record(record, full_path.clone().into())
                .map_err(|e| ModelError::save_checkpoint(&full_path, e.to_string()))?;
        }
        CheckpointFormat::Json => {
            let recorder = PrettyJsonFileRecorder::<FullPrecisionSettings>::new();
            recorder
                .record(record, full_path.clone().into())
                .map_err(|e| ModelError::save_checkpoint(&full_path, e.to_string()))?;
        }
    }

    tracing::debug!(path = %full_path, %format, "saved classifier checkpoint");
    Ok(full_path)
}

/// Loads classifier weights from a checkpoint file.
///
/// The classifier asset is loaded once per process and reused for every
/// inference; a missing or unreadable checkpoint is terminal for the
/// session.
///
/// # Arguments
///
/// - `model`: The model to load weights into
/// - `path`: Path to the checkpoint file (with extension)
/// - `device`: Device to load onto
///
/// # Errors
///
/// Returns [`ModelError::CheckpointNotFound`] if the file doesn't exist,
/// [`ModelError::UnsupportedFormat`] if the extension is not recognized,
/// and [`ModelError::LoadCheckpoint`] if deserialization fails.
pub fn load_checkpoint<B, M>(model: M, path: &Path, device: &B::Device) -> Result<M>
where
    B: Backend,
    M: Module<B>,
{
    if !path.exists() {
        return Err(ModelError::checkpoint_not_found(path.display().to_string()));
    }

    let format = CheckpointFormat::from_path(path)
        .ok_or_else(|| ModelError::unsupported_format(path.display().to_string()))?;

    let loaded = match format {
        CheckpointFormat::Binary => {
            let recorder = BinFileRecorder::<FullPrecisionSettings>::new();
            model
                .load_file(path, &recorder, device)
                .map_err(|e| ModelError::load_checkpoint(path.display().to_string(), e.to_string()))?
        }
        CheckpointFormat::Json => {
            let recorder = PrettyJsonFileRecorder::<FullPrecisionSettings>::new();
            model
                .load_file(path, &recorder, device)
                .map_err(|e| ModelError::load_checkpoint(path.display().to_string(), e.to_string()))?
        }
    };

    tracing::info!(path = %path.display(), %format, "loaded classifier checkpoint");
    Ok(loaded)
}
