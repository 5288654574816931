//! Error types for the arch-model crate.

use thiserror::Error;

use sole_types::ValidationError;

/// Errors that can occur in arch-model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to load a checkpoint.
    #[error("failed to load checkpoint from {path}: {reason}")]
    LoadCheckpoint {
        /// Path to the checkpoint file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to save a checkpoint.
    #[error("failed to save checkpoint to {path}: {reason}")]
    SaveCheckpoint {
        /// Path to the checkpoint file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Checkpoint file not found.
    ///
    /// The classifier asset is required; the surrounding shell treats this
    /// as terminal for the whole session.
    #[error("checkpoint not found: {0}")]
    CheckpointNotFound(String),

    /// Unsupported checkpoint format.
    #[error("unsupported checkpoint format: {0}")]
    UnsupportedFormat(String),

    /// Invalid model configuration.
    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),

    /// Uploaded image could not be decoded.
    ///
    /// Terminal for the current request only; a new upload can be retried.
    #[error("failed to decode sole image: {0}")]
    DecodeImage(String),

    /// Preprocessing produced an invalid scan tensor.
    #[error("invalid scan tensor: {0}")]
    InvalidScan(#[from] ValidationError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl ModelError {
    /// Creates a load checkpoint error.
    #[must_use]
    pub fn load_checkpoint(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadCheckpoint {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a save checkpoint error.
    #[must_use]
    pub fn save_checkpoint(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SaveCheckpoint {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a checkpoint not found error.
    #[must_use]
    pub fn checkpoint_not_found(path: impl Into<String>) -> Self {
        Self::CheckpointNotFound(path.into())
    }

    /// Creates an unsupported format error.
    #[must_use]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Creates an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates an image decode error.
    #[must_use]
    pub fn decode_image(reason: impl Into<String>) -> Self {
        Self::DecodeImage(reason.into())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type for arch-model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_load_checkpoint() {
        let err = ModelError::load_checkpoint("arch.bin", "file corrupted");
        assert!(err.to_string().contains("arch.bin"));
        assert!(err.to_string().contains("file corrupted"));
    }

    #[test]
    fn error_checkpoint_not_found() {
        let err = ModelError::checkpoint_not_found("/models/missing.bin");
        assert!(err.to_string().contains("/models/missing.bin"));
    }

    #[test]
    fn error_unsupported_format() {
        let err = ModelError::unsupported_format("h5");
        assert!(err.to_string().contains("h5"));
    }

    #[test]
    fn error_decode_image() {
        let err = ModelError::decode_image("not a JPEG");
        assert!(err.to_string().contains("not a JPEG"));
    }

    #[test]
    fn error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ModelError = io_err.into();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn error_from_validation_error() {
        let err: ModelError = ValidationError::InvalidProbability(2.0).into();
        assert!(matches!(err, ModelError::InvalidScan(_)));
    }
}
