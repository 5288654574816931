//! Validation and classification error types.

use thiserror::Error;

/// Validation errors for diagnosis input types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Scan tensor has the wrong number of values.
    #[error("scan tensor length mismatch: expected {expected}, got {actual}")]
    ScanLengthMismatch {
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },

    /// Scan tensor value is out of range `[0, 1]` or not finite.
    #[error("scan value out of range [0, 1] at index {index}: {value}")]
    ScanValueOutOfRange {
        /// Flat index of the offending value.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// Class probability is out of range `[0, 1]` or not finite.
    #[error("class probability out of range [0, 1]: {0}")]
    InvalidProbability(f32),

    /// Unknown arch class label.
    #[error("unknown arch class label: {0:?}")]
    UnknownArchLabel(String),

    /// Unknown leg shape label.
    #[error("unknown leg shape label: {0:?}")]
    UnknownLegLabel(String),

    /// Unknown bunion label.
    #[error("unknown bunion label: {0:?}")]
    UnknownBunionLabel(String),

    /// Pattern identifier outside `[1, 12]`.
    #[error("pattern id out of range [1, 12]: {0}")]
    PatternIdOutOfRange(u8),
}

/// Errors reported by an [`ArchClassifier`](crate::ArchClassifier)
/// implementation.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Classifier output has an unexpected shape.
    #[error("classifier output shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape.
        expected: String,
        /// Actual shape.
        actual: String,
    },

    /// The inference backend failed.
    #[error("classifier backend failure: {0}")]
    Backend(String),
}

impl ClassifyError {
    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a backend failure error.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}
