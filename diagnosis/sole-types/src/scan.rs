//! Normalized sole-image tensor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A preprocessed sole photograph ready for inference.
///
/// Values are stored as a flat `Vec<f32>` in CHW (Channel-Height-Width)
/// layout, scaled to `[0, 1]`, at the classifier's fixed spatial size of
/// 224×224 with 3 color channels. This is the standard layout for neural
/// network input.
///
/// # Example
///
/// ```
/// use sole_types::SoleScan;
///
/// let scan = SoleScan::new(vec![0.5; SoleScan::VALUE_COUNT]);
/// assert!(scan.is_ok());
///
/// let short = SoleScan::new(vec![0.5; 16]);
/// assert!(short.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoleScan {
    values: Vec<f32>,
}

impl SoleScan {
    /// Fixed input width in pixels.
    pub const INPUT_WIDTH: usize = 224;

    /// Fixed input height in pixels.
    pub const INPUT_HEIGHT: usize = 224;

    /// Number of color channels.
    pub const CHANNELS: usize = 3;

    /// Total number of values in a scan tensor.
    pub const VALUE_COUNT: usize = Self::CHANNELS * Self::INPUT_HEIGHT * Self::INPUT_WIDTH;

    /// Creates a scan from CHW values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScanLengthMismatch`] if `values` does not
    /// hold exactly `3 * 224 * 224` entries, and
    /// [`ValidationError::ScanValueOutOfRange`] if any entry is not a finite
    /// value in `[0, 1]`.
    pub fn new(values: Vec<f32>) -> Result<Self, ValidationError> {
        if values.len() != Self::VALUE_COUNT {
            return Err(ValidationError::ScanLengthMismatch {
                expected: Self::VALUE_COUNT,
                actual: values.len(),
            });
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::ScanValueOutOfRange { index, value });
            }
        }

        Ok(Self { values })
    }

    /// Returns the CHW values.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the tensor shape as `[channels, height, width]`.
    #[must_use]
    pub const fn shape() -> [usize; 3] {
        [Self::CHANNELS, Self::INPUT_HEIGHT, Self::INPUT_WIDTH]
    }
}
