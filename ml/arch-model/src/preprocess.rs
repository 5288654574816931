//! Image preprocessing for classifier input.
//!
//! Uploaded sole photographs (JPEG or PNG) are decoded, forced to RGB,
//! resized to the classifier's fixed 224×224 input, and scaled to `[0, 1]`
//! in CHW layout.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use sole_types::SoleScan;

use crate::error::{ModelError, Result};

/// Classifier input side length, as the resize target.
const RESIZE_SIDE: u32 = 224;

/// Preprocesses a decoded image into a scan tensor.
///
/// # Errors
///
/// Returns [`ModelError::InvalidScan`] if the produced tensor fails scan
/// validation (cannot happen for images decoded by this module).
pub fn scan_from_image(image: &DynamicImage) -> Result<SoleScan> {
    let resized = image
        .resize_exact(RESIZE_SIDE, RESIZE_SIDE, FilterType::Triangle)
        .to_rgb8();

    let plane = SoleScan::INPUT_WIDTH * SoleScan::INPUT_HEIGHT;
    let mut values = vec![0.0f32; SoleScan::VALUE_COUNT];

    for (y, row) in resized.rows().enumerate() {
        for (x, pixel) in row.enumerate() {
            let offset = y * SoleScan::INPUT_WIDTH + x;
            for (channel, &level) in pixel.0.iter().enumerate() {
                values[channel * plane + offset] = f32::from(level) / 255.0;
            }
        }
    }

    Ok(SoleScan::new(values)?)
}

/// Decodes and preprocesses an uploaded image.
///
/// # Errors
///
/// Returns [`ModelError::DecodeImage`] if the bytes are not a decodable
/// image. The failure is terminal for the current request only; the
/// session stays usable for a retry with a new upload.
pub fn scan_from_bytes(bytes: &[u8]) -> Result<SoleScan> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ModelError::decode_image(e.to_string()))?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "decoded sole image"
    );
    scan_from_image(&image)
}

/// Reads, decodes, and preprocesses an image file.
///
/// # Errors
///
/// Returns [`ModelError::Io`] if the file cannot be read and
/// [`ModelError::DecodeImage`] if its contents are not a decodable image.
pub fn scan_from_path(path: &Path) -> Result<SoleScan> {
    let bytes = std::fs::read(path)?;
    scan_from_bytes(&bytes)
}
