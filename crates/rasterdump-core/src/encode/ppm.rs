//! Binary PPM (`P6`) encoding.
//!
//! The container is a short ASCII header followed by packed RGB triples. Alpha
//! is dropped; there is no padding between rows and no trailing data.

use super::EncodeError;
use crate::raster::{rgb_triples, validate_rgba, Raster};

/// Maximum sample value written into the header.
const MAX_VALUE: u8 = 255;

/// ASCII header for a `width` x `height` binary PPM.
pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{} {} {}\n", width, height, MAX_VALUE)
}

/// Encode RGBA pixel data to binary PPM bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// The header followed by `width * height` RGB triples, or
/// [`EncodeError::InvalidRaster`] if the geometry and buffer disagree.
pub fn encode_ppm(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let header = ppm_header(width, height);
    // Validation bounds the pixel count by the RGBA buffer already in memory.
    let pixel_count = pixels.len() / 4;

    let mut out = Vec::with_capacity(header.len() + pixel_count * 3);
    out.extend_from_slice(header.as_bytes());
    for rgb in rgb_triples(pixels) {
        out.extend_from_slice(&rgb);
    }

    tracing::debug!(width, height, bytes = out.len(), "encoded ppm");
    Ok(out)
}

impl Raster {
    /// Encode this raster as a binary PPM.
    pub fn to_ppm(&self) -> Result<Vec<u8>, EncodeError> {
        encode_ppm(self.as_rgba(), self.width(), self.height())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
