//! RGBA raster model shared by both encoders.

use crate::encode::EncodeError;

/// Bytes per RGBA sample.
pub const RGBA_CHANNELS: usize = 4;

/// An RGBA raster captured from a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is always width * height * 4.
    pixels: Vec<u8>,
}

/// Byte length of a `width` x `height` RGBA buffer, or `None` if it does not
/// fit in `usize`.
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(RGBA_CHANNELS)
}

/// Check that `pixels` holds exactly `width * height` RGBA samples.
///
/// Zero width or height is rejected even when the buffer is empty. When the
/// required length overflows `usize`, `expected` in the error is `usize::MAX`.
pub fn validate_rgba(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    let expected = rgba_len(width, height);
    if width == 0 || height == 0 || expected != Some(pixels.len()) {
        return Err(EncodeError::InvalidRaster {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual: pixels.len(),
        });
    }
    Ok(())
}

impl Raster {
    /// Create a raster, validating geometry against the sample buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EncodeError> {
        validate_rgba(&pixels, width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert to an image::RgbaImage.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, returning its RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// RGBA sample at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * RGBA_CHANNELS;
        let px = &self.pixels[idx..idx + RGBA_CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterate RGB triples in row-major order, alpha dropped.
    pub fn rgb_triples(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        rgb_triples(&self.pixels)
    }
}

/// Iterate RGB triples of a raw RGBA buffer, alpha dropped.
pub(crate) fn rgb_triples(rgba: &[u8]) -> impl Iterator<Item = [u8; 3]> + '_ {
    rgba.chunks_exact(RGBA_CHANNELS).map(|px| [px[0], px[1], px[2]])
}

impl TryFrom<image::RgbaImage> for Raster {
    type Error = EncodeError;

    fn try_from(img: image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}
