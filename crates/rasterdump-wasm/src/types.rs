//! WASM-compatible wrapper types for raster data.

use rasterdump_core::Raster;
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// Construct it from `ImageData.data` once and reuse it for both encoders
/// without copying the pixels back and forth.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from RGBA pixel data (4 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::new(width, height, pixels)
            .map(|inner| JsRaster { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_rgba().to_vec()
    }

    /// Encode this raster as a binary PPM.
    pub fn to_ppm(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .to_ppm()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsRaster {
    pub(crate) fn as_raster(&self) -> &Raster {
        &self.inner
    }

    #[cfg(test)]
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }
}
