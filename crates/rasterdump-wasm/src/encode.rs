//! PPM encoding WASM bindings.

use rasterdump_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to binary PPM bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as a `Uint8Array` or `Uint8ClampedArray`
///   (4 bytes per pixel, row-major order), typically `ImageData.data`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if width or height is zero or the pixel data length
/// doesn't match width * height * 4.
#[wasm_bindgen]
pub fn encode_ppm(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_ppm(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}
