//! YUV4MPEG2 recording WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const video = JsY4mEncoder.from_config({ width: 320, height: 240, fps: 30 });
//! for (let i = 0; i < 60; ++i) {
//!   draw(i);
//!   const { data } = ctx.getImageData(0, 0, 320, 240);
//!   video.push_frame(data, 320, 240);
//! }
//! const y4m = video.serialize(); // encoder is empty again afterwards
//! ```

use crate::console_log;
use crate::types::JsRaster;
use rasterdump_core::encode::{VideoConfig, Y4mEncoder};
use wasm_bindgen::prelude::*;

/// A YUV4MPEG2 video being recorded from JavaScript.
#[wasm_bindgen]
pub struct JsY4mEncoder {
    inner: Y4mEncoder,
}

#[wasm_bindgen]
impl JsY4mEncoder {
    /// Create an encoder. `fps` must be a whole number.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, fps: f64) -> Result<JsY4mEncoder, JsValue> {
        Y4mEncoder::new(width, height, fps)
            .map(|inner| JsY4mEncoder { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create an encoder from a `{ width, height, fps }` object.
    pub fn from_config(config: JsValue) -> Result<JsY4mEncoder, JsValue> {
        let config: VideoConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Y4mEncoder::from_config(&config)
            .map(|inner| JsY4mEncoder { inner })
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

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 {
        self.inner.fps()
    }

    /// Number of frames recorded since the last `serialize`.
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> usize {
        self.inner.frame_count()
    }

    /// Append one RGBA frame, typically `ImageData.data`.
    pub fn push_frame(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .push_frame(pixels, width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Append a previously constructed raster.
    pub fn push_raster(&mut self, raster: &JsRaster) -> Result<(), JsValue> {
        self.inner
            .push_raster(raster.as_raster())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Return the whole `.y4m` stream and start a new, empty recording.
    pub fn serialize(&mut self) -> Vec<u8> {
        console_log(&format!("saving {} frames", self.inner.frame_count()));
        self.inner.serialize()
    }
}
