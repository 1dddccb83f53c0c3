//! Rasterdump WASM - WebAssembly bindings for the rasterdump encoders
//!
//! This crate exposes the rasterdump-core encoders to JavaScript. The host page
//! captures pixels with `ctx.getImageData(...)`, hands the RGBA bytes over,
//! and downloads the returned `Uint8Array` itself.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible raster wrapper
//! - `encode` - PPM snapshot encoding
//! - `video` - YUV4MPEG2 video recording
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_ppm, JsY4mEncoder } from '@rasterdump/wasm';
//!
//! await init();
//!
//! const { data } = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const ppm = encode_ppm(data, canvas.width, canvas.height);
//!
//! const video = new JsY4mEncoder(canvas.width, canvas.height, 30);
//! video.push_frame(data, canvas.width, canvas.height);
//! const y4m = video.serialize();
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod types;
mod video;

// Re-export public types
pub use encode::encode_ppm;
pub use types::JsRaster;
pub use video::JsY4mEncoder;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Write a line to the browser console. No-op off wasm32.
pub(crate) fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
