//! Rasterdump Core - raster capture encoders
//!
//! This crate turns RGBA rasters captured from a rendering surface into
//! byte-exact container blobs:
//!
//! - [`encode::encode_ppm`] for single-frame `P6` PPM images
//! - [`encode::Y4mEncoder`] for multi-frame 4:4:4 YUV4MPEG2 video
//!
//! Acquiring the raster and delivering the blob are left to the caller. The
//! [`sink`] module offers a plain file sink for native use.

pub mod color;
pub mod encode;
pub mod raster;
pub mod sink;

pub use color::{rgb_to_ycrcb, YCrCb};
pub use encode::{encode_ppm, EncodeError, VideoConfig, Y4mEncoder};
pub use raster::Raster;
