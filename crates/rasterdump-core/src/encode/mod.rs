//! Container encoders for captured rasters.
//!
//! This module provides functionality for:
//! - Encoding a single raster to a binary `P6` PPM image
//! - Accumulating rasters into a 4:4:4 YUV4MPEG2 video stream
//!
//! # Architecture
//!
//! Both encoders are synchronous, in-memory transforms. The PPM encoder is a
//! pure function; the YUV4MPEG2 encoder owns its frame list and drains it on
//! every [`Y4mEncoder::serialize`] call.
//!
//! # Examples
//!
//! ```ignore
//! use rasterdump_core::encode::{encode_ppm, Y4mEncoder};
//!
//! let rgba = vec![255u8; 2 * 1 * 4];
//! let ppm = encode_ppm(&rgba, 2, 1).unwrap();
//!
//! let mut video = Y4mEncoder::new(2, 1, 30.0).unwrap();
//! video.push_frame(&rgba, 2, 1).unwrap();
//! let y4m = video.serialize();
//! ```

mod ppm;
mod types;
mod y4m;

pub use ppm::{encode_ppm, ppm_header};
pub use types::{EncodeError, VideoConfig};
pub use y4m::{Y4mEncoder, FRAME_MARKER};
