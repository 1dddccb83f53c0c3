//! Core types for raster encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while encoding rasters.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Geometry is zero or the sample buffer does not hold width * height RGBA samples.
    #[error(
        "Invalid raster: {width}x{height} needs {expected} bytes (width * height * 4), got {actual}"
    )]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Encoder settings are unusable (non-integer FPS, zero geometry).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Raster geometry differs from the geometry the video was created with.
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// Writing the encoded blob failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Video stream settings for a [`super::Y4mEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second. Must be a positive whole number.
    pub fps: f64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30.0,
        }
    }
}
