//! YUV4MPEG2 (`.y4m`) encoding with 4:4:4 planar frames.
//!
//! Stream layout:
//!
//! ```text
//! YUV4MPEG2 W<width> H<height> F<fps>:1 Ip A1:1 C444\n
//! { FRAME\n <Y plane> <Cr plane> <Cb plane> } *
//! ```
//!
//! Every plane holds one byte per pixel in row-major order.

use super::{EncodeError, VideoConfig};
use crate::color::rgb_to_ycrcb;
use crate::raster::{rgb_triples, rgba_len, validate_rgba, Raster};

/// Header written before every frame's planes.
pub const FRAME_MARKER: &[u8] = b"FRAME\n";

/// Planar samples for one ingested frame.
#[derive(Debug, Clone)]
struct Frame {
    y: Vec<u8>,
    cr: Vec<u8>,
    cb: Vec<u8>,
}

impl Frame {
    fn from_rgba(rgba: &[u8], pixel_count: usize) -> Self {
        let mut frame = Self {
            y: Vec::with_capacity(pixel_count),
            cr: Vec::with_capacity(pixel_count),
            cb: Vec::with_capacity(pixel_count),
        };
        for [r, g, b] in rgb_triples(rgba) {
            let [y, cr, cb] = rgb_to_ycrcb(r, g, b).to_u8();
            frame.y.push(y);
            frame.cr.push(cr);
            frame.cb.push(cb);
        }
        frame
    }
}

/// Accumulates rasters into an in-memory YUV4MPEG2 stream.
///
/// Geometry and frame rate are fixed at construction. Frames are appended by
/// [`push_frame`](Self::push_frame) and drained by
/// [`serialize`](Self::serialize), after which the encoder can record a new
/// video with the same settings.
#[derive(Debug, Clone)]
pub struct Y4mEncoder {
    width: u32,
    height: u32,
    fps: u32,
    frames: Vec<Frame>,
}

impl Y4mEncoder {
    /// Create an encoder for `width` x `height` frames at `fps` frames per second.
    ///
    /// `fps` is taken as a float so fractional rates such as 29.97 can be
    /// rejected with [`EncodeError::InvalidConfiguration`] rather than
    /// silently truncated.
    pub fn new(width: u32, height: u32, fps: f64) -> Result<Self, EncodeError> {
        if !fps.is_finite() || fps.fract() != 0.0 {
            return Err(EncodeError::InvalidConfiguration(format!(
                "FPS must be an integer, got {}",
                fps
            )));
        }
        if !(1.0..=u32::MAX as f64).contains(&fps) {
            return Err(EncodeError::InvalidConfiguration(format!(
                "FPS must be between 1 and {}, got {}",
                u32::MAX,
                fps
            )));
        }
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidConfiguration(format!(
                "width ({}) and height ({}) must be non-zero",
                width, height
            )));
        }
        if rgba_len(width, height).is_none() {
            return Err(EncodeError::InvalidConfiguration(format!(
                "{}x{} frames do not fit in memory",
                width, height
            )));
        }

        Ok(Self {
            width,
            height,
            fps: fps as u32,
            frames: Vec::new(),
        })
    }

    /// Create an encoder from a [`VideoConfig`].
    pub fn from_config(config: &VideoConfig) -> Result<Self, EncodeError> {
        Self::new(config.width, config.height, config.fps)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Number of frames waiting to be serialized.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// ASCII stream header for this encoder's settings.
    pub fn stream_header(&self) -> String {
        format!(
            "YUV4MPEG2 W{} H{} F{}:1 Ip A1:1 C444\n",
            self.width, self.height, self.fps
        )
    }

    /// Bounded by the RGBA frame length checked in [`new`](Self::new).
    fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Byte length [`serialize`](Self::serialize) would return right now.
    pub fn encoded_len(&self) -> usize {
        let frame_len = FRAME_MARKER.len() + 3 * self.pixel_count();
        self.frames
            .len()
            .saturating_mul(frame_len)
            .saturating_add(self.stream_header().len())
    }

    /// Convert one RGBA raster and append it to the stream.
    ///
    /// Geometry is checked before any conversion, so a rejected frame leaves
    /// the stream unchanged.
    pub fn push_frame(&mut self, pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
        if width != self.width || height != self.height {
            return Err(EncodeError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width,
                height,
            });
        }
        validate_rgba(pixels, width, height)?;

        self.frames.push(Frame::from_rgba(pixels, self.pixel_count()));
        tracing::debug!(frame = self.frames.len(), width, height, "pushed y4m frame");
        Ok(())
    }

    /// Append a [`Raster`] to the stream.
    pub fn push_raster(&mut self, raster: &Raster) -> Result<(), EncodeError> {
        self.push_frame(raster.as_rgba(), raster.width(), raster.height())
    }

    /// Build the complete stream and reset the frame list.
    ///
    /// With no frames pushed this returns just the stream header, which is a
    /// valid empty video.
    pub fn serialize(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(self.stream_header().as_bytes());

        let frames = std::mem::take(&mut self.frames);
        for frame in &frames {
            out.extend_from_slice(FRAME_MARKER);
            out.extend_from_slice(&frame.y);
            out.extend_from_slice(&frame.cr);
            out.extend_from_slice(&frame.cb);
        }

        tracing::debug!(frames = frames.len(), bytes = out.len(), "serialized y4m stream");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat((width * height) as usize)
    }

    #[test]
    fn test_stream_header_format() {
        let encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        assert_eq!(encoder.stream_header(), "YUV4MPEG2 W2 H1 F30:1 Ip A1:1 C444\n");
    }

    #[test]
    fn test_fractional_fps_rejected() {
        let result = Y4mEncoder::new(2, 1, 29.97);
        assert!(matches!(result, Err(EncodeError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_whole_fps_accepted() {
        let encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        assert_eq!(encoder.fps(), 30);
    }

    #[test]
    fn test_non_positive_and_non_finite_fps_rejected() {
        for fps in [0.0, -30.0, f64::NAN, f64::INFINITY, 1e12] {
            assert!(
                matches!(
                    Y4mEncoder::new(2, 1, fps),
                    Err(EncodeError::InvalidConfiguration(_))
                ),
                "fps {} should be rejected",
                fps
            );
        }
    }

    #[test]
    fn test_zero_geometry_rejected() {
        assert!(matches!(
            Y4mEncoder::new(0, 1, 30.0),
            Err(EncodeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Y4mEncoder::new(1, 0, 30.0),
            Err(EncodeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_overflowing_geometry_rejected() {
        for (width, height) in [(1u32 << 31, 1u32 << 31), (u32::MAX, u32::MAX)] {
            assert!(
                matches!(
                    Y4mEncoder::new(width, height, 30.0),
                    Err(EncodeError::InvalidConfiguration(_))
                ),
                "{}x{} should be rejected",
                width,
                height
            );
        }
    }

    #[test]
    fn test_from_config() {
        let config = VideoConfig {
            width: 8,
            height: 4,
            fps: 60.0,
        };
        let encoder = Y4mEncoder::from_config(&config).unwrap();
        assert_eq!((encoder.width(), encoder.height(), encoder.fps()), (8, 4, 60));
    }

    #[test]
    fn test_single_frame_layout() {
        let mut encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        let pixels = [0, 0, 0, 255, 255, 0, 0, 255]; // black, red
        encoder.push_frame(&pixels, 2, 1).unwrap();
        let blob = encoder.serialize();

        let header = b"YUV4MPEG2 W2 H1 F30:1 Ip A1:1 C444\n";
        assert_eq!(&blob[..header.len()], header);

        let body = &blob[header.len()..];
        assert_eq!(&body[..6], FRAME_MARKER);
        // Y plane, then Cr plane, then Cb plane
        let black = rgb_to_ycrcb(0, 0, 0).to_u8();
        let red = rgb_to_ycrcb(255, 0, 0).to_u8();
        assert_eq!(
            &body[6..],
            &[black[0], red[0], black[1], red[1], black[2], red[2]]
        );
        assert_eq!(&body[6..], &[16, 81, 128, 90, 128, red[2]]);
    }

    #[test]
    fn test_multiple_frames_in_push_order() {
        let mut encoder = Y4mEncoder::new(1, 1, 25.0).unwrap();
        encoder.push_frame(&[0, 0, 0, 255], 1, 1).unwrap();
        encoder.push_frame(&[255, 0, 0, 255], 1, 1).unwrap();
        assert_eq!(encoder.frame_count(), 2);

        let blob = encoder.serialize();
        let header_len = "YUV4MPEG2 W1 H1 F25:1 Ip A1:1 C444\n".len();
        let frames = &blob[header_len..];
        assert_eq!(frames.len(), 2 * (6 + 3));
        assert_eq!(&frames[..6], FRAME_MARKER);
        assert_eq!(frames[6], 16);
        assert_eq!(&frames[9..15], FRAME_MARKER);
        assert_eq!(frames[15], 81);
    }

    #[test]
    fn test_dimension_mismatch_leaves_state_unchanged() {
        let mut encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        encoder.push_frame(&solid(2, 1, [1, 2, 3, 4]), 2, 1).unwrap();

        let result = encoder.push_frame(&solid(3, 1, [1, 2, 3, 4]), 3, 1);
        assert!(matches!(
            result,
            Err(EncodeError::DimensionMismatch {
                expected_width: 2,
                width: 3,
                ..
            })
        ));
        assert_eq!(encoder.frame_count(), 1);

        let result = encoder.push_frame(&solid(2, 2, [1, 2, 3, 4]), 2, 2);
        assert!(matches!(result, Err(EncodeError::DimensionMismatch { .. })));
        assert_eq!(encoder.frame_count(), 1);
    }

    #[test]
    fn test_malformed_buffer_rejected() {
        let mut encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        let result = encoder.push_frame(&[0u8; 7], 2, 1);
        assert!(matches!(result, Err(EncodeError::InvalidRaster { .. })));
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_push_raster() {
        let mut encoder = Y4mEncoder::new(2, 2, 30.0).unwrap();
        let raster = Raster::new(2, 2, solid(2, 2, [255, 255, 255, 255])).unwrap();
        encoder.push_raster(&raster).unwrap();
        assert_eq!(encoder.frame_count(), 1);

        let blob = encoder.serialize();
        let header_len = encoder.stream_header().len();
        assert_eq!(&blob[header_len + 6..header_len + 10], &[235, 235, 235, 235]);
    }

    #[test]
    fn test_serialize_resets_state() {
        let mut encoder = Y4mEncoder::new(2, 1, 30.0).unwrap();
        encoder.push_frame(&solid(2, 1, [9, 9, 9, 9]), 2, 1).unwrap();

        let first = encoder.serialize();
        assert!(encoder.is_empty());

        let second = encoder.serialize();
        let third = encoder.serialize();
        assert_eq!(second, b"YUV4MPEG2 W2 H1 F30:1 Ip A1:1 C444\n");
        assert_eq!(second, third);
        assert!(first.len() > second.len());
    }

    #[test]
    fn test_encoder_reusable_after_serialize() {
        let mut encoder = Y4mEncoder::new(1, 1, 30.0).unwrap();
        encoder.push_frame(&[0, 0, 0, 255], 1, 1).unwrap();
        let first = encoder.serialize();

        encoder.push_frame(&[0, 0, 0, 255], 1, 1).unwrap();
        let second = encoder.serialize();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_stream_is_header_only() {
        let mut encoder = Y4mEncoder::new(4, 3, 24.0).unwrap();
        assert_eq!(encoder.encoded_len(), encoder.stream_header().len());
        assert_eq!(encoder.serialize(), b"YUV4MPEG2 W4 H3 F24:1 Ip A1:1 C444\n");
    }

    #[test]
    fn test_encoded_len_matches_serialize() {
        let mut encoder = Y4mEncoder::new(3, 2, 30.0).unwrap();
        for _ in 0..3 {
            encoder.push_frame(&solid(3, 2, [50, 100, 150, 255]), 3, 2).unwrap();
        }
        let expected = encoder.encoded_len();
        assert_eq!(encoder.serialize().len(), expected);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
