//! RGB to YCrCb conversion for the YUV4MPEG2 encoder.
//!
//! Coefficients are the BT.601 studio-swing set scaled by 1/256, so 8-bit
//! inputs land in `[16, 235]` for luma and `[16, 240]` for chroma.
//!
//! The `cr` channel is computed with the blue-difference row and `cb` with
//! the red-difference row. Stored in `y, cr, cb` plane order this gives the
//! Y, Cb, Cr layout that C444 decoders expect, so the two must be kept
//! together.

/// Luma row.
const Y_R: f64 = 65.738;
const Y_G: f64 = 129.057;
const Y_B: f64 = 25.064;

/// First chroma row (second stored plane).
const CR_R: f64 = -37.945;
const CR_G: f64 = -74.494;
const CR_B: f64 = 112.439;

/// Second chroma row (third stored plane).
const CB_R: f64 = 112.439;
const CB_G: f64 = -94.154;
const CB_B: f64 = -18.285;

/// One converted sample, before storage into 8-bit planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCrCb {
    pub y: f64,
    pub cr: f64,
    pub cb: f64,
}

impl YCrCb {
    /// Store each channel into a `u8`.
    ///
    /// Fractions are truncated toward zero and out-of-range values saturate at
    /// 0 or 255. For 8-bit RGB inputs no channel leaves the representable
    /// range, so saturation never alters a stored sample.
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        [self.y as u8, self.cr as u8, self.cb as u8]
    }
}

/// Convert an 8-bit RGB sample to YCrCb.
#[inline]
pub fn rgb_to_ycrcb(r: u8, g: u8, b: u8) -> YCrCb {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    YCrCb {
        y: 16.0 + Y_R * r / 256.0 + Y_G * g / 256.0 + Y_B * b / 256.0,
        cr: 128.0 + CR_R * r / 256.0 + CR_G * g / 256.0 + CR_B * b / 256.0,
        cb: 128.0 + CB_R * r / 256.0 + CB_G * g / 256.0 + CB_B * b / 256.0,
    }
}
