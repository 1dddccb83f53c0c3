//! File sink for encoded blobs.
//!
//! Blobs are always assembled in memory first, written to a temporary file
//! next to the destination and renamed into place, so a failed save never
//! leaves a truncated file at `path`.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::encode::{encode_ppm, EncodeError, Y4mEncoder};

/// File name used when the caller does not choose one for a PPM snapshot.
pub const DEFAULT_PPM_FILENAME: &str = "canvas.ppm";

/// File name used when the caller does not choose one for a video.
pub const DEFAULT_Y4M_FILENAME: &str = "canvas.y4m";

/// Write an encoded blob to `path`, replacing any existing file.
pub fn save(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let io_error = |e: std::io::Error| EncodeError::IoError(format!("{}: {}", path.display(), e));

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(bytes).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    // The temporary file is deleted on drop if persisting fails.
    file.persist(path).map_err(|e| io_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved blob");
    Ok(())
}

/// Encode an RGBA raster as PPM and write it to `path`.
pub fn save_ppm(
    path: impl AsRef<Path>,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), EncodeError> {
    let ppm = encode_ppm(pixels, width, height)?;
    save(&ppm, path)
}

impl Y4mEncoder {
    /// Serialize the stream and write it to `path`.
    ///
    /// The frame list is drained even if the write fails.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        let frames = self.frame_count();
        let blob = self.serialize();
        tracing::info!(frames, "saving y4m stream");
        save(&blob, path)
    }
}
