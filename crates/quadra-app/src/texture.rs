//! Image decoding for texture layers.
//!
//! The renderer consumes raw RGBA8 buffers only; all format decoding
//! happens here.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TextureLoadError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(
        "{} is {actual_width}x{actual_height}, expected {width}x{height}",
        path.display()
    )]
    SizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Decode an image file into an RGBA8 buffer of exactly `width × height`.
pub fn load_rgba8(path: &Path, width: u32, height: u32) -> Result<Vec<u8>, TextureLoadError> {
    let decoded = image::open(path).map_err(|source| TextureLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (actual_width, actual_height) = rgba.dimensions();
    if (actual_width, actual_height) != (width, height) {
        return Err(TextureLoadError::SizeMismatch {
            path: path.to_path_buf(),
            width,
            height,
            actual_width,
            actual_height,
        });
    }

    Ok(rgba.into_raw())
}
