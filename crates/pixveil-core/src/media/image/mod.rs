use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::PixveilError;
use crate::result::Result;

pub mod capacity;
mod decoder;
mod encoder;
mod iterators;
pub mod lsb_codec;

pub use decoder::Extraction;
pub use lsb_codec::{CodecOptions, LsbCodec};

/// Opens a lossless carrier image from disk as RGBA.
///
/// Only PNG carriers are accepted; lossy formats would destroy the low bits
/// the codec writes into.
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(image::open(path)
            .map_err(|_e| PixveilError::InvalidImageMedia)?
            .to_rgba8()),
        _ => Err(PixveilError::UnsupportedMedia),
    }
}

/// Saves a pixel buffer as a PNG file.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image {path:?}: {e}");
            PixveilError::ImageEncodingError
        })
}
