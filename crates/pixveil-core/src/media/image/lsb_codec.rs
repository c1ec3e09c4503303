use image::RgbaImage;

use crate::error::PixveilError;
use crate::media::image::decoder::{self, Extraction};
use crate::media::image::encoder;
use crate::result::Result;

/// Options governing how payload bits map onto pixel channels.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// number of low-order bits used per color channel, between 1 and 8.
    ///
    /// Note this number influences the capacity directly, and it must match
    /// between the embedding and the extracting side.
    pub bits_per_channel: u8,
}

impl Default for CodecOptions {
    /// One bit per channel, the wire default
    fn default() -> Self {
        Self { bits_per_channel: 1 }
    }
}

impl CodecOptions {
    pub(crate) fn checked_bits_per_channel(&self) -> Result<u8> {
        match self.bits_per_channel {
            n @ 1..=8 => Ok(n),
            n => Err(PixveilError::InvalidBitDepth(n)),
        }
    }

    pub(crate) fn mask(&self) -> u8 {
        ((1u16 << self.bits_per_channel) - 1) as u8
    }
}

/// Facade for the bit-plane embed and extract passes
pub struct LsbCodec;

impl LsbCodec {
    /// Writes the raw byte stream into the carrier image.
    ///
    /// Fails with [`PixveilError::PayloadTooLarge`] before mutating anything
    /// when the stream does not fit.
    pub fn embed(data: &[u8], image: &mut RgbaImage, options: &CodecOptions) -> Result<()> {
        encoder::embed(data, image, options)
    }

    /// Reads the raw byte stream back out of a carrier image, stopping at
    /// the sentinel when one is present.
    pub fn extract(image: &RgbaImage, options: &CodecOptions) -> Result<Extraction> {
        decoder::extract(image, options)
    }
}
