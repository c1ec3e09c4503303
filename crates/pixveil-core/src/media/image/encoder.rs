use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};
use image::RgbaImage;

use crate::error::PixveilError;
use crate::media::image::capacity::max_bytes;
use crate::media::image::iterators::RgbChannelsMut;
use crate::media::image::lsb_codec::CodecOptions;
use crate::result::Result;

/// Writes `data` into the low bits of the R, G and B channels of `image`.
///
/// Bits are consumed most significant first and pixels are walked row-major,
/// channel order R, G, B with alpha skipped. The capacity precondition is
/// checked before any pixel is touched, and channels beyond the payload keep
/// whatever their low bits held before.
pub(crate) fn embed(data: &[u8], image: &mut RgbaImage, options: &CodecOptions) -> Result<()> {
    let bits_per_channel = options.checked_bits_per_channel()?;
    let capacity = max_bytes(image.width(), image.height(), bits_per_channel);
    if data.len() > capacity {
        return Err(PixveilError::PayloadTooLarge {
            size: data.len(),
            capacity,
        });
    }

    let mask = options.mask();
    let total_bits = data.len() * 8;
    let mut reader = BitReader::endian(Cursor::new(data), BigEndian);
    let mut written = 0;

    for channel in RgbChannelsMut::new(image) {
        if written == total_bits {
            break;
        }
        let take = (total_bits - written).min(bits_per_channel as usize) as u32;
        let bits: u8 = reader
            .read(take)
            .map_err(|source| PixveilError::ReadError { source })?;
        // a short tail group sits in the high bits of the window, zero padded
        let bits = bits << (u32::from(bits_per_channel) - take);

        *channel = (*channel & !mask) | bits;
        written += take as usize;
    }

    Ok(())
}
