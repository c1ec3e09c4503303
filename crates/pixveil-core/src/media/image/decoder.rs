use image::RgbaImage;

use crate::media::image::iterators::RgbChannels;
use crate::media::image::lsb_codec::CodecOptions;
use crate::result::Result;
use crate::sentinel::find_sentinel;

/// number of extracted bits between two sentinel scans
const SCAN_INTERVAL_BITS: usize = 1024;

/// The raw result of a bit-plane extraction pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    /// the recovered bytes, trimmed at the sentinel when one was found
    pub content: Vec<u8>,
    /// whether the sentinel was found, or the image was exhausted instead
    pub terminated: bool,
}

/// Reads the low bits of every R, G and B channel back into a byte stream.
///
/// The image carries no length field, so the walk stops at the first
/// occurrence of the sentinel. Rather than draining the whole image up front,
/// the accumulated byte-aligned prefix is re-scanned after every 1024
/// extracted bits; the scan covers the full prefix each time because the
/// sentinel may straddle an earlier scan boundary. An image without a
/// sentinel yields the entire zero-padded stream with `terminated == false`,
/// which is a fallback for foreign or damaged carriers, not an error.
pub(crate) fn extract(image: &RgbaImage, options: &CodecOptions) -> Result<Extraction> {
    let bits_per_channel = u16::from(options.checked_bits_per_channel()?);
    let mask = options.mask();

    let mut content: Vec<u8> = Vec::new();
    let mut pending: u16 = 0;
    let mut pending_bits: u16 = 0;
    let mut bits_since_scan = 0;

    for channel in RgbChannels::new(image) {
        pending = (pending << bits_per_channel) | u16::from(channel & mask);
        pending_bits += bits_per_channel;
        bits_since_scan += usize::from(bits_per_channel);

        while pending_bits >= 8 {
            content.push((pending >> (pending_bits - 8)) as u8);
            pending_bits -= 8;
            pending &= (1 << pending_bits) - 1;
        }

        if bits_since_scan >= SCAN_INTERVAL_BITS {
            bits_since_scan = 0;
            if let Some(at) = find_sentinel(&content) {
                content.truncate(at);
                return Ok(Extraction {
                    content,
                    terminated: true,
                });
            }
        }
    }

    // byte-align the tail with zero bits
    if pending_bits > 0 {
        content.push((pending << (8 - pending_bits)) as u8);
    }

    match find_sentinel(&content) {
        Some(at) => {
            content.truncate(at);
            Ok(Extraction {
                content,
                terminated: true,
            })
        }
        None => Ok(Extraction {
            content,
            terminated: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::encoder::embed;
    use crate::sentinel::SENTINEL;
    use crate::test_utils::prepare_growing_colors_image;

    fn with_sentinel(payload: &[u8]) -> Vec<u8> {
        let mut data = payload.to_vec();
        data.extend_from_slice(&SENTINEL);
        data
    }

    #[test]
    fn should_extract_what_was_embedded() {
        let mut img = prepare_growing_colors_image(16, 16);
        let payload = b"tucked away bytes";
        embed(&with_sentinel(payload), &mut img, &CodecOptions::default()).unwrap();

        let extraction = extract(&img, &CodecOptions::default()).unwrap();
        assert!(extraction.terminated);
        assert_eq!(extraction.content, payload);
    }

    #[test]
    fn should_find_a_sentinel_straddling_the_scan_boundary() {
        // 1024 bits = 128 bytes; a 125 byte payload puts the sentinel
        // across bytes 125..131 and therefore across the first boundary
        let mut img = prepare_growing_colors_image(80, 80);
        let payload: Vec<u8> = (0u8..125).map(|i| i.wrapping_mul(7)).collect();
        embed(&with_sentinel(&payload), &mut img, &CodecOptions::default()).unwrap();

        let extraction = extract(&img, &CodecOptions::default()).unwrap();
        assert!(extraction.terminated);
        assert_eq!(extraction.content, payload);
    }

    #[test]
    fn should_fall_back_to_the_full_stream_without_a_sentinel() {
        // 8x8 -> 192 channel bits -> exactly 24 bytes, no padding byte
        let img = prepare_growing_colors_image(8, 8);

        let extraction = extract(&img, &CodecOptions::default()).unwrap();
        assert!(!extraction.terminated);
        assert_eq!(extraction.content.len(), 24);
    }

    #[test]
    fn should_zero_pad_a_partial_tail_byte() {
        // 5x5 -> 75 bits -> 9 whole bytes plus 3 padded bits
        let img = prepare_growing_colors_image(5, 5);

        let extraction = extract(&img, &CodecOptions::default()).unwrap();
        assert!(!extraction.terminated);
        assert_eq!(extraction.content.len(), 10);
        assert_eq!(extraction.content[9] & 0b0001_1111, 0, "tail must be zero padded");
    }

    #[test]
    fn should_trim_at_the_earliest_sentinel() {
        let mut img = prepare_growing_colors_image(32, 32);
        let mut data = with_sentinel(b"first");
        data.extend_from_slice(b"shadow payload");
        data.extend_from_slice(&SENTINEL);
        embed(&data, &mut img, &CodecOptions::default()).unwrap();

        let extraction = extract(&img, &CodecOptions::default()).unwrap();
        assert!(extraction.terminated);
        assert_eq!(extraction.content, b"first");
    }

    #[test]
    fn should_round_trip_at_two_bits_per_channel() {
        let mut img = prepare_growing_colors_image(16, 16);
        let opts = CodecOptions { bits_per_channel: 2 };
        let payload = b"twice the density";
        embed(&with_sentinel(payload), &mut img, &opts).unwrap();

        let extraction = extract(&img, &opts).unwrap();
        assert!(extraction.terminated);
        assert_eq!(extraction.content, payload);
    }
}
