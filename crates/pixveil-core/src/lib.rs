//! # Pixveil Core API
//!
//! Hides an arbitrary byte payload, a text message or a file, inside the
//! least significant bits of the RGB channels of a lossless image, and
//! recovers it later. The alpha channel is never touched.
//!
//! On the way into the image a payload is framed with a type tag by the
//! [`Envelope`], compressed through a [`CompressionStrategy`], terminated
//! with the [`sentinel::SENTINEL`] marker and written bit by bit into the
//! pixel channels. The way out mirrors it: extract bits until the sentinel
//! turns up, decompress, unframe.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image and read it back
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use pixveil_core::{conceal, reveal, CodecOptions, Envelope, ZlibCompression};
//!
//! let mut image = RgbaImage::from_pixel(64, 64, Rgba([120, 44, 7, 255]));
//! let compression = ZlibCompression::default();
//! let options = CodecOptions::default();
//!
//! conceal(
//!     &Envelope::text("Hello, World!"),
//!     &mut image,
//!     &compression,
//!     &options,
//! )
//! .expect("Failed to hide message in image");
//!
//! let payload = reveal(&image, &compression, &options)
//!     .expect("Failed to reveal message from image");
//! assert_eq!(payload, Envelope::text("Hello, World!"));
//! ```
//!
//! ## Work with image files on disk
//!
//! ```rust,no_run
//! pixveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier-image.png")
//!     .with_output("image-with-a-message-inside.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

#![warn(clippy::redundant_else)]

use image::RgbaImage;
use log::debug;

pub mod api;
pub mod commands;
pub mod compression;
pub mod envelope;
pub mod error;
pub mod media;
pub mod result;
pub mod sentinel;

pub use crate::compression::{CompressionStrategy, NoCompression, ZlibCompression};
pub use crate::envelope::Envelope;
pub use crate::error::PixveilError;
pub use crate::media::image::capacity::max_bytes;
pub use crate::media::image::{CodecOptions, Extraction, LsbCodec};
pub use crate::result::Result;
pub use crate::sentinel::SENTINEL;

/// Embeds the payload into the carrier image in place.
///
/// The payload is framed, compressed and terminated with the sentinel before
/// any pixel is touched; a payload that does not fit fails with
/// [`PixveilError::PayloadTooLarge`] and leaves the carrier unmodified.
pub fn conceal(
    payload: &Envelope,
    image: &mut RgbaImage,
    compression: &dyn CompressionStrategy,
    options: &CodecOptions,
) -> Result<()> {
    let framed = payload.to_raw_data()?;
    let mut data = compression.compress(&framed);
    data.extend_from_slice(&SENTINEL);

    LsbCodec::embed(&data, image, options)
}

/// Recovers the payload embedded in the image.
///
/// A carrier without a sentinel does not fail: the whole extracted stream is
/// classified as a best-effort payload, which is what foreign or damaged
/// images produce.
pub fn reveal(
    image: &RgbaImage,
    compression: &dyn CompressionStrategy,
    options: &CodecOptions,
) -> Result<Envelope> {
    let extraction = LsbCodec::extract(image, options)?;
    if !extraction.terminated {
        debug!("no end marker found, treating the whole extracted stream as payload");
    }

    let data = compression.decompress(&extraction.content);
    Envelope::from_raw_data(&data)
}

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::test_utils::{prepare_growing_colors_image, prepare_noise_image};

    #[test]
    fn should_round_trip_text_across_dimensions() {
        let compression = NoCompression;
        let options = CodecOptions::default();

        for (width, height, text) in [
            (8u32, 8u32, "ab"),
            (16, 16, "a somewhat longer message"),
            (31, 17, "odd dimensions work too"),
            (64, 1, "one pixel row"),
        ] {
            let mut image = prepare_growing_colors_image(width, height);
            let payload = Envelope::text(text);

            conceal(&payload, &mut image, &compression, &options).unwrap();
            let revealed = reveal(&image, &compression, &options).unwrap();

            assert_eq!(revealed, payload, "round trip failed for {width}x{height}");
        }
    }

    #[test]
    fn should_round_trip_highly_compressible_text() {
        let mut image = prepare_growing_colors_image(64, 64);
        let compression = ZlibCompression::default();
        let options = CodecOptions::default();
        let payload = Envelope::text("repeat ".repeat(500));

        conceal(&payload, &mut image, &compression, &options).unwrap();

        assert_eq!(reveal(&image, &compression, &options).unwrap(), payload);
    }

    #[test]
    fn should_round_trip_an_incompressible_file() {
        let mut image = prepare_growing_colors_image(64, 64);
        let compression = ZlibCompression::default();
        let options = CodecOptions::default();
        // pseudo random content that zlib cannot shrink
        let content: Vec<u8> = (0..600u32)
            .map(|i| (i.wrapping_mul(2654435761) >> 13) as u8)
            .collect();
        let payload = Envelope::file("bin", content);

        conceal(&payload, &mut image, &compression, &options).unwrap();

        assert_eq!(reveal(&image, &compression, &options).unwrap(), payload);
    }

    #[test]
    fn should_accept_a_payload_filling_the_image_exactly() {
        // capacity of 8x8 is 24 bytes, sentinel takes 6 of them
        let mut image = prepare_growing_colors_image(8, 8);
        let options = CodecOptions::default();
        let payload = Envelope::Binary(vec![0x80; 18]);

        conceal(&payload, &mut image, &NoCompression, &options).unwrap();

        assert_eq!(reveal(&image, &NoCompression, &options).unwrap(), payload);
    }

    #[test]
    fn should_reject_a_payload_one_byte_over_capacity_and_keep_the_image() {
        let original = prepare_growing_colors_image(8, 8);
        let mut image = original.clone();
        let options = CodecOptions::default();
        let payload = Envelope::Binary(vec![0x80; 19]);

        let result = conceal(&payload, &mut image, &NoCompression, &options);

        match result {
            Err(PixveilError::PayloadTooLarge {
                size: 25,
                capacity: 24,
            }) => (),
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
        assert_eq!(original, image, "carrier must stay untouched");
    }

    #[test]
    fn should_keep_the_alpha_channel_bit_for_bit() {
        let original = prepare_noise_image(32, 32, 7);
        let mut image = original.clone();
        let payload = Envelope::text("alpha must survive");

        conceal(
            &payload,
            &mut image,
            &ZlibCompression::default(),
            &CodecOptions::default(),
        )
        .unwrap();

        for (before, after) in original.pixels().zip(image.pixels()) {
            assert_eq!(before.0[3], after.0[3], "alpha channel was modified");
        }
    }

    #[test]
    fn should_classify_a_foreign_noise_image_as_binary() {
        // never produced by the embedder, carries no sentinel
        let image = prepare_noise_image(16, 16, 42);
        let options = CodecOptions::default();

        let payload = reveal(&image, &ZlibCompression::default(), &options).unwrap();

        match payload {
            Envelope::Binary(content) => {
                // 16 * 16 * 3 bits aligned up to whole bytes
                assert_eq!(content.len(), 96);
            }
            other => panic!("expected a Binary classification, got {other:?}"),
        }
    }

    #[test]
    fn should_round_trip_with_a_deeper_bit_plane() {
        let mut image = prepare_growing_colors_image(32, 32);
        let options = CodecOptions { bits_per_channel: 2 };
        let payload = Envelope::text("two bits at a time");

        conceal(&payload, &mut image, &NoCompression, &options).unwrap();

        assert_eq!(reveal(&image, &NoCompression, &options).unwrap(), payload);
    }
}
