use std::path::{Path, PathBuf};

use log::warn;

use crate::compression::{CompressionStrategy, ZlibCompression};
use crate::envelope::Envelope;
use crate::error::PixveilError;
use crate::media::image::{open_image, save_image, CodecOptions, LsbCodec};
use crate::result::Result;

/// Hides the payload inside the carrier image and writes the result to `target`.
pub fn hide(
    carrier: &Path,
    target: &Path,
    payload: &Envelope,
    compression: &dyn CompressionStrategy,
    options: &CodecOptions,
) -> Result<()> {
    let mut image = open_image(carrier)?;
    crate::conceal(payload, &mut image, compression, options)?;
    save_image(&image, target)
}

/// Recovers the payload from a secret image and writes it into `destination`,
/// returning the path of the written file.
///
/// Text becomes `decoded_message.txt`, files become `decoded_file.<ext>` and
/// unrecognized binary content becomes `decoded_file.bin`.
pub fn reveal(secret: &Path, destination: &Path, options: &CodecOptions) -> Result<PathBuf> {
    let image = open_image(secret)?;
    let payload = crate::reveal(&image, &ZlibCompression::default(), options)?;

    let (file_name, content) = match payload {
        Envelope::Text(text) if text.is_empty() => return Err(PixveilError::NoSecretData),
        Envelope::Text(text) => ("decoded_message.txt".to_owned(), text.into_bytes()),
        Envelope::File { extension, content } if extension.is_empty() => {
            ("decoded_file".to_owned(), content)
        }
        Envelope::File { extension, content } => (format!("decoded_file.{extension}"), content),
        Envelope::Binary(content) => ("decoded_file.bin".to_owned(), content),
    };

    let target = destination.join(file_name);
    std::fs::write(&target, content).map_err(|source| PixveilError::WriteError { source })?;

    Ok(target)
}

/// Dumps the sentinel-trimmed raw stream, no decompression and no content
/// format interpretation. Just the bytes gathered by the LSB algorithm.
pub fn reveal_raw(secret: &Path, destination_file: &Path, options: &CodecOptions) -> Result<()> {
    let image = open_image(secret)?;
    let extraction = LsbCodec::extract(&image, options)?;
    if !extraction.terminated {
        warn!("no end marker found, dumping the whole extracted stream");
    }

    std::fs::write(destination_file, extraction.content)
        .map_err(|source| PixveilError::WriteError { source })
}
