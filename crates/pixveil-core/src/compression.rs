//! Compression of the framed payload before embedding.
//!
//! Compression is an optimization, not a correctness requirement: both
//! directions fail open and hand back the unmodified input bytes on any
//! internal failure. The decode side cannot know whether the encode side
//! actually compressed, so `decompress` of a plain buffer simply returns it.

use std::io::Read;

use flate2::read::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use log::debug;

/// the pluggable compression backend of the codec pipeline
pub trait CompressionStrategy {
    fn compress(&self, data: &[u8]) -> Vec<u8>;
    fn decompress(&self, data: &[u8]) -> Vec<u8>;
}

/// zlib stream compression, the wire default
pub struct ZlibCompression {
    level: Compression,
}

impl ZlibCompression {
    pub fn new(level: Compression) -> Self {
        Self { level }
    }
}

impl Default for ZlibCompression {
    fn default() -> Self {
        Self::new(Compression::best())
    }
}

impl CompressionStrategy for ZlibCompression {
    fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        match ZlibEncoder::new(data, self.level).read_to_end(&mut buf) {
            Ok(_) => buf,
            Err(e) => {
                debug!("compression failed ({e}), keeping data uncompressed");
                data.to_vec()
            }
        }
    }

    fn decompress(&self, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        match ZlibDecoder::new(data).read_to_end(&mut buf) {
            Ok(_) => buf,
            Err(e) => {
                debug!("decompression failed ({e}), passing data through unchanged");
                data.to_vec()
            }
        }
    }
}

/// identity strategy, embeds the framed payload as-is
pub struct NoCompression;

impl CompressionStrategy for NoCompression {
    fn compress(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }

    fn decompress(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }
}
