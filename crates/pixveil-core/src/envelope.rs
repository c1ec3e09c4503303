//! Typed framing of payloads before compression and embedding.
//!
//! A framed buffer opens with an ASCII tag that tells the decode side what it
//! recovered. Text is `TXT:` followed by the UTF-8 bytes. Files are `FILE:`
//! followed by a big-endian u16 extension length, the extension bytes and the
//! raw content. A recovered buffer without a known tag is classified as plain
//! text when it decodes as UTF-8 and as opaque binary otherwise, because a
//! corrupted or foreign carrier may yield arbitrary bytes and unframing must
//! always produce some typed result.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::PixveilError;
use crate::result::Result;

/// ASCII tag opening a framed text payload
pub const TEXT_TAG: &[u8] = b"TXT:";

/// ASCII tag opening a framed file payload
pub const FILE_TAG: &[u8] = b"FILE:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Text(String),
    File {
        extension: String,
        content: Vec<u8>,
    },
    /// unrecognized content recovered from a carrier, never produced by framing
    Binary(Vec<u8>),
}

impl Envelope {
    pub fn text(text: impl Into<String>) -> Self {
        Envelope::Text(text.into())
    }

    pub fn file(extension: impl Into<String>, content: Vec<u8>) -> Self {
        Envelope::File {
            extension: extension.into(),
            content,
        }
    }

    /// Frames the payload with its type tag, ready for compression and embedding.
    pub fn to_raw_data(&self) -> Result<Vec<u8>> {
        match self {
            Envelope::Text(text) => {
                let mut buf = Vec::with_capacity(TEXT_TAG.len() + text.len());
                buf.extend_from_slice(TEXT_TAG);
                buf.extend_from_slice(text.as_bytes());
                Ok(buf)
            }
            Envelope::File { extension, content } => {
                if extension.len() > u16::MAX as usize {
                    return Err(PixveilError::InvalidExtension);
                }
                let mut buf =
                    Vec::with_capacity(FILE_TAG.len() + 2 + extension.len() + content.len());
                buf.extend_from_slice(FILE_TAG);
                buf.write_u16::<BigEndian>(extension.len() as u16)?;
                buf.extend_from_slice(extension.as_bytes());
                buf.extend_from_slice(content);
                Ok(buf)
            }
            Envelope::Binary(content) => Ok(content.clone()),
        }
    }

    /// Classifies a recovered buffer into one of the three payload kinds.
    ///
    /// Invalid UTF-8 under an explicit `TXT:` tag is a real error and is
    /// reported. A malformed `FILE:` header degrades to [`Envelope::Binary`]
    /// of the whole buffer instead, the decode path favors returning
    /// something usable over failing outright.
    pub fn from_raw_data(data: &[u8]) -> Result<Self> {
        if let Some(text) = data.strip_prefix(TEXT_TAG) {
            let text = String::from_utf8(text.to_vec())?;
            return Ok(Envelope::Text(text));
        }

        if let Some(file) = data.strip_prefix(FILE_TAG) {
            return Ok(Self::classify_file(file, data));
        }

        Ok(match std::str::from_utf8(data) {
            Ok(text) => Envelope::Text(text.to_owned()),
            Err(_) => Envelope::Binary(data.to_vec()),
        })
    }

    fn classify_file(file: &[u8], whole: &[u8]) -> Self {
        let mut header = Cursor::new(file);
        let Ok(len) = header.read_u16::<BigEndian>() else {
            return Envelope::Binary(whole.to_vec());
        };

        let rest = &file[2..];
        if rest.len() < len as usize {
            return Envelope::Binary(whole.to_vec());
        }

        let (extension, content) = rest.split_at(len as usize);
        match std::str::from_utf8(extension) {
            Ok(extension) => Envelope::File {
                extension: extension.to_owned(),
                content: content.to_vec(),
            },
            Err(_) => Envelope::Binary(whole.to_vec()),
        }
    }
}
