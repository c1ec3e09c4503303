use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixveilError {
    /// Represents a payload that does not fit into the carrier image
    #[error("Payload of {size} bytes exceeds the image capacity of {capacity} bytes")]
    PayloadTooLarge { size: usize, capacity: usize },

    /// Represents a bit depth outside of the embeddable range of a color channel
    #[error("Unsupported bit depth {0}, must be between 1 and 8")]
    InvalidBitDepth(u8),

    /// Represents an unsupported carrier media. For example, a JPEG file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents invalid UTF-8 data found inside a tagged text payload
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a file extension whose byte length does not fit the wire format
    #[error("File extension exceeds 65535 bytes")]
    InvalidExtension,

    /// Represents an unveil of no secret data. For example when a carrier contained an empty message
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload, provide a message or a file")]
    MissingPayload,

    #[error("API Error: Only one of message or file can be hidden at a time")]
    ConflictingPayload,
}
