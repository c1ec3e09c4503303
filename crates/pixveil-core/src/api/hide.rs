use std::path::{Path, PathBuf};

use crate::commands;
use crate::compression::{CompressionStrategy, NoCompression, ZlibCompression};
use crate::envelope::Envelope;
use crate::error::PixveilError;
use crate::media::image::CodecOptions;

pub fn prepare() -> HideApi {
    HideApi::default()
}

pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    compression: Box<dyn CompressionStrategy>,
    options: CodecOptions,
}

impl Default for HideApi {
    fn default() -> Self {
        Self {
            message: None,
            file: None,
            image: None,
            output: None,
            compression: Box::new(ZlibCompression::default()),
            options: CodecOptions::default(),
        }
    }
}

impl HideApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Inject a compression strategy instead of the zlib default
    pub fn with_compression<C: CompressionStrategy + 'static>(mut self, strategy: C) -> Self {
        self.compression = Box::new(strategy);
        self
    }

    /// Embed the framed payload without compressing it first
    pub fn without_compression(mut self) -> Self {
        self.compression = Box::new(NoCompression);
        self
    }

    /// Execute the hide process and block until it is finished
    pub fn execute(self) -> Result<(), PixveilError> {
        let payload = self.payload()?;
        let Some(image) = self.image else {
            return Err(PixveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixveilError::TargetNotSet);
        };

        commands::hide(&image, &output, &payload, &*self.compression, &self.options)
    }

    fn payload(&self) -> Result<Envelope, PixveilError> {
        match (&self.message, &self.file) {
            (Some(message), None) => Ok(Envelope::text(message.clone())),
            (None, Some(file)) => {
                let content =
                    std::fs::read(file).map_err(|source| PixveilError::ReadError { source })?;
                let extension = file
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default();

                Ok(Envelope::file(extension, content))
            }
            (Some(_), Some(_)) => Err(PixveilError::ConflictingPayload),
            (None, None) => Err(PixveilError::MissingPayload),
        }
    }
}
