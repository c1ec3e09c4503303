use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::PixveilError;
use crate::media::image::CodecOptions;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    secret_image: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    options: CodecOptions,
}

impl RevealApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be revealed
    pub fn from_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the recovered payload will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the reveal process, returning the path of the written file
    pub fn execute(self) -> Result<PathBuf, PixveilError> {
        let Some(secret_image) = self.secret_image else {
            return Err(PixveilError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(PixveilError::TargetNotSet);
        };

        commands::reveal(&secret_image, &output_folder, &self.options)
    }
}
