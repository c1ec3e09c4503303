use crate::error::PixveilError;

pub type Result<T> = std::result::Result<T, PixveilError>;
