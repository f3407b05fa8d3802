//! Error types for board generation and image output

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or writing a board image
#[derive(Error, Debug)]
pub enum Error {
    /// Board dimension or cell length is zero, or the image would be too large
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// The two board colors do not have the same number of channels
    #[error("Channel mismatch: light has {light} channels, dark has {dark}")]
    ChannelMismatch { light: usize, dark: usize },

    /// A color string could not be parsed
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    /// A preset name that is neither `board` nor `highlight`
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    /// A grid does not match the shape its color mode declares
    #[error("Grid shape mismatch: {0}")]
    GridShape(String),

    /// The PNG encoder rejected the image
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Filesystem error while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(e) => Error::Io(e),
            other => Error::Encode(other.to_string()),
        }
    }
}
