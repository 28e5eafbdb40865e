//! Error types for parsing and lexicon loading

use thiserror::Error;

/// Errors raised at the edges of the parser
///
/// Normalization, segmentation, classification and lexicon queries are
/// total over `&str`; only decoding raw input, reading files and reading
/// configuration can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Input that is not valid text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading a lexicon or configuration source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::InvalidInput(format!("invalid UTF-8: {err}"))
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(format!("invalid UTF-8: {err}"))
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, Error>;
