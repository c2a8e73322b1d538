//! Error types for vigor-template

use thiserror::Error;

/// Template codec error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("Duplicate attribute type in template: {0}")]
    DuplicateAttributeType(String),

    #[error("RON serialization error: {0}")]
    Ron(#[from] ron::Error),
}

impl From<ron::error::SpannedError> for Error {
    fn from(err: ron::error::SpannedError) -> Self {
        Error::MalformedTemplate(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
