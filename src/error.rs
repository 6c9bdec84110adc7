//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Requested password length was negative.
    #[error("invalid password length: {0}")]
    InvalidLength(i64),

    /// The secure random source could not be read.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Self {
        Error::RandomnessUnavailable(e.to_string())
    }
}

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
