//! Error type for the size-checked cipher entry points.

use std::fmt;

/// Result alias used by `aes-core`.
pub type Result<T> = std::result::Result<T, Error>;

/// Input-validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key was not 16 bytes long.
    KeyLength(usize),
    /// The block was not 16 bytes long.
    BlockLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength(len) => {
                write!(f, "AES-128 key must be 16 bytes, got {len}")
            }
            Error::BlockLength(len) => {
                write!(f, "AES block must be 16 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
