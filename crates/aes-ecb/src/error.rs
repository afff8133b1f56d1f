//! Error and result types for the ECB pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias used throughout `aes-ecb`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything a pipeline or file operation can fail with.
///
/// Malformed padding is not an error; see [`crate::Padding`].
#[derive(Debug)]
pub enum Error {
    /// The block cipher rejected its input.
    Cipher(aes_core::Error),
    /// Key derivation needs at least one password byte.
    EmptyPassword,
    /// Plaintext handed to the block pipeline was not padded to 16 bytes.
    UnalignedInput(usize),
    /// Ciphertext length is not a multiple of 16 bytes.
    CiphertextLength(usize),
    /// Reading the input file failed.
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing the output file failed.
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cipher(e) => write!(f, "cipher error: {e}"),
            Error::EmptyPassword => write!(f, "password must not be empty"),
            Error::UnalignedInput(len) => {
                write!(f, "plaintext length {len} is not padded to a multiple of 16 bytes")
            }
            Error::CiphertextLength(len) => {
                write!(f, "encrypted data size {len} is not a multiple of 16 bytes")
            }
            Error::Read { path, .. } => write!(f, "cannot read {}", path.display()),
            Error::Write { path, .. } => write!(f, "cannot write {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Cipher(e) => Some(e),
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<aes_core::Error> for Error {
    fn from(e: aes_core::Error) -> Self {
        Error::Cipher(e)
    }
}
