//! Whole-file encryption and decryption.
//!
//! Files are read fully into memory, transformed, and written in one go.

use std::fs;
use std::path::Path;

use aes_core::BLOCK_LEN;

use crate::ecb::{EcbCipher, EcbConfig};
use crate::error::{Error, Result};
use crate::padding::Padding;

/// Summary of a completed file operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Bytes read from the input file.
    pub bytes_in: usize,
    /// Bytes written to the output file.
    pub bytes_out: usize,
    /// Number of 16-byte blocks run through the cipher.
    pub blocks: usize,
    /// Padding status after decryption; `None` when encrypting.
    pub padding: Option<Padding>,
}

/// Reads a file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Encrypts `input` into `output` under a password-derived key.
pub fn encrypt_file(
    input: &Path,
    output: &Path,
    password: &[u8],
    config: EcbConfig,
) -> Result<FileReport> {
    let cipher = EcbCipher::from_password(password, config)?;
    let plaintext = read_file(input)?;
    let ciphertext = cipher.encrypt(&plaintext);
    write_file(output, &ciphertext)?;
    Ok(FileReport {
        bytes_in: plaintext.len(),
        bytes_out: ciphertext.len(),
        blocks: ciphertext.len() / BLOCK_LEN,
        padding: None,
    })
}

/// Decrypts `input` into `output` under a password-derived key.
///
/// The output is written even when the padding turns out malformed; check
/// [`FileReport::padding`].
pub fn decrypt_file(
    input: &Path,
    output: &Path,
    password: &[u8],
    config: EcbConfig,
) -> Result<FileReport> {
    let cipher = EcbCipher::from_password(password, config)?;
    let ciphertext = read_file(input)?;
    let (plaintext, padding) = cipher.decrypt(&ciphertext)?;
    write_file(output, &plaintext)?;
    Ok(FileReport {
        bytes_in: ciphertext.len(),
        bytes_out: plaintext.len(),
        blocks: ciphertext.len() / BLOCK_LEN,
        padding: Some(padding),
    })
}
