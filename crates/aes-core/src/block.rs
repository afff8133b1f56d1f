//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Copies a slice into a block, rejecting any length other than 16.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::BlockLength(bytes.len()))
}
