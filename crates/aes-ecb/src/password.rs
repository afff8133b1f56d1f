//! Password-to-key reduction.
//!
//! **Not a key-derivation function.** Each password byte is XOR-folded into a
//! 16-byte buffer at position `i % 16`: there is no salt, no work factor, and
//! distinct passwords trivially collide (e.g. swapping bytes 16 apart). It is
//! kept because existing ciphertexts were produced with exactly this key.

use aes_core::Aes128Key;

use crate::error::{Error, Result};

/// Folds `password` into an AES-128 key.
pub fn derive_key(password: &[u8]) -> Result<Aes128Key> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }
    let mut key = [0u8; 16];
    for (i, &byte) in password.iter().enumerate() {
        key[i % 16] ^= byte;
    }
    Ok(Aes128Key::from(key))
}
