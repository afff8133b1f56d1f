//! Electronic Codebook mode over the AES-128 block cipher.
//!
//! Every 16-byte block is transformed on its own with the same key schedule,
//! so equal plaintext blocks always encrypt to equal ciphertext blocks and
//! patterns in the input remain visible in the output. There is no IV and no
//! integrity check.

use aes_core::{Aes128, Aes128Key, Block, RoundKeys, BLOCK_LEN};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::padding::{pad, remove_padding, Padding};
use crate::password::derive_key;

/// Configuration knobs for [`EcbCipher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcbConfig {
    /// Spread blocks across the rayon thread pool.
    pub parallel: bool,
}

impl Default for EcbConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// AES-128 in ECB mode with a fixed key.
#[derive(Clone, Debug)]
pub struct EcbCipher {
    cipher: Aes128,
    config: EcbConfig,
}

impl EcbCipher {
    /// Creates a cipher with the default configuration.
    pub fn new(key: &Aes128Key) -> Self {
        Self::with_config(key, EcbConfig::default())
    }

    /// Creates a cipher with an explicit configuration.
    pub fn with_config(key: &Aes128Key, config: EcbConfig) -> Self {
        Self {
            cipher: Aes128::new(key),
            config,
        }
    }

    /// Derives the key from a password (see [`derive_key`]).
    pub fn from_password(password: &[u8], config: EcbConfig) -> Result<Self> {
        let key = derive_key(password)?;
        Ok(Self::with_config(&key, config))
    }

    /// The expanded key schedule shared by every block.
    pub fn round_keys(&self) -> &RoundKeys {
        self.cipher.round_keys()
    }

    /// Active configuration.
    pub fn config(&self) -> EcbConfig {
        self.config
    }

    /// Encrypts data that is already padded to a multiple of 16 bytes.
    pub fn encrypt_blocks(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % BLOCK_LEN != 0 {
            return Err(Error::UnalignedInput(data.len()));
        }
        Ok(self.map_blocks(data, |block| self.cipher.encrypt_block(block)))
    }

    /// Decrypts ciphertext block by block. Padding is left in place.
    pub fn decrypt_blocks(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % BLOCK_LEN != 0 {
            return Err(Error::CiphertextLength(data.len()));
        }
        Ok(self.map_blocks(data, |block| self.cipher.decrypt_block(block)))
    }

    /// Pads `plaintext` and encrypts it. The result is never empty.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(plaintext.len() + BLOCK_LEN);
        data.extend_from_slice(plaintext);
        pad(&mut data);
        self.map_blocks(&data, |block| self.cipher.encrypt_block(block))
    }

    /// Decrypts `ciphertext` and strips its padding.
    ///
    /// Malformed padding does not fail the call; the data comes back
    /// unstripped and the returned [`Padding`] says why.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<(Vec<u8>, Padding)> {
        let mut data = self.decrypt_blocks(ciphertext)?;
        let padding = remove_padding(&mut data);
        Ok((data, padding))
    }

    // `input.len()` must be a multiple of BLOCK_LEN.
    fn map_blocks<F>(&self, input: &[u8], f: F) -> Vec<u8>
    where
        F: Fn(&Block) -> Block + Sync,
    {
        let mut output = vec![0u8; input.len()];
        let apply = |(out, chunk): (&mut [u8], &[u8])| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            out.copy_from_slice(&f(&block));
        };
        if self.config.parallel {
            output
                .par_chunks_exact_mut(BLOCK_LEN)
                .zip(input.par_chunks_exact(BLOCK_LEN))
                .for_each(apply);
        } else {
            output
                .chunks_exact_mut(BLOCK_LEN)
                .zip(input.chunks_exact(BLOCK_LEN))
                .for_each(apply);
        }
        output
    }
}
