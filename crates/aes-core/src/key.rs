//! Key types for AES-128.

use crate::block::{Block, BLOCK_LEN};
use crate::error::Error;

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// Size of the expanded schedule in bytes.
pub const SCHEDULE_LEN: usize = ROUND_KEY_COUNT * BLOCK_LEN;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value
            .try_into()
            .map(Self)
            .map_err(|_| Error::KeyLength(value.len()))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128, round 0 through round 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_LEN] {
        let mut out = [0u8; SCHEDULE_LEN];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_LEN).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}
