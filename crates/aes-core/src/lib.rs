//! From-scratch AES-128 block cipher.
//!
//! This crate follows FIPS-197 byte for byte and provides:
//! - GF(2^8) arithmetic and the S-box / round-constant tables.
//! - The AES-128 key schedule.
//! - The round transforms over a column-major [`State`].
//! - Single-block encryption and decryption, both on typed blocks and on
//!   length-checked byte slices.
//!
//! The implementation uses table lookups and data-dependent branches; it
//! makes no constant-time guarantees and should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::block::{block_from_slice, Block, BLOCK_LEN};
pub use crate::cipher::{
    decrypt, decrypt_block, encrypt, encrypt_block, expand_key, expand_key_bytes, Aes128,
};
pub use crate::error::{Error, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT, SCHEDULE_LEN};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
pub use crate::state::State;
