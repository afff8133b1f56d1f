//! Password-keyed AES-128 file encryption in ECB mode.
//!
//! The on-disk format is the bare concatenation of ECB-encrypted 16-byte
//! blocks of PKCS#7-padded plaintext: no header, no IV, no authentication tag.
//!
//! # Security
//!
//! This crate exists for compatibility with files produced by an existing
//! tool and is weak by construction:
//! - ECB leaks which plaintext blocks are equal.
//! - The password is XOR-folded into the key with no salt or stretching.
//! - Nothing detects tampering; a wrong key usually only shows up as a
//!   padding warning.
//!
//! New designs should use a real KDF and an authenticated mode instead.
//!
//! ```
//! use aes_ecb::{EcbCipher, EcbConfig};
//!
//! let cipher = EcbCipher::from_password(b"hunter2", EcbConfig::default()).unwrap();
//! let ciphertext = cipher.encrypt(b"some file contents");
//! assert_eq!(ciphertext.len(), 32);
//!
//! let (plaintext, padding) = cipher.decrypt(&ciphertext).unwrap();
//! assert!(padding.is_intact());
//! assert_eq!(plaintext, b"some file contents");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ecb;
mod error;
mod file;
mod padding;
mod password;

pub use crate::ecb::{EcbCipher, EcbConfig};
pub use crate::error::{Error, Result};
pub use crate::file::{decrypt_file, encrypt_file, read_file, write_file, FileReport};
pub use crate::padding::{pad, remove_padding, Padding};
pub use crate::password::derive_key;
