//! AES-128 key schedule and block encryption/decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};
use crate::state::State;

/// Words in the AES-128 schedule (11 round keys of 4 words).
const SCHEDULE_WORDS: usize = ROUND_KEY_COUNT * 4;

type Word = [u8; 4];

fn rot_word([a, b, c, d]: Word) -> Word {
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4];
        }
        for (j, byte) in temp.iter().enumerate() {
            w[i][j] = w[i - 4][j] ^ byte;
        }
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, chunk) in round_key.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&w[round * 4 + word_idx]);
        }
    }

    RoundKeys(round_keys)
}

/// Expands a key given as raw bytes, failing unless it is exactly 16 bytes.
pub fn expand_key_bytes(key: &[u8]) -> Result<RoundKeys> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand_key(&key))
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.get(10));
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.to_block()
}

/// Encrypts one block given as raw bytes under a raw 16-byte key.
///
/// Both inputs are length-checked; the key is expanded on every call, so use
/// [`Aes128`] when processing more than one block.
pub fn encrypt(block: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(block)?;
    let round_keys = expand_key_bytes(key)?;
    Ok(encrypt_block(&block, &round_keys))
}

/// Decrypts one block given as raw bytes under a raw 16-byte key.
pub fn decrypt(block: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(block)?;
    let round_keys = expand_key_bytes(key)?;
    Ok(decrypt_block(&block, &round_keys))
}

/// AES-128 with its key schedule expanded once up front.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and keeps the schedule for reuse.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

impl From<Aes128Key> for Aes128 {
    fn from(key: Aes128Key) -> Self {
        Self::new(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::key::Aes128Key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    // FIPS-197 Appendix A.1 / B.
    const APPENDIX_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn appendix_b_vector() {
        let plain = [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ];
        let expected = [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ];
        assert_eq!(encrypt(&plain, &APPENDIX_KEY), Ok(expected));
        assert_eq!(decrypt(&expected, &APPENDIX_KEY), Ok(plain));
    }

    #[test]
    fn key_expansion_matches_appendix_a() {
        let rks = expand_key(&Aes128Key::from(APPENDIX_KEY));
        assert_eq!(rks.get(0), &APPENDIX_KEY);
        assert_eq!(
            rks.get(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a,
                0x6c, 0x76, 0x05,
            ]
        );
        assert_eq!(
            rks.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6,
                0x63, 0x0c, 0xa6,
            ]
        );
    }

    #[test]
    fn key_expansion_is_deterministic() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let a = expand_key_bytes(&key_bytes).expect("valid key");
        let b = expand_key_bytes(&key_bytes).expect("valid key");
        assert_eq!(a, b);
        assert_eq!(a.to_bytes().len(), 176);
        assert_eq!(a.get(0), &key_bytes);
    }

    #[test]
    fn size_checked_entry_points_reject_bad_lengths() {
        assert_eq!(encrypt(&[0u8; 15], &NIST_KEY), Err(Error::BlockLength(15)));
        assert_eq!(encrypt(&NIST_PLAIN, &[0u8; 24]), Err(Error::KeyLength(24)));
        assert_eq!(decrypt(&[0u8; 32], &NIST_KEY), Err(Error::BlockLength(32)));
        assert_eq!(decrypt(&NIST_CIPHER, &[]), Err(Error::KeyLength(0)));
        assert_eq!(expand_key_bytes(&[0u8; 17]), Err(Error::KeyLength(17)));
    }

    #[test]
    fn aes128_wrapper_matches_free_functions() {
        let cipher = Aes128::from(Aes128Key::from(NIST_KEY));
        assert_eq!(cipher.encrypt_block(&NIST_PLAIN), NIST_CIPHER);
        assert_eq!(cipher.decrypt_block(&NIST_CIPHER), NIST_PLAIN);
        assert_eq!(cipher.round_keys(), &expand_key(&Aes128Key::from(NIST_KEY)));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
