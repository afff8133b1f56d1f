//! PKCS#7 padding to the 16-byte block size.

use aes_core::BLOCK_LEN;

/// What [`remove_padding`] found at the end of decrypted data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// `n` padding bytes were present and removed.
    Stripped(u8),
    /// There was no data, so nothing to strip.
    Empty,
    /// The final byte claims a length outside `1..=16` or longer than the data.
    OutOfRange(u8),
    /// The final byte is a plausible length but the bytes before it disagree.
    Inconsistent(u8),
}

impl Padding {
    /// `false` when the data was left untouched because the padding was malformed.
    pub fn is_intact(&self) -> bool {
        matches!(self, Padding::Stripped(_) | Padding::Empty)
    }
}

/// Appends between 1 and 16 bytes, each equal to the number appended.
///
/// Aligned input still gets a full block so the padding is always removable.
pub fn pad(data: &mut Vec<u8>) {
    let n = BLOCK_LEN - data.len() % BLOCK_LEN;
    data.resize(data.len() + n, n as u8);
}

/// Strips padding added by [`pad`].
///
/// Malformed padding leaves `data` unmodified and is reported through the
/// return value rather than as an error.
pub fn remove_padding(data: &mut Vec<u8>) -> Padding {
    let Some(&last) = data.last() else {
        return Padding::Empty;
    };
    let n = last as usize;
    if n == 0 || n > BLOCK_LEN || n > data.len() {
        return Padding::OutOfRange(last);
    }
    let start = data.len() - n;
    if data[start..].iter().any(|&b| b != last) {
        return Padding::Inconsistent(last);
    }
    data.truncate(start);
    Padding::Stripped(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_full_block() {
        let mut data = Vec::new();
        pad(&mut data);
        assert_eq!(data, vec![16u8; 16]);
        assert_eq!(remove_padding(&mut data), Padding::Stripped(16));
        assert!(data.is_empty());
    }

    #[test]
    fn aligned_input_gets_full_block() {
        let mut data = vec![0xaa; 32];
        pad(&mut data);
        assert_eq!(data.len(), 48);
        assert!(data[32..].iter().all(|&b| b == 16));
    }

    #[test]
    fn partial_block_is_filled() {
        let mut data = b"hello".to_vec();
        pad(&mut data);
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..5], b"hello");
        assert!(data[5..].iter().all(|&b| b == 11));
    }

    #[test]
    fn pad_then_remove_restores_every_length() {
        for len in 0..=64usize {
            let original: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let mut data = original.clone();
            pad(&mut data);
            let added = data.len() - len;
            assert!((1..=16).contains(&added));
            assert_eq!(data.len() % 16, 0);
            assert!(remove_padding(&mut data).is_intact());
            assert_eq!(data, original);
        }
    }

    #[test]
    fn out_of_range_padding_is_left_alone() {
        let mut zero = vec![1u8, 2, 3, 0];
        assert_eq!(remove_padding(&mut zero), Padding::OutOfRange(0));
        assert_eq!(zero, vec![1, 2, 3, 0]);

        let mut too_big = vec![17u8; 32];
        assert_eq!(remove_padding(&mut too_big), Padding::OutOfRange(17));
        assert_eq!(too_big.len(), 32);

        let mut longer_than_data = vec![4u8, 4, 4];
        assert_eq!(remove_padding(&mut longer_than_data), Padding::OutOfRange(4));
        assert_eq!(longer_than_data.len(), 3);
    }

    #[test]
    fn inconsistent_padding_is_left_alone() {
        let mut data = vec![9u8; 16];
        data[10] = 8;
        let before = data.clone();
        let status = remove_padding(&mut data);
        assert_eq!(status, Padding::Inconsistent(9));
        assert!(!status.is_intact());
        assert_eq!(data, before);
    }

    #[test]
    fn empty_data_reports_empty() {
        let mut data = Vec::new();
        assert_eq!(remove_padding(&mut data), Padding::Empty);
        assert!(Padding::Empty.is_intact());
    }
}
