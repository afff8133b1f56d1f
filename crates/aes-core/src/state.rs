//! The 4x4 working matrix used during a block's rounds.

use crate::block::{Block, BLOCK_LEN};

/// AES state matrix, indexed `[row][column]`.
///
/// Blocks map onto the state column by column: byte `i` lands in row `i % 4`,
/// column `i / 4`. [`State::from_block`] and [`State::to_block`] are exact
/// inverses of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block in column-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, &byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = byte;
        }
        Self(rows)
    }

    /// Serializes the state back to a block in column-major order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    /// Returns column `col` as `[row0, row1, row2, row3]`.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }

    /// Mutable iterator over every byte of the state.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flatten()
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
