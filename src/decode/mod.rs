use crate::{DecodeError, Rgb8};

mod block;
mod mode;
mod read_write;
mod reconstruct;

pub use mode::Mode;
pub(crate) use read_write::*;

use block::Block;

/// The 16 decoded pixels of a single 4x4 block.
///
/// Pixels are stored in column-major order: position `i` is column `i / 4`
/// and row `i % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedBlock(pub(crate) [Rgb8; 16]);

impl DecodedBlock {
    /// All pixels in column-major order.
    pub const fn pixels(&self) -> &[Rgb8; 16] {
        &self.0
    }

    /// Returns the pixel in column `x` and row `y`.
    ///
    /// ## Panics
    ///
    /// Panics if `x` or `y` is not less than 4.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        assert!(x < 4 && y < 4);
        self.0[x * 4 + y]
    }

    /// Returns the 4 pixels of row `y`, left to right.
    #[inline]
    pub fn row(&self, y: usize) -> [Rgb8; 4] {
        [0, 1, 2, 3].map(|x| self.get(x, y))
    }
}

/// Decodes a single 8-byte ETC1/ETC2 RGB block.
///
/// ```
/// let block = [0xA3, 0x5C, 0x0F, 0x6C, 0x5A, 0x3C, 0x0F, 0xF0];
/// let decoded = etc2::decode_block(block).unwrap();
/// assert_eq!(decoded.get(0, 0), [183, 98, 13]);
/// ```
pub fn decode_block(bytes: [u8; 8]) -> Result<DecodedBlock, DecodeError> {
    let block = Block::from_bytes(bytes);
    let fields = mode::dispatch(block)?;
    Ok(reconstruct::reconstruct(block, &fields))
}
