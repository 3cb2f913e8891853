//! Bit-level access to a single compressed block.

/// One 8-byte ETC1/ETC2 block.
///
/// The bytes are interpreted as a big-endian 64-bit word, so bit 63 is the
/// most significant bit of the first byte and bit 0 the least significant bit
/// of the last byte. All bit positions in this crate use that numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Block(u64);

impl Block {
    pub const BYTES: usize = 8;

    pub fn from_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub fn bit(self, n: u8) -> bool {
        debug_assert!(n < 64);
        (self.0 >> n) & 1 != 0
    }

    /// Returns `count` bits starting at bit `lsb`.
    #[inline(always)]
    pub fn bits(self, lsb: u8, count: u8) -> u8 {
        debug_assert!(0 < count && count <= 8);
        debug_assert!(lsb + count <= 64);
        let mask = (1_u16 << count).wrapping_sub(1) as u8;
        (self.0 >> lsb) as u8 & mask
    }

    /// Selects between individual (`false`) and differential-family (`true`)
    /// encodings.
    #[inline]
    pub fn diff_bit(self) -> bool {
        self.bit(33)
    }

    #[inline]
    pub fn flip_bit(self) -> bool {
        self.bit(32)
    }

    /// The 2-bit index of the pixel at block-local position `i`.
    ///
    /// The low bit comes from the bit plane in bits 0-15, the high bit from
    /// the plane in bits 16-31.
    #[inline(always)]
    pub fn pixel_index(self, i: usize) -> usize {
        debug_assert!(i < 16);
        let low = (self.0 >> i) & 1;
        let high = (self.0 >> (i + 16)) & 1;
        (high << 1 | low) as usize
    }
}
