//! Mode detection and field extraction.
//!
//! ETC2 hides its three extra modes inside invalid ETC1 differential blocks:
//! if adding a channel's 3-bit delta to its 5-bit base leaves the 5-bit
//! range, the block is not differential. The first channel (in R, G, B order)
//! that overflows decides between T, H, and planar mode.

use crate::color::{add_signed_3_to_5, pack_rgb, rgb444, rgb555, rgb676, Rgb8};
use crate::DecodeError;

use super::block::Block;

/// The encoding mode of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// ETC1 mode with two independent 4:4:4 base colors.
    Individual,
    /// ETC1 mode with a 5:5:5 base color and a 3-bit signed delta.
    Differential,
    /// ETC2 mode with one base color and a second color spread by a distance.
    T,
    /// ETC2 mode with two base colors, each spread by a distance.
    H,
    /// ETC2 mode that interpolates between three colors.
    Planar,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Individual,
        Mode::Differential,
        Mode::T,
        Mode::H,
        Mode::Planar,
    ];

    /// Determines the mode of the given block.
    ///
    /// ```
    /// use etc2::Mode;
    /// let block = [0xA3, 0x5C, 0x0F, 0x6C, 0x5A, 0x3C, 0x0F, 0xF0];
    /// assert_eq!(Mode::detect(block).unwrap(), Mode::Individual);
    /// ```
    pub fn detect(block: [u8; 8]) -> Result<Self, DecodeError> {
        dispatch(Block::from_bytes(block)).map(|fields| fields.mode())
    }

    /// Whether this mode is part of the original ETC1 format.
    pub const fn is_etc1(&self) -> bool {
        matches!(self, Mode::Individual | Mode::Differential)
    }
}

/// Two sub-blocks, each with its own base color and codeword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubBlocks {
    pub base: [Rgb8; 2],
    /// A 3-bit codeword table selector per sub-block.
    pub tables: [u8; 2],
    /// `false`: left/right halves, `true`: top/bottom halves.
    pub flip: bool,
}

/// The fields of T and H blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Paint {
    pub base: [Rgb8; 2],
    /// A 3-bit distance table selector.
    pub distance: u8,
}

/// The three colors of a planar block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gradient {
    pub origin: Rgb8,
    pub horizontal: Rgb8,
    pub vertical: Rgb8,
}

/// The extracted fields of a block, tagged by mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockFields {
    Individual(SubBlocks),
    Differential(SubBlocks),
    T(Paint),
    H(Paint),
    Planar(Gradient),
}

impl BlockFields {
    pub fn mode(&self) -> Mode {
        match self {
            BlockFields::Individual(_) => Mode::Individual,
            BlockFields::Differential(_) => Mode::Differential,
            BlockFields::T(_) => Mode::T,
            BlockFields::H(_) => Mode::H,
            BlockFields::Planar(_) => Mode::Planar,
        }
    }
}

/// Bit positions of the 5-bit base and the 3-bit delta of each channel in a
/// differential block.
const DIFF_CHANNELS: [(u8, u8); 3] = [(59, 56), (51, 48), (43, 40)];

/// Whether `base5 + delta3` leaves the 5-bit range.
#[inline]
pub(crate) fn would_overflow_5bit(base5: u8, delta3: u8) -> bool {
    add_signed_3_to_5(delta3, base5) & 0b1110_0000 != 0
}

pub(crate) fn dispatch(block: Block) -> Result<BlockFields, DecodeError> {
    if !block.diff_bit() {
        return Ok(BlockFields::Individual(individual(block)));
    }

    let channels = DIFF_CHANNELS.map(|(base, delta)| (block.bits(base, 5), block.bits(delta, 3)));

    // the first overflowing channel commits the mode
    let overflow = channels
        .iter()
        .position(|&(base5, delta3)| would_overflow_5bit(base5, delta3));

    match overflow {
        None => Ok(BlockFields::Differential(differential(block, channels))),
        Some(0) => Ok(BlockFields::T(t_mode(block))),
        Some(1) => Ok(BlockFields::H(h_mode(block))),
        Some(2) => Ok(BlockFields::Planar(planar(block))),
        Some(_) => Err(DecodeError::UnrecognizedMode { block: block.raw() }),
    }
}

fn table_selectors(block: Block) -> [u8; 2] {
    [block.bits(37, 3), block.bits(34, 3)]
}

fn individual(block: Block) -> SubBlocks {
    let base0 = [block.bits(60, 4), block.bits(52, 4), block.bits(44, 4)];
    let base1 = [block.bits(56, 4), block.bits(48, 4), block.bits(40, 4)];

    SubBlocks {
        base: [rgb444(base0), rgb444(base1)],
        tables: table_selectors(block),
        flip: block.flip_bit(),
    }
}

fn differential(block: Block, channels: [(u8, u8); 3]) -> SubBlocks {
    let base0 = channels.map(|(base5, _)| base5);
    // no channel overflowed, so every sum is a valid 5-bit value
    let base1 = channels.map(|(base5, delta3)| add_signed_3_to_5(delta3, base5));

    SubBlocks {
        base: [rgb555(base0), rgb555(base1)],
        tables: table_selectors(block),
        flip: block.flip_bit(),
    }
}

fn t_mode(block: Block) -> Paint {
    let r0 = block.bits(59, 2) << 2 | block.bits(56, 2);
    let base0 = [r0, block.bits(52, 4), block.bits(48, 4)];
    let base1 = [block.bits(44, 4), block.bits(40, 4), block.bits(36, 4)];

    Paint {
        base: [rgb444(base0), rgb444(base1)],
        distance: block.bits(34, 2) << 1 | block.bits(32, 1),
    }
}

fn h_mode(block: Block) -> Paint {
    let g0 = block.bits(56, 3) << 1 | block.bits(52, 1);
    let b0 = block.bits(51, 1) << 3 | block.bits(47, 3);
    let base0 = rgb444([block.bits(59, 4), g0, b0]);
    let base1 = rgb444([block.bits(43, 4), block.bits(39, 4), block.bits(35, 4)]);

    // The lowest selector bit is not stored. It is implied by the order of
    // the two base colors.
    let mut distance = block.bits(34, 1) << 2 | block.bits(32, 1) << 1;
    if pack_rgb(base0) >= pack_rgb(base1) {
        distance |= 1;
    }

    Paint {
        base: [base0, base1],
        distance,
    }
}

fn planar(block: Block) -> Gradient {
    let origin = [
        block.bits(57, 6),
        block.bits(56, 1) << 6 | block.bits(49, 6),
        block.bits(48, 1) << 5 | block.bits(43, 2) << 3 | block.bits(39, 3),
    ];
    let horizontal = [
        block.bits(34, 5) << 1 | block.bits(32, 1),
        block.bits(25, 7),
        block.bits(19, 6),
    ];
    let vertical = [block.bits(13, 6), block.bits(6, 7), block.bits(0, 6)];

    Gradient {
        origin: rgb676(origin),
        horizontal: rgb676(horizontal),
        vertical: rgb676(vertical),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{RngCore, SeedableRng};

    fn block(raw: u64) -> Block {
        Block::from_bytes(raw.to_be_bytes())
    }

    /// Mode detection written as plain integer arithmetic.
    fn expected_mode(raw: u64) -> Mode {
        if raw >> 33 & 1 == 0 {
            return Mode::Individual;
        }
        let out_of_range = |base_lsb: u32, delta_lsb: u32| {
            let base = (raw >> base_lsb & 0x1F) as i32;
            let delta = ((raw >> delta_lsb & 0x7) as i32 ^ 4) - 4;
            !(0..=31).contains(&(base + delta))
        };
        if out_of_range(59, 56) {
            Mode::T
        } else if out_of_range(51, 48) {
            Mode::H
        } else if out_of_range(43, 40) {
            Mode::Planar
        } else {
            Mode::Differential
        }
    }

    #[test]
    fn overflow_predicate_all_combinations() {
        let mut overflowing = 0;
        for base5 in 0..32_u8 {
            for delta3 in 0..8_u8 {
                let delta = if delta3 & 4 != 0 {
                    delta3 as i32 - 8
                } else {
                    delta3 as i32
                };
                let sum = base5 as i32 + delta;
                let expected = !(0..=31).contains(&sum);
                assert_eq!(
                    would_overflow_5bit(base5, delta3),
                    expected,
                    "base5={} delta3={}",
                    base5,
                    delta3
                );
                overflowing += expected as u32;
            }
        }
        // 1+2+3+4 underflows and 1+2+3 overflows
        assert_eq!(overflowing, 16);
    }

    #[test]
    fn dispatch_is_total_and_exclusive() {
        let mut rng = rand_chacha::ChaChaRng::seed_from_u64(123456789);
        let mut seen = [0_u32; 5];
        for _ in 0..100_000 {
            let raw = rng.next_u64();
            let fields = dispatch(block(raw)).expect("every block has a mode");
            let mode = fields.mode();
            assert_eq!(mode, expected_mode(raw), "block {:016x}", raw);
            seen[Mode::ALL.iter().position(|m| *m == mode).unwrap()] += 1;
        }
        for (mode, count) in Mode::ALL.iter().zip(seen) {
            assert!(count > 0, "{:?} never selected", mode);
        }
    }

    #[test]
    fn every_channel_combination() {
        // walk all base/delta pairs of one channel while the others stay in range
        for (channel, &(base_lsb, delta_lsb)) in DIFF_CHANNELS.iter().enumerate() {
            for base5 in 0..32_u64 {
                for delta3 in 0..8_u64 {
                    let mut raw = 1 << 33;
                    for (other, &(b, _)) in DIFF_CHANNELS.iter().enumerate() {
                        if other != channel {
                            raw |= 16 << b;
                        }
                    }
                    raw |= base5 << base_lsb | delta3 << delta_lsb;

                    let mode = dispatch(block(raw)).unwrap().mode();
                    assert_eq!(mode, expected_mode(raw), "block {:016x}", raw);
                }
            }
        }
    }

    #[test]
    fn individual_fields() {
        let fields = dispatch(block(0xA35C_0F6C_5A3C_0FF0)).unwrap();
        assert_eq!(
            fields,
            BlockFields::Individual(SubBlocks {
                base: [[0xAA, 0x55, 0x00], [0x33, 0xCC, 0xFF]],
                tables: [3, 3],
                flip: false,
            })
        );
    }

    #[test]
    fn differential_fields() {
        let fields = dispatch(block(0x9146_2BAB_936C_5A1E)).unwrap();
        assert_eq!(
            fields,
            BlockFields::Differential(SubBlocks {
                // 18/8/5 and 19/6/8 widened from 5 bits
                base: [[148, 66, 41], [156, 49, 66]],
                tables: [5, 2],
                flip: true,
            })
        );
    }

    #[test]
    fn t_fields() {
        let fields = dispatch(block(0x1C72_E49B_1B4E_C873)).unwrap();
        assert_eq!(
            fields,
            BlockFields::T(Paint {
                base: [[0xCC, 0x77, 0x22], [0xEE, 0x44, 0x99]],
                distance: 5,
            })
        );
    }

    #[test]
    fn h_fields() {
        let fields = dispatch(block(0x4BFA_9E36_C3A5_5A0F)).unwrap();
        assert_eq!(
            fields,
            BlockFields::H(Paint {
                base: [[0x99, 0x77, 0xDD], [0x33, 0xCC, 0x66]],
                distance: 0b101,
            })
        );
    }

    #[test]
    fn h_selector_follows_base_color_order() {
        // swapping the two base colors flips the implied selector bit
        let raw = 0x4BFA_9E36_C3A5_5A0F_u64;
        let BlockFields::H(paint) = dispatch(block(raw)).unwrap() else {
            panic!("expected H mode");
        };
        assert!(pack_rgb(paint.base[0]) >= pack_rgb(paint.base[1]));
        assert_eq!(paint.distance & 1, 1);

        // base0 = 0x1/0x7/0xD, base1 = 0x3/0xC/0x6: base0 is now smaller
        let lower_red = raw & !(0xF << 59) | 0x1 << 59;
        let BlockFields::H(paint) = dispatch(block(lower_red)).unwrap() else {
            panic!("expected H mode");
        };
        assert!(pack_rgb(paint.base[0]) < pack_rgb(paint.base[1]));
        assert_eq!(paint.distance, 0b100);
    }

    #[test]
    fn planar_fields() {
        let fields = dispatch(block(0x592C_FAB7_8F3A_61D4)).unwrap();
        assert_eq!(
            fields,
            BlockFields::Planar(Gradient {
                origin: rgb676([0b101100, 0b1010110, 0b011101]),
                horizontal: rgb676([0b011011, 0b1000111, 0b100111]),
                vertical: rgb676([0b010011, 0b0000111, 0b010100]),
            })
        );
    }

    #[test]
    fn detect() {
        assert_eq!(
            Mode::detect(0xA35C_0F6C_5A3C_0FF0_u64.to_be_bytes()).unwrap(),
            Mode::Individual
        );
        assert_eq!(
            Mode::detect(0x9146_2BAB_936C_5A1E_u64.to_be_bytes()).unwrap(),
            Mode::Differential
        );
        assert_eq!(
            Mode::detect(0x1C72_E49B_1B4E_C873_u64.to_be_bytes()).unwrap(),
            Mode::T
        );
        assert_eq!(
            Mode::detect(0x4BFA_9E36_C3A5_5A0F_u64.to_be_bytes()).unwrap(),
            Mode::H
        );
        assert_eq!(
            Mode::detect(0x592C_FAB7_8F3A_61D4_u64.to_be_bytes()).unwrap(),
            Mode::Planar
        );
        assert!(Mode::Individual.is_etc1());
        assert!(!Mode::Planar.is_etc1());
    }
}
