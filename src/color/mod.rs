//! Channel arithmetic shared by all block modes.

/// An RGB pixel with 8 bits per channel.
pub type Rgb8 = [u8; 3];

// The `nX::n8` functions widen an X-bit channel to 8 bits by replicating its
// high bits into the vacated low bits.

pub(crate) mod n4 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 15);
        (x << 4) | x
    }
}

pub(crate) mod n5 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 31);
        (x << 3) | (x >> 2)
    }
}

pub(crate) mod n6 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 63);
        (x << 2) | (x >> 4)
    }
}

pub(crate) mod n7 {
    #[inline(always)]
    pub fn n8(x: u8) -> u8 {
        debug_assert!(x <= 127);
        (x << 1) | (x >> 6)
    }
}

/// Widens a 4:4:4 color to 8 bits per channel.
pub(crate) fn rgb444(raw: [u8; 3]) -> Rgb8 {
    raw.map(n4::n8)
}
/// Widens a 5:5:5 color to 8 bits per channel.
pub(crate) fn rgb555(raw: [u8; 3]) -> Rgb8 {
    raw.map(n5::n8)
}
/// Widens a 6:7:6 color to 8 bits per channel.
pub(crate) fn rgb676([r, g, b]: [u8; 3]) -> Rgb8 {
    [n6::n8(r), n7::n8(g), n6::n8(b)]
}

/// Adds a 3-bit two's complement delta to an unsigned 5-bit value.
///
/// The delta is sign-extended to 8 bits and the sum wraps. The result is
/// **not** clamped: a sum outside of `0..=31` shows up as a non-zero bit in
/// positions 5-7, which the mode detection relies on.
#[inline]
pub(crate) fn add_signed_3_to_5(delta3: u8, base5: u8) -> u8 {
    debug_assert!(delta3 <= 7);
    debug_assert!(base5 <= 31);

    let delta = if delta3 & 0b100 != 0 {
        delta3 | 0b1111_1000
    } else {
        delta3
    };
    delta.wrapping_add(base5)
}

/// Adds a signed offset to a channel and clamps the result to `0..=255`.
#[inline(always)]
pub(crate) fn clamp_add(base: u8, delta: i32) -> u8 {
    (base as i32 + delta).clamp(0, 255) as u8
}

/// Applies [`clamp_add`] to every channel of `color`.
#[inline]
pub(crate) fn offset_rgb(color: Rgb8, delta: i32) -> Rgb8 {
    color.map(|c| clamp_add(c, delta))
}

/// Packs a color into a 24-bit integer with red in the most significant byte.
#[inline]
pub(crate) fn pack_rgb([r, g, b]: Rgb8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}
