#![allow(unused)]

use etc2::Rgb8;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

pub fn create_rng() -> impl rand::Rng {
    rand_chacha::ChaChaRng::seed_from_u64(123456789)
}

pub fn hash_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let bytes: [u8; 32] = result.into();

    let mut hex = String::new();
    for byte in bytes.iter() {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Serializes blocks the way they are stored: big-endian, one after another.
pub fn to_stream(blocks: &[u64]) -> Vec<u8> {
    blocks.iter().flat_map(|b| b.to_be_bytes()).collect()
}

/// A tiny, fully specified PRNG (SplitMix64), so snapshot hashes don't
/// depend on the implementation details of `rand`.
pub struct SplitMix64(u64);
impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
    pub fn blocks(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.next_u64()).collect()
    }
}

/// A block together with its expected pixels, listed row by row.
pub struct Golden {
    pub block: u64,
    pub rows: [[Rgb8; 4]; 4],
}

pub const INDIVIDUAL: Golden = Golden {
    block: 0xA35C_0F6C_5A3C_0FF0,
    rows: [
        [[183, 98, 13], [128, 43, 0], [93, 246, 255], [38, 191, 242]],
        [[183, 98, 13], [128, 43, 0], [9, 162, 213], [64, 217, 255]],
        [[157, 72, 0], [212, 127, 42], [93, 246, 255], [38, 191, 242]],
        [[157, 72, 0], [212, 127, 42], [9, 162, 213], [64, 217, 255]],
    ],
};

pub const DIFFERENTIAL: Golden = Golden {
    block: 0x9146_2BAB_936C_5A1E,
    rows: [
        [[172, 90, 65], [228, 146, 121], [124, 42, 17], [68, 0, 0]],
        [[228, 146, 121], [124, 42, 17], [68, 0, 0], [172, 90, 65]],
        [[127, 20, 37], [147, 40, 57], [165, 58, 75], [185, 78, 95]],
        [[127, 20, 37], [165, 58, 75], [185, 78, 95], [147, 40, 57]],
    ],
};

pub const T_MODE: Golden = Golden {
    block: 0x1C72_E49B_1B4E_C873,
    rows: [
        [[255, 100, 185], [255, 100, 185], [238, 68, 153], [238, 68, 153]],
        [[206, 36, 121], [255, 100, 185], [238, 68, 153], [204, 119, 34]],
        [[238, 68, 153], [206, 36, 121], [204, 119, 34], [255, 100, 185]],
        [[238, 68, 153], [204, 119, 34], [206, 36, 121], [255, 100, 185]],
    ],
};

pub const H_MODE: Golden = Golden {
    block: 0x4BFA_9E36_C3A5_5A0F,
    rows: [
        [[19, 172, 70], [185, 151, 253], [83, 236, 134], [121, 87, 189]],
        [[121, 87, 189], [83, 236, 134], [19, 172, 70], [185, 151, 253]],
        [[19, 172, 70], [185, 151, 253], [185, 151, 253], [19, 172, 70]],
        [[121, 87, 189], [83, 236, 134], [121, 87, 189], [83, 236, 134]],
    ],
};

pub const PLANAR: Golden = Golden {
    block: 0x592C_FAB7_8F3A_61D4,
    rows: [
        [[136, 126, 118], [118, 118, 129], [101, 111, 139], [84, 103, 149]],
        [[110, 86, 109], [93, 79, 120], [76, 71, 130], [59, 64, 140]],
        [[85, 46, 100], [68, 39, 111], [51, 31, 121], [33, 24, 131]],
        [[60, 7, 91], [43, 0, 102], [25, 0, 112], [8, 0, 122]],
    ],
};
