//! Pixel reconstruction for each mode family.

use crate::color::{offset_rgb, Rgb8};

use super::block::Block;
use super::mode::{BlockFields, Gradient, Paint, SubBlocks};
use super::DecodedBlock;

/// Intensity modifiers of the individual and differential modes.
///
/// The format lists each row as `[-b, -a, +a, +b]`. This table is ordered by
/// pixel index instead, so a pixel index can be used to look up its modifier
/// directly.
const CODEWORDS: [[i16; 4]; 8] = [
    [2, 8, -2, -8],
    [5, 17, -5, -17],
    [9, 29, -9, -29],
    [13, 42, -13, -42],
    [18, 60, -18, -60],
    [24, 80, -24, -80],
    [33, 106, -33, -106],
    [47, 183, -47, -183],
];

/// Distances of the T and H modes.
const DISTANCES: [u8; 8] = [3, 6, 11, 16, 23, 32, 41, 64];

pub(crate) fn reconstruct(block: Block, fields: &BlockFields) -> DecodedBlock {
    match fields {
        BlockFields::Individual(sub_blocks) | BlockFields::Differential(sub_blocks) => {
            etc1(block, sub_blocks)
        }
        BlockFields::T(paint) => paint_pixels(block, t_paint(paint)),
        BlockFields::H(paint) => paint_pixels(block, h_paint(paint)),
        BlockFields::Planar(gradient) => planar(gradient),
    }
}

/// Returns which of the two sub-blocks the pixel at position `i` belongs to.
#[inline(always)]
fn sub_block_of(i: usize, flip: bool) -> usize {
    if flip {
        // rows 0-1 and rows 2-3
        (i / 2) % 2
    } else {
        // columns 0-1 and columns 2-3
        i / 8
    }
}

fn etc1(block: Block, sub_blocks: &SubBlocks) -> DecodedBlock {
    let mut pixels: [Rgb8; 16] = [[0; 3]; 16];
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let sub_block = sub_block_of(i, sub_blocks.flip);
        let table = sub_blocks.tables[sub_block] as usize;
        let delta = CODEWORDS[table][block.pixel_index(i)];
        *pixel = offset_rgb(sub_blocks.base[sub_block], delta as i32);
    }
    DecodedBlock(pixels)
}

fn distance(paint: &Paint) -> i32 {
    DISTANCES[paint.distance as usize] as i32
}

fn t_paint(paint: &Paint) -> [Rgb8; 4] {
    let d = distance(paint);
    let [c0, c1] = paint.base;
    [c0, offset_rgb(c1, d), c1, offset_rgb(c1, -d)]
}

fn h_paint(paint: &Paint) -> [Rgb8; 4] {
    let d = distance(paint);
    let [c0, c1] = paint.base;
    [
        offset_rgb(c0, d),
        offset_rgb(c0, -d),
        offset_rgb(c1, d),
        offset_rgb(c1, -d),
    ]
}

fn paint_pixels(block: Block, paint: [Rgb8; 4]) -> DecodedBlock {
    let mut pixels: [Rgb8; 16] = [[0; 3]; 16];
    for (i, pixel) in pixels.iter_mut().enumerate() {
        *pixel = paint[block.pixel_index(i)];
    }
    DecodedBlock(pixels)
}

fn planar(gradient: &Gradient) -> DecodedBlock {
    let Gradient {
        origin,
        horizontal,
        vertical,
    } = *gradient;

    let mut pixels: [Rgb8; 16] = [[0; 3]; 16];
    for x in 1..=4_i32 {
        for y in 1..=4_i32 {
            let pixel = &mut pixels[(x as usize - 1) * 4 + (y as usize - 1)];
            for c in 0..3 {
                let (o, h, v) = (origin[c] as i32, horizontal[c] as i32, vertical[c] as i32);
                let value = (x * (h - o) + y * (v - o) + 4 * o + 2) >> 2;
                pixel[c] = value.clamp(0, 255) as u8;
            }
        }
    }
    DecodedBlock(pixels)
}
