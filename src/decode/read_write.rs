//! An internal module with helper methods for reading blocks from a reader,
//! and writing decoded pixels to the output buffer.
//!
//! Blocks are stored one after another, left to right and top to bottom, and
//! each block holds a 4x4 tile. The output is row-major across the whole
//! image width, so the two orders only line up one row of blocks at a time.
//! A full row of blocks (a band) is decoded before any of its pixels are
//! written.

use std::io::{ErrorKind, Read};

use crate::{cast, util, BlockGrid, DecodeError};

use super::block::Block;
use super::{decode_block, DecodedBlock};

/// Reads the next block from the reader.
///
/// Unlike [`Read::read_exact`], this reports how many bytes of the block were
/// available when the reader ran dry.
pub(crate) fn read_block(
    r: &mut dyn Read,
    block_index: u64,
) -> Result<[u8; Block::BYTES], DecodeError> {
    let mut bytes = [0; Block::BYTES];
    let mut filled = 0;
    while filled < bytes.len() {
        match r.read(&mut bytes[filled..]) {
            Ok(0) => {
                return Err(DecodeError::ShortRead {
                    block_index,
                    bytes_read: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(bytes)
}

/// One row of decoded blocks, covering (up to) 4 rows of the image.
struct RowBand {
    blocks: Vec<DecodedBlock>,
}

impl RowBand {
    fn new(width_blocks: usize) -> Result<Self, DecodeError> {
        let empty = DecodedBlock([[0; 3]; 16]);
        Ok(Self {
            blocks: util::try_vec(width_blocks, empty)?,
        })
    }

    /// Reads and decodes the next row of blocks, replacing the current ones.
    fn read(&mut self, r: &mut dyn Read, first_block_index: u64) -> Result<(), DecodeError> {
        for (x, slot) in self.blocks.iter_mut().enumerate() {
            let bytes = read_block(r, first_block_index + x as u64)?;
            *slot = decode_block(bytes)?;
        }
        Ok(())
    }

    /// Writes the band to `out`, which holds 1 to 4 full image rows of
    /// `width` pixels each.
    ///
    /// Rows and columns beyond the image (padding of the last block row or
    /// column) are skipped.
    fn write(&self, out: &mut [u8], width: usize) {
        let stride = width * 3;
        debug_assert!(out.len() % stride == 0 && out.len() / stride <= 4);

        for (y, row) in out.chunks_exact_mut(stride).enumerate() {
            for (x, block) in self.blocks.iter().enumerate() {
                let pixel_x = x * 4;
                let visible = (width - pixel_x).min(4);
                let pixels = block.row(y);
                row[pixel_x * 3..(pixel_x + visible) * 3]
                    .copy_from_slice(cast::as_bytes(&pixels[..visible]));
            }
        }
    }
}

/// Decodes every block of `grid` from the reader into `output`.
///
/// `output` must be exactly `width * height * 3` bytes long. Every block of
/// the grid is read, including blocks that are only partially visible.
pub(crate) fn decode_image(
    r: &mut dyn Read,
    grid: &BlockGrid,
    output: &mut [u8],
) -> Result<(), DecodeError> {
    let size = grid.size();
    let width = size.width as usize;
    debug_assert_eq!(output.len() as u64, size.pixels() * 3);
    if output.is_empty() {
        return Ok(());
    }

    let width_blocks = grid.width_blocks() as usize;
    let mut band = RowBand::new(width_blocks)?;

    let band_bytes = width * 3 * BlockGrid::BLOCK_SIZE as usize;
    for (band_index, out) in output.chunks_mut(band_bytes).enumerate() {
        let first_block_index = band_index as u64 * width_blocks as u64;
        band.read(r, first_block_index)?;
        band.write(out, width);

        tracing::trace!(band = band_index, first_block_index, "decoded row band");
    }

    Ok(())
}
