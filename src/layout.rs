use crate::{util, DecodeError, Options};

/// The size of an image in pixels.
///
/// When passed to a decoder, a width or height of 0 means "infer from the
/// length of the data". See [`BlockGrid::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the number of pixels.
    pub const fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The grid of 4x4 blocks backing an image of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockGrid {
    size: Size,
    width_blocks: u32,
    height_blocks: u32,
}

impl BlockGrid {
    /// The width and height of a block in pixels.
    pub const BLOCK_SIZE: u32 = 4;
    /// The size of an encoded block in bytes.
    pub const BYTES_PER_BLOCK: u64 = 8;

    /// Returns the grid of blocks needed to cover an image of the given size.
    ///
    /// Sizes that aren't a multiple of 4 are padded up to the next block.
    pub const fn for_size(size: Size) -> Self {
        Self {
            size,
            width_blocks: util::blocks_for(size.width),
            height_blocks: util::blocks_for(size.height),
        }
    }

    /// Resolves the requested size against a data stream of `stream_len`
    /// bytes.
    ///
    /// - If the requested width is 0, the image is assumed to be square in
    ///   blocks: the width is `floor(sqrt(blocks))` blocks.
    /// - If the requested height is 0, the height is as many full block rows
    ///   as the data contains. Leftover blocks are ignored, unless
    ///   [`Options::strict`] is set.
    ///
    /// The resolved size must be non-empty and the stream must contain at
    /// least [`Self::required_bytes`] bytes. Only then is the size checked
    /// against [`Options::max_pixels`].
    pub fn resolve(
        requested: Size,
        stream_len: u64,
        options: &Options,
    ) -> Result<Self, DecodeError> {
        if options.strict && stream_len % Self::BYTES_PER_BLOCK != 0 {
            return Err(DecodeError::TrailingBytes { len: stream_len });
        }

        let available_blocks = stream_len / Self::BYTES_PER_BLOCK;
        let mut size = requested;

        if size.width == 0 {
            let width_blocks = util::isqrt(available_blocks).min(MAX_BLOCKS_PER_SIDE);
            size.width = width_blocks as u32 * Self::BLOCK_SIZE;
            tracing::debug!(
                available_blocks,
                width_blocks,
                width = size.width,
                "inferred width"
            );
        }

        if size.height == 0 {
            let width_blocks = util::blocks_for(size.width) as u64;
            if width_blocks == 0 {
                return Err(DecodeError::ZeroDimension { size });
            }
            if options.strict && available_blocks % width_blocks != 0 {
                return Err(DecodeError::UnevenBlockCount {
                    available_blocks,
                    width_blocks,
                });
            }

            let height_blocks = (available_blocks / width_blocks).min(MAX_BLOCKS_PER_SIDE);
            size.height = height_blocks as u32 * Self::BLOCK_SIZE;
            tracing::debug!(
                available_blocks,
                height_blocks,
                height = size.height,
                "inferred height"
            );
        }

        if size.is_empty() {
            return Err(DecodeError::ZeroDimension { size });
        }

        let grid = Self::for_size(size);
        let required_bytes = grid.required_bytes();
        if required_bytes > stream_len {
            return Err(DecodeError::InvalidResolution {
                size,
                required_bytes,
                available_bytes: stream_len,
            });
        }
        if size.pixels() > options.max_pixels {
            return Err(DecodeError::PixelLimitExceeded {
                size,
                limit: options.max_pixels,
            });
        }

        Ok(grid)
    }

    pub const fn size(&self) -> Size {
        self.size
    }
    pub const fn width_blocks(&self) -> u32 {
        self.width_blocks
    }
    pub const fn height_blocks(&self) -> u32 {
        self.height_blocks
    }

    /// The total number of blocks in the grid.
    pub const fn block_count(&self) -> u64 {
        self.width_blocks as u64 * self.height_blocks as u64
    }

    /// The number of bytes of block data needed to decode the whole grid.
    pub const fn required_bytes(&self) -> u64 {
        self.block_count() * Self::BYTES_PER_BLOCK
    }

    /// The number of bytes of the decoded RGB image.
    ///
    /// Returns `None` if this doesn't fit into a `usize`.
    pub fn decoded_len(&self) -> Option<usize> {
        let bytes = self.size.pixels().checked_mul(3)?;
        usize::try_from(bytes).ok()
    }
}

/// The largest width or height (in blocks) that still fits a `u32` pixel
/// count.
const MAX_BLOCKS_PER_SIDE: u64 = (u32::MAX / BlockGrid::BLOCK_SIZE) as u64;
