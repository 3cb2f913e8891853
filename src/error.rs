use crate::Size;

#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The data stream is too short for the requested (or inferred) image
    /// size.
    InvalidResolution {
        size: Size,
        required_bytes: u64,
        available_bytes: u64,
    },
    /// The reader ran out of data in the middle of the image.
    ///
    /// This happens when the stream length passed to the decoder is larger
    /// than what the reader actually provides.
    ShortRead {
        block_index: u64,
        /// How many bytes of the block could be read.
        bytes_read: usize,
    },
    /// The output buffer (or a working buffer) could not be allocated.
    AllocationFailure { bytes: u64 },
    /// The image has more pixels than [`crate::Options::max_pixels`] allows.
    PixelLimitExceeded { size: Size, limit: u64 },
    /// The block doesn't decode to any mode.
    ///
    /// Every 64-bit value is a valid block, so this indicates a bug in the
    /// decoder rather than corrupted data.
    UnrecognizedMode { block: u64 },
    /// The resolved width or height is zero.
    ///
    /// This happens when inferring the size of an (almost) empty stream.
    ZeroDimension { size: Size },
    /// The number of blocks in the stream is not a multiple of the blocks per
    /// row.
    ///
    /// Only returned in strict mode. See [`crate::Options::strict`].
    UnevenBlockCount {
        available_blocks: u64,
        width_blocks: u64,
    },
    /// The stream length is not a multiple of 8 bytes.
    ///
    /// Only returned in strict mode. See [`crate::Options::strict`].
    TrailingBytes { len: u64 },
    /// [`crate::EtcDecoder::read_into`] requires that the buffer size is
    /// exactly the size of the decoded image. No more, no less.
    UnexpectedBufferSize { expected: usize, actual: usize },

    Io(std::io::Error),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidResolution {
                size,
                required_bytes,
                available_bytes,
            } => {
                write!(
                    f,
                    "Invalid resolution {}: requires {} bytes, but only {} are available",
                    size, required_bytes, available_bytes
                )
            }
            DecodeError::ShortRead {
                block_index,
                bytes_read,
            } => {
                write!(
                    f,
                    "Unexpected end of data in block {} ({} of 8 bytes read)",
                    block_index, bytes_read
                )
            }
            DecodeError::AllocationFailure { bytes } => {
                write!(f, "Failed to allocate {} bytes", bytes)
            }
            DecodeError::PixelLimitExceeded { size, limit } => {
                write!(
                    f,
                    "Image size {} exceeds the limit of {} pixels",
                    size, limit
                )
            }
            DecodeError::UnrecognizedMode { block } => {
                write!(f, "Unrecognized mode for block {:#018x}", block)
            }
            DecodeError::ZeroDimension { size } => {
                write!(f, "The width or height of the image is zero ({})", size)
            }
            DecodeError::UnevenBlockCount {
                available_blocks,
                width_blocks,
            } => {
                write!(
                    f,
                    "{} blocks do not fill whole rows of {} blocks",
                    available_blocks, width_blocks
                )
            }
            DecodeError::TrailingBytes { len } => {
                write!(f, "Stream length {} is not a multiple of 8 bytes", len)
            }
            DecodeError::UnexpectedBufferSize { expected, actual } => {
                write!(
                    f,
                    "Unexpected buffer size: expected {} bytes, got {}",
                    expected, actual
                )
            }
            DecodeError::Io(error) => write!(f, "I/O error: {}", error),
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(error: std::io::Error) -> Self {
        DecodeError::Io(error)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(error) => Some(error),
            _ => None,
        }
    }
}
