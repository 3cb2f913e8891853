//! A decoder for ETC1 and ETC2 RGB texture data.
//!
//! The input is a headerless stream of 8-byte blocks, each encoding a 4x4
//! tile of pixels. Blocks are stored left to right and top to bottom. The
//! output is a tightly packed, row-major RGB8 image.
//!
//! ```
//! // a single ETC1 block
//! let data = [0xA3, 0x5C, 0x0F, 0x6C, 0x5A, 0x3C, 0x0F, 0xF0];
//! let image = etc2::decode(&data, etc2::Size::new(0, 0)).unwrap();
//! assert_eq!(image.size(), etc2::Size::new(4, 4));
//! assert_eq!(image.pixel(0, 0), Some([183, 98, 13]));
//! ```

#![forbid(unsafe_code)]

mod cast;
mod color;
mod decode;
mod decoder;
mod error;
#[cfg(feature = "image")]
mod image_integration;
mod layout;
mod util;

pub use color::Rgb8;
pub use decode::{decode_block, DecodedBlock, Mode};
pub use decoder::*;
pub use error::*;
pub use layout::*;

/// Additional options for the decoder specifying how strictly the data
/// stream is validated.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    /// Whether the data stream must consist of whole blocks and whole rows
    /// of blocks.
    ///
    /// By default, trailing bytes that don't form a full block are ignored,
    /// and so are leftover blocks when the height is inferred.
    ///
    /// If this is set to `true`, the decoder returns
    /// [`DecodeError::TrailingBytes`] and [`DecodeError::UnevenBlockCount`]
    /// instead.
    ///
    /// Defaults to `false`.
    pub strict: bool,

    /// The maximum number of pixels of a decoded image.
    ///
    /// Since the image size may be inferred from the length of the data, a
    /// large input can request a very large output buffer. Images above this
    /// limit fail with [`DecodeError::PixelLimitExceeded`]. This is checked
    /// after the size is validated against the length of the data.
    ///
    /// To disable this limit, set this to `u64::MAX`.
    ///
    /// Defaults to `1 << 28`.
    pub max_pixels: u64,
}
impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            max_pixels: 1 << 28,
        }
    }
}

/// Decodes a stream of ETC1/ETC2 RGB blocks into an RGB8 image.
///
/// A width or height of 0 in `size` is inferred from the length of the data.
/// See [`BlockGrid::resolve`] for the rules.
///
/// This is equivalent to calling `decode_with(data, size, &Options::default())`.
pub fn decode(data: &[u8], size: Size) -> Result<DecodedImage, DecodeError> {
    decode_with(data, size, &Options::default())
}

/// Decodes a stream of ETC1/ETC2 RGB blocks into an RGB8 image with the given
/// options.
pub fn decode_with(
    data: &[u8],
    size: Size,
    options: &Options,
) -> Result<DecodedImage, DecodeError> {
    EtcDecoder::new_with_options(data, data.len() as u64, size, options)?.read_image()
}
