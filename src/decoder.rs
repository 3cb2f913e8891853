use std::io::{Read, Seek, SeekFrom};

use crate::{cast, decode, util, BlockGrid, DecodeError, Options, Rgb8, Size};

/// A decoder for a headerless stream of ETC1/ETC2 RGB blocks.
///
/// The stream has no header, so the length of the data must be known up front
/// to validate (or infer) the image size.
pub struct EtcDecoder<R> {
    reader: R,
    grid: BlockGrid,
}

impl<R: Read> EtcDecoder<R> {
    /// Creates a new decoder for a stream of `stream_len` bytes.
    ///
    /// This is equivalent to calling
    /// `EtcDecoder::new_with_options(r, stream_len, size, &Options::default())`.
    /// See [`Self::new_with_options`] for more details.
    pub fn new(reader: R, stream_len: u64, size: Size) -> Result<Self, DecodeError> {
        Self::new_with_options(reader, stream_len, size, &Options::default())
    }
    /// Creates a new decoder for a stream of `stream_len` bytes.
    ///
    /// A width or height of 0 in `size` is inferred from `stream_len`. See
    /// [`BlockGrid::resolve`] for the rules.
    ///
    /// Nothing is read from the reader until the image is decoded.
    pub fn new_with_options(
        reader: R,
        stream_len: u64,
        size: Size,
        options: &Options,
    ) -> Result<Self, DecodeError> {
        let grid = BlockGrid::resolve(size, stream_len, options)?;
        Ok(Self { reader, grid })
    }

    /// The resolved size of the image.
    pub fn size(&self) -> Size {
        self.grid.size()
    }
    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes the image into the given buffer as tightly packed RGB8 pixels.
    ///
    /// The buffer must be exactly `width * height * 3` bytes long.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        let expected = self.grid.decoded_len().ok_or(DecodeError::AllocationFailure {
            bytes: self.grid.size().pixels().saturating_mul(3),
        })?;
        if buf.len() != expected {
            return Err(DecodeError::UnexpectedBufferSize {
                expected,
                actual: buf.len(),
            });
        }

        decode::decode_image(&mut self.reader, &self.grid, buf)
    }

    /// Decodes the image into a newly allocated buffer.
    pub fn read_image(mut self) -> Result<DecodedImage, DecodeError> {
        let size = self.grid.size();
        let len = self.grid.decoded_len().ok_or(DecodeError::AllocationFailure {
            bytes: size.pixels().saturating_mul(3),
        })?;
        tracing::debug!(
            width = size.width,
            height = size.height,
            blocks = self.grid.block_count(),
            "decoding image"
        );

        let mut data = util::try_vec(len, 0_u8)?;
        self.read_into(&mut data)?;
        Ok(DecodedImage { data, size })
    }
}

impl<R: Read + Seek> EtcDecoder<R> {
    /// Creates a new decoder that reads from the current position of the
    /// reader to its end.
    ///
    /// The position of the reader is restored after its length is measured.
    pub fn from_seekable(reader: R, size: Size) -> Result<Self, DecodeError> {
        Self::from_seekable_with_options(reader, size, &Options::default())
    }
    pub fn from_seekable_with_options(
        mut reader: R,
        size: Size,
        options: &Options,
    ) -> Result<Self, DecodeError> {
        let start = reader.stream_position()?;
        let end = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(start))?;

        Self::new_with_options(reader, end.saturating_sub(start), size, options)
    }
}

/// A decoded image with tightly packed, row-major RGB8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub(crate) data: Vec<u8>,
    pub(crate) size: Size,
}

impl DecodedImage {
    pub fn size(&self) -> Size {
        self.size
    }
    /// The raw pixel data, `width * height * 3` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb8] {
        cast::as_rgb(&self.data).unwrap_or_default()
    }

    /// Returns the pixel at `(x, y)`, or `None` if it's out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let index = y as usize * self.size.width as usize + x as usize;
        self.pixels().get(index).copied()
    }
}
