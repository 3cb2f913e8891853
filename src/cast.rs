//! An internal module for casting between pixel arrays and bytes.
//!
//! This serves as a wrapper around `bytemuck` to provide panic safety. All
//! functions in this module are guaranteed to be safe and **NEVER** panic.

use crate::Rgb8;

pub(crate) trait NonZeroSized {}
impl NonZeroSized for u8 {}
impl<T: NonZeroSized> NonZeroSized for [T; 3] {}

pub(crate) trait Castable: bytemuck::Pod + NonZeroSized {}
impl<T: bytemuck::Pod + NonZeroSized> Castable for T {}

/// Casts a slice of `T` to a slice of `u8`.
pub(crate) fn as_bytes<T: Castable>(buffer: &[T]) -> &[u8] {
    bytemuck::cast_slice(buffer)
}

/// Reinterprets tightly packed RGB bytes as pixels.
///
/// Returns `None` if the length is not a multiple of 3.
pub(crate) fn as_rgb(bytes: &[u8]) -> Option<&[Rgb8]> {
    bytemuck::try_cast_slice(bytes).ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pixels_to_bytes_and_back() {
        let pixels: [Rgb8; 2] = [[1, 2, 3], [4, 5, 6]];
        let bytes = as_bytes(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(as_rgb(bytes), Some(&pixels[..]));
        assert_eq!(as_rgb(&bytes[..5]), None);
    }
}
