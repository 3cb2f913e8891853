use image::RgbImage;

use crate::DecodedImage;

impl TryFrom<DecodedImage> for RgbImage {
    type Error = DecodedImage;

    /// Converts the decoded image into an `image::RgbImage` without copying.
    ///
    /// On failure, the decoded image is returned unchanged.
    fn try_from(decoded: DecodedImage) -> Result<Self, Self::Error> {
        let DecodedImage { data, size } = decoded;
        if size.pixels().checked_mul(3) != Some(data.len() as u64) {
            return Err(DecodedImage { data, size });
        }
        match RgbImage::from_raw(size.width, size.height, data) {
            Some(image) => Ok(image),
            None => unreachable!("buffer length matches {}", size),
        }
    }
}

impl DecodedImage {
    /// Converts the decoded image into an `image::RgbImage`.
    pub fn into_rgb_image(self) -> Result<RgbImage, DecodedImage> {
        self.try_into()
    }
}
