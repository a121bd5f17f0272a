// THEORY:
// The only door between the engine and the filesystem for pixels. Loading always
// yields an 8-bit RGB buffer, whatever the file held, so every other module can
// assume three u8 channels. Saving infers the codec from the file extension.

pub mod image_helper {
    use crate::core_modules::geometry::Shape;
    use image::imageops::{self, FilterType};
    use image::{ImageBuffer, PixelWithColorType, RgbImage};
    use std::path::Path;

    pub fn load(path: &Path) -> Result<RgbImage, image::error::ImageError> {
        Ok(image::open(path)?.to_rgb8())
    }

    pub fn save<P>(
        path: &Path,
        buffer: &ImageBuffer<P, Vec<u8>>,
    ) -> Result<(), image::error::ImageError>
    where
        P: PixelWithColorType<Subpixel = u8>,
    {
        buffer.save(path)
    }

    /// Bilinear resize to `target`.
    pub fn resize(image: &RgbImage, target: Shape) -> RgbImage {
        imageops::resize(image, target.cols, target.rows, FilterType::Triangle)
    }
}

pub use image_helper::*;
