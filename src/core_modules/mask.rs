// THEORY:
// The mask extractor turns an item photo into a binary stencil: foreground pixels
// (the object) become 255, background pixels (the dark studio backdrop the item
// was shot on) become 0. The stencil and its bitwise inverse are what the
// compositor needs to cut a hole in the background and fill it with the item.
//
// Two steps, both fixed-point so results are reproducible bit-for-bit:
// 1.  **Grayscale**: Rec. 601 luma with 14-bit integer weights
//     (0.299, 0.587, 0.114 scaled by 2^14 and rounded), plus half an LSB before
//     the shift so the result rounds to nearest.
// 2.  **Binary threshold**: strictly greater than the threshold is foreground.
//     A pixel exactly at the threshold is background.

use image::{GrayImage, Luma, RgbImage};

const SHIFT: u32 = 14;
const WEIGHT_RED: u32 = 4899;
const WEIGHT_GREEN: u32 = 9617;
const WEIGHT_BLUE: u32 = 1868;
const ROUNDING: u32 = 1 << (SHIFT - 1);

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Rec. 601 grayscale of a single RGB triple.
#[inline]
pub fn luma(red: u8, green: u8, blue: u8) -> u8 {
    let weighted =
        red as u32 * WEIGHT_RED + green as u32 * WEIGHT_GREEN + blue as u32 * WEIGHT_BLUE;
    ((weighted + ROUNDING) >> SHIFT) as u8
}

pub fn to_gray(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let [red, green, blue] = image.get_pixel(x, y).0;
        Luma([luma(red, green, blue)])
    })
}

/// Returns `(mask, mask_inverse)` for `image` at `threshold`.
pub fn threshold_mask(image: &RgbImage, threshold: u8) -> (GrayImage, GrayImage) {
    let gray = to_gray(image);
    let mut mask = GrayImage::new(gray.width(), gray.height());
    let mut inverse = GrayImage::new(gray.width(), gray.height());

    for ((source, fg), bg) in gray.pixels().zip(mask.pixels_mut()).zip(inverse.pixels_mut()) {
        let value = if source.0[0] > threshold { FOREGROUND } else { BACKGROUND };
        fg.0[0] = value;
        bg.0[0] = !value;
    }

    (mask, inverse)
}
