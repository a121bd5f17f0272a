// THEORY:
// The compositor is the only component that writes background pixels. It performs
// a binary-mask alpha composite of an item onto a rectangular window of the
// background whose top-left corner is the placement point:
//
//     window = (window AND mask_inverse) + (item AND mask)
//
// "AND" keeps a channel value where the mask pixel is non-zero and zeroes it
// otherwise; "+" saturates at 255. With complementary masks this copies the item
// where the mask is set and keeps the background elsewhere.
//
// Every precondition is checked before the first write: mask sizes must match the
// item, and the window must lie inside the background. A rejected call leaves the
// background exactly as it was.

use crate::core_modules::geometry::{PlacementPoint, Shape};
use crate::error::{Result, SynthError};
use image::{GrayImage, ImageBuffer, Pixel};
use log::debug;

/// Blends `item` into `background` at `placement` under `mask`.
pub fn composite<P>(
    background: &mut ImageBuffer<P, Vec<u8>>,
    item: &ImageBuffer<P, Vec<u8>>,
    mask: &GrayImage,
    mask_inverse: &GrayImage,
    placement: PlacementPoint,
) -> Result<()>
where
    P: Pixel<Subpixel = u8>,
{
    let item_shape = Shape::of(item);
    let background_shape = Shape::of(background);

    for (name, candidate) in [("mask", mask), ("mask inverse", mask_inverse)] {
        if Shape::of(candidate) != item_shape {
            return Err(SynthError::InvalidConfiguration(format!(
                "{name} is {} but item is {item_shape}",
                Shape::of(candidate)
            )));
        }
    }

    if !placement.fits(item_shape, background_shape) {
        return Err(SynthError::OutOfBounds {
            placement,
            item: item_shape,
            background: background_shape,
        });
    }

    for (x, y, item_pixel) in item.enumerate_pixels() {
        let keep_background = mask_inverse.get_pixel(x, y).0[0] != 0;
        let take_item = mask.get_pixel(x, y).0[0] != 0;
        let target = background.get_pixel_mut(placement.col + x, placement.row + y);

        for (dst, &src) in target.channels_mut().iter_mut().zip(item_pixel.channels()) {
            let background_part = if keep_background { *dst } else { 0 };
            let item_part = if take_item { src } else { 0 };
            *dst = background_part.saturating_add(item_part);
        }
    }

    debug!("composited {item_shape} item at {placement} onto {background_shape} background");
    Ok(())
}
