// Folder bookkeeping and resize arithmetic used by dataset drivers.

use crate::core_modules::geometry::Shape;
use crate::core_modules::utils::image_helper;
use crate::error::Result;
use image::RgbImage;
use std::fs;
use std::path::Path;

/// Number of regular files directly inside `dir`. Subdirectories are not counted.
pub fn count_files(dir: impl AsRef<Path>) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        if entry?.path().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

pub fn validate_image_count(dir: impl AsRef<Path>, expected: usize) -> Result<bool> {
    Ok(count_files(dir)? == expected)
}

/// Scale factors `(col, row)` that take `input` to `output`.
pub fn resize_proportions(input: Shape, output: Shape) -> (f64, f64) {
    (
        output.cols as f64 / input.cols as f64,
        output.rows as f64 / input.rows as f64,
    )
}

pub fn resize_image(image: &RgbImage, target: Shape) -> RgbImage {
    image_helper::resize(image, target)
}
