// THEORY:
// An `Item` is a foreground object photo (a nut, a bolt, whatever the detector is
// meant to find) shot against a dark backdrop. It owns its pixels and never
// mutates them; the compositor only reads from it. Its mask is derived on demand
// because the threshold is a per-insertion choice.

use crate::core_modules::geometry::Shape;
use crate::core_modules::mask;
use crate::core_modules::utils::image_helper;
use crate::error::Result;
use image::{GrayImage, RgbImage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Item {
    image: RgbImage,
    /// Where the pixels came from, if they came from disk.
    path: Option<PathBuf>,
}

impl Item {
    pub fn new(image: RgbImage) -> Self {
        Self { image, path: None }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image_helper::load(path)?;
        Ok(Self {
            image,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn shape(&self) -> Shape {
        Shape::of(&self.image)
    }

    /// `(mask, mask_inverse)` at `threshold`.
    pub fn mask(&self, threshold: u8) -> (GrayImage, GrayImage) {
        mask::threshold_mask(&self.image, threshold)
    }

    /// A copy of this item scaled to `target`.
    pub fn resized(&self, target: Shape) -> Self {
        Self {
            image: image_helper::resize(&self.image, target),
            path: self.path.clone(),
        }
    }
}
