// THEORY:
// The `Background` is the aggregate the whole engine revolves around. It owns one
// image buffer and the list of ROIs where items may land, and it is the only
// thing allowed to mutate that buffer. Mutation goes through `&mut self`, so a
// background can never be composited into from two places at once; parallel
// generation means one background per worker.
//
// `insert_item` orchestrates a single placement:
// 1.  **Sample**: pick a placement point inside one of the ROIs.
// 2.  **Mask**: derive the item's binary mask at the configured threshold.
// 3.  **Composite**: blend the item into the owned buffer.
// 4.  **Report**: hand the placement and both shapes back as an `Insertion`, so
//     the caller can label exactly what was drawn without re-sampling.
//
// Labelling stays with the caller (see `annotation::write_insertion`).

use crate::config::SynthConfig;
use crate::core_modules::compositor;
use crate::core_modules::geometry::{PlacementPoint, Shape};
use crate::core_modules::item::Item;
use crate::core_modules::roi::{self, Roi};
use crate::core_modules::roi_sampler;
use crate::core_modules::utils::image_helper;
use crate::error::Result;
use image::RgbImage;
use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};

/// What a successful insertion drew, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub placement: PlacementPoint,
    pub item_shape: Shape,
    pub background_shape: Shape,
}

/// A background image being filled with items.
#[derive(Debug, Clone)]
pub struct Background {
    image: RgbImage,
    rois: Vec<Roi>,
    /// Metadata only; never re-read.
    source_path: Option<PathBuf>,
}

impl Background {
    pub fn new(image: RgbImage, rois: Vec<Roi>, source_path: Option<PathBuf>) -> Result<Self> {
        roi::validate_rois(&rois, Shape::of(&image))?;
        Ok(Self {
            image,
            rois,
            source_path,
        })
    }

    pub fn open(path: impl AsRef<Path>, rois: Vec<Roi>) -> Result<Self> {
        let path = path.as_ref();
        let image = image_helper::load(path)?;
        info!(
            "loaded background {} ({}) with {} ROIs",
            path.display(),
            Shape::of(&image),
            rois.len()
        );
        Self::new(image, rois, Some(path.to_path_buf()))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn rois(&self) -> &[Roi] {
        &self.rois
    }

    pub fn shape(&self) -> Shape {
        Shape::of(&self.image)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Replaces every ROI at once. On error the old list is kept.
    pub fn set_rois(&mut self, rois: Vec<Roi>) -> Result<()> {
        roi::validate_rois(&rois, self.shape())?;
        info!("replacing {} ROIs with {}", self.rois.len(), rois.len());
        self.rois = rois;
        Ok(())
    }

    /// Composites `item` at a random point inside one of the ROIs.
    pub fn insert_item<R: Rng + ?Sized>(
        &mut self,
        item: &Item,
        config: &SynthConfig,
        rng: &mut R,
    ) -> Result<Insertion> {
        let placement = roi_sampler::sample(&self.rois, rng)?;
        let (mask, mask_inverse) = item.mask(config.threshold);
        compositor::composite(&mut self.image, item.image(), &mask, &mask_inverse, placement)?;

        Ok(Insertion {
            placement,
            item_shape: item.shape(),
            background_shape: self.shape(),
        })
    }

    /// `insert_item` with the default threshold and the thread-local RNG.
    pub fn insert_item_default(&mut self, item: &Item) -> Result<Insertion> {
        self.insert_item(item, &SynthConfig::default(), &mut rand::thread_rng())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image_helper::save(path, &self.image)?;
        info!("saved background to {}", path.display());
        Ok(())
    }
}
