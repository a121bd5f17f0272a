// THEORY:
// `nut_synth` fabricates object-detection training data. It drops foreground item
// photos into randomly chosen spots inside the regions of interest of a larger
// background photo, and writes a normalized bounding-box label for every item it
// drops. The public surface is small:
//
// - `Background` owns the image being built and its ROIs; `insert_item` places one
//   item and returns the `Insertion` it performed.
// - `annotation::write_insertion` turns that `Insertion` into a label line.
// - `Background::save` writes the finished image.
//
// Everything else (sampling, masking, compositing, file helpers) lives in
// `core_modules` and is public for callers that want the pieces individually.

pub mod config;
pub mod core_modules;
pub mod error;

pub use crate::config::SynthConfig;
pub use crate::core_modules::annotation::{self, AnnotationRecord};
pub use crate::core_modules::background::{Background, Insertion};
pub use crate::core_modules::geometry::{PlacementPoint, Shape};
pub use crate::core_modules::item::Item;
pub use crate::core_modules::roi::Roi;
pub use crate::error::{Result, SynthError};
