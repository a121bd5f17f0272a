// THEORY:
// The sampler answers one question: where does the next item go? It picks one ROI
// uniformly by index, then a row and a column uniformly inside it. Both ranges are
// closed, so the far edge of an ROI (origin + extent) is a legal answer. Whether
// an item placed there still fits in the background is the compositor's concern,
// not the sampler's.

use crate::core_modules::geometry::PlacementPoint;
use crate::core_modules::roi::Roi;
use crate::error::{Result, SynthError};
use log::debug;
use rand::Rng;

/// Picks a random placement point inside a randomly chosen ROI.
pub fn sample<R: Rng + ?Sized>(rois: &[Roi], rng: &mut R) -> Result<PlacementPoint> {
    if rois.is_empty() {
        return Err(SynthError::InvalidConfiguration(
            "cannot sample a placement from an empty ROI list".to_string(),
        ));
    }

    let index = rng.gen_range(0..rois.len());
    let roi = &rois[index];
    let row = rng.gen_range(roi.row_origin..=roi.row_end());
    let col = rng.gen_range(roi.col_origin..=roi.col_end());

    debug!("sampled placement (row {row}, col {col}) from ROI #{index} {roi:?}");
    Ok(PlacementPoint { row, col })
}
