// THEORY:
// A `Roi` is a rectangular area of a background where items may be dropped. It is
// stored the way an operator draws it: top-left corner (col, row) plus width and
// height. Two invariants are enforced here instead of being left to chance:
// extents are non-zero (checked at construction) and, once attached to a
// background, the rectangle lies inside it (`fits_within`).

use crate::core_modules::geometry::Shape;
use crate::error::{Result, SynthError};

/// The three conveyor regions used when no ROI list is supplied.
pub const DEFAULT_ROIS: [Roi; 3] = [
    Roi::checked(522, 1257, 1084, 193),
    Roi::checked(413, 1151, 279, 209),
    Roi::checked(1326, 1123, 316, 277),
];

/// A region of interest over a background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roi {
    /// Column offset of the top-left corner.
    pub col_origin: u32,
    /// Row offset of the top-left corner.
    pub row_origin: u32,
    /// Width in pixels.
    pub col_extent: u32,
    /// Height in pixels.
    pub row_extent: u32,
}

impl Roi {
    pub fn new(col_origin: u32, row_origin: u32, col_extent: u32, row_extent: u32) -> Result<Self> {
        let roi = Self {
            col_origin,
            row_origin,
            col_extent,
            row_extent,
        };
        roi.check_extent()?;
        Ok(roi)
    }

    /// Compile-time constructor for constant tables; a zero extent fails the build.
    const fn checked(col_origin: u32, row_origin: u32, col_extent: u32, row_extent: u32) -> Self {
        assert!(col_extent > 0 && row_extent > 0, "ROI extents must be non-zero");
        Self {
            col_origin,
            row_origin,
            col_extent,
            row_extent,
        }
    }

    pub fn defaults() -> Vec<Roi> {
        DEFAULT_ROIS.to_vec()
    }

    /// Fails if either extent is zero. The fields are public, so lists built by
    /// hand are re-checked through this when attached to a background.
    pub fn check_extent(&self) -> Result<()> {
        if self.col_extent == 0 || self.row_extent == 0 {
            return Err(SynthError::InvalidConfiguration(format!(
                "ROI at (col {}, row {}) has a zero extent ({}x{})",
                self.col_origin, self.row_origin, self.col_extent, self.row_extent
            )));
        }
        Ok(())
    }

    /// Last row a sampler may return for this ROI (inclusive).
    pub fn row_end(&self) -> u32 {
        self.row_origin.saturating_add(self.row_extent)
    }

    /// Last column a sampler may return for this ROI (inclusive).
    pub fn col_end(&self) -> u32 {
        self.col_origin.saturating_add(self.col_extent)
    }

    pub fn fits_within(&self, background: Shape) -> bool {
        self.col_origin as u64 + self.col_extent as u64 <= background.cols as u64
            && self.row_origin as u64 + self.row_extent as u64 <= background.rows as u64
    }

    /// Parses `col,row,width,height`.
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(SynthError::InvalidConfiguration(format!(
                "ROI `{text}` must have four comma-separated fields"
            )));
        }
        let mut values = [0u32; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| {
                SynthError::InvalidConfiguration(format!(
                    "ROI field `{field}` is not an unsigned integer"
                ))
            })?;
        }
        Roi::new(values[0], values[1], values[2], values[3])
    }
}

/// Checks a whole ROI list against a background: non-empty, every rectangle
/// non-degenerate and inside the image.
pub fn validate_rois(rois: &[Roi], background: Shape) -> Result<()> {
    if rois.is_empty() {
        return Err(SynthError::InvalidConfiguration("ROI list is empty".to_string()));
    }
    for roi in rois {
        roi.check_extent()?;
        if !roi.fits_within(background) {
            return Err(SynthError::InvalidConfiguration(format!(
                "ROI {roi:?} lies outside background {background}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extent_is_rejected() {
        assert!(matches!(Roi::new(0, 0, 0, 10), Err(SynthError::InvalidConfiguration(_))));
        assert!(matches!(Roi::new(0, 0, 10, 0), Err(SynthError::InvalidConfiguration(_))));
    }

    #[test]
    fn defaults_match_the_conveyor_layout() {
        let rois = Roi::defaults();
        assert_eq!(rois.len(), 3);
        assert_eq!(rois[0], Roi::new(522, 1257, 1084, 193).unwrap());
        assert_eq!(rois[2].col_end(), 1326 + 316);
        assert_eq!(rois[2].row_end(), 1123 + 277);
    }

    #[test]
    fn hand_built_degenerate_roi_is_caught_on_validation() {
        let flat = Roi {
            col_origin: 0,
            row_origin: 0,
            col_extent: 10,
            row_extent: 0,
        };
        assert!(matches!(flat.check_extent(), Err(SynthError::InvalidConfiguration(_))));
        assert!(matches!(
            validate_rois(&[flat], Shape::new(100, 100)),
            Err(SynthError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn every_default_passes_the_runtime_check() {
        for roi in Roi::defaults() {
            assert!(roi.check_extent().is_ok());
            assert_eq!(
                Roi::new(roi.col_origin, roi.row_origin, roi.col_extent, roi.row_extent).unwrap(),
                roi
            );
        }
    }

    #[test]
    fn validate_rejects_rois_outside_the_background() {
        let background = Shape::new(100, 100);
        let inside = Roi::new(0, 0, 100, 100).unwrap();
        let outside = Roi::new(50, 0, 51, 10).unwrap();
        assert!(validate_rois(&[inside], background).is_ok());
        assert!(matches!(
            validate_rois(&[inside, outside], background),
            Err(SynthError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate_rois(&[], background),
            Err(SynthError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn parse_reads_col_row_width_height() {
        let roi = Roi::parse("10, 20,30,40").unwrap();
        assert_eq!(roi, Roi::new(10, 20, 30, 40).unwrap());
        assert!(Roi::parse("1,2,3").is_err());
        assert!(Roi::parse("1,2,x,4").is_err());
        assert!(Roi::parse("1,2,0,4").is_err());
    }
}
