// THEORY:
// Every fallible operation in the crate reports through `SynthError`. The variants
// mirror the three failure families of the synthesis engine: a bad setup (no ROIs,
// degenerate rectangles, mismatched masks), a placement that would write past the
// edge of the background, and anything the filesystem or the image codecs reject.
// Nothing is retried or swallowed; errors go straight back to the caller.
//
// Filesystem failures always surface as `Io`, even when the `image` crate is the
// one that hit them. `Image` is left for decode and encode problems.

use crate::core_modules::geometry::{PlacementPoint, Shape};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("placement {placement} with item {item} exceeds background {background}")]
    OutOfBounds {
        placement: PlacementPoint,
        item: Shape,
        background: Shape,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(image::ImageError),
}

impl From<image::ImageError> for SynthError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(io) => SynthError::Io(io),
            other => SynthError::Image(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{ImageFormatHint, UnsupportedError};
    use std::io;

    #[test]
    fn image_io_failures_become_io_errors() {
        let source = image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match SynthError::from(source) {
            SynthError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn codec_failures_stay_image_errors() {
        let unsupported = UnsupportedError::from(ImageFormatHint::Unknown);
        let source = image::ImageError::Unsupported(unsupported);
        assert!(matches!(SynthError::from(source), SynthError::Image(_)));
    }
}
