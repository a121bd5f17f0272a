// THEORY:
// Plain coordinate types shared by every layer. The crate speaks in (row, col)
// order like the matrices it manipulates: row is the height axis, col the width
// axis. The `image` crate speaks (x, y), so conversions happen at the edges
// (`Shape::of`) and nowhere else.

use image::{ImageBuffer, Pixel};
use std::fmt;

/// Height and width of an image buffer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows (height).
    pub rows: u32,
    /// Number of columns (width).
    pub cols: u32,
}

impl Shape {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// The shape of an existing image buffer.
    pub fn of<P: Pixel>(image: &ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        let (width, height) = image.dimensions();
        Self {
            rows: height,
            cols: width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} (rows x cols)", self.rows, self.cols)
    }
}

/// The top-left pixel at which an item is written into a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementPoint {
    pub row: u32,
    pub col: u32,
}

impl PlacementPoint {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether an item of `item` shape placed here stays inside `background`.
    /// Computed in u64 so huge coordinates cannot wrap.
    pub fn fits(&self, item: Shape, background: Shape) -> bool {
        self.row as u64 + item.rows as u64 <= background.rows as u64
            && self.col as u64 + item.cols as u64 <= background.cols as u64
    }
}

impl fmt::Display for PlacementPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}
