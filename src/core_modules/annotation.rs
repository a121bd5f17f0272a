// THEORY:
// Labels are written in the normalized bounding-box format detection trainers
// expect: one line per object, `class x_center y_center width height`, every
// coordinate divided by the background's size along its axis. The writer only
// ever appends; a label file grows monotonically across calls and nothing here
// reads it back.
//
// Records outside [0, 1] are still written. The compositor refuses out-of-bounds
// placements, so such a record can only come from a caller passing shapes or
// placements by hand; it is logged, not rejected.

use crate::core_modules::background::Insertion;
use crate::core_modules::geometry::{PlacementPoint, Shape};
use crate::error::Result;
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One normalized bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationRecord {
    pub class_id: u32,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl AnnotationRecord {
    pub fn from_placement(
        class_id: u32,
        placement: PlacementPoint,
        item: Shape,
        background: Shape,
    ) -> Self {
        let item_cols = item.cols as f64;
        let item_rows = item.rows as f64;
        let background_cols = background.cols as f64;
        let background_rows = background.rows as f64;

        Self {
            class_id,
            x_center: (placement.col as f64 + item_cols / 2.0) / background_cols,
            y_center: (placement.row as f64 + item_rows / 2.0) / background_rows,
            width: item_cols / background_cols,
            height: item_rows / background_rows,
        }
    }

    pub fn from_insertion(class_id: u32, insertion: &Insertion) -> Self {
        Self::from_placement(
            class_id,
            insertion.placement,
            insertion.item_shape,
            insertion.background_shape,
        )
    }

    pub fn is_normalized(&self) -> bool {
        [self.x_center, self.y_center, self.width, self.height]
            .iter()
            .all(|value| (0.0..=1.0).contains(value))
    }

    /// The newline-terminated text line for this record.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}\n",
            self.class_id,
            format_coordinate(self.x_center),
            format_coordinate(self.y_center),
            format_coordinate(self.width),
            format_coordinate(self.height)
        )
    }
}

/// Shortest round-trip text for `value`, keeping a trailing `.0` on whole numbers
/// so every coordinate reads as a float (`1.0`, not `1`).
fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Appends `record` to the label file at `path`, creating it if needed.
pub fn write_record(record: &AnnotationRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !record.is_normalized() {
        warn!("writing out-of-range annotation {record:?} to {}", path.display());
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(record.to_line().as_bytes())?;
    Ok(())
}

/// Builds the record for a placement and appends it in one step.
pub fn write(
    class_id: u32,
    placement: PlacementPoint,
    item: Shape,
    background: Shape,
    path: impl AsRef<Path>,
) -> Result<AnnotationRecord> {
    let record = AnnotationRecord::from_placement(class_id, placement, item, background);
    write_record(&record, path)?;
    Ok(record)
}

pub fn write_insertion(
    class_id: u32,
    insertion: &Insertion,
    path: impl AsRef<Path>,
) -> Result<AnnotationRecord> {
    let record = AnnotationRecord::from_insertion(class_id, insertion);
    write_record(&record, path)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("nut_synth_{}_{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn centered_item_on_wide_background() {
        let record = AnnotationRecord::from_placement(
            3,
            PlacementPoint::new(450, 900),
            Shape::new(100, 200),
            Shape::new(1000, 2000),
        );
        assert_eq!(record.x_center, 0.5);
        assert_eq!(record.y_center, 0.5);
        assert_eq!(record.width, 0.1);
        assert_eq!(record.height, 0.1);
        assert_eq!(record.to_line(), "3 0.5 0.5 0.1 0.1\n");
    }

    #[test]
    fn whole_number_coordinates_keep_a_decimal_point() {
        let record = AnnotationRecord::from_placement(
            0,
            PlacementPoint::new(0, 0),
            Shape::new(40, 60),
            Shape::new(40, 60),
        );
        assert_eq!(record.to_line(), "0 0.5 0.5 1.0 1.0\n");

        let corner = AnnotationRecord {
            class_id: 2,
            x_center: 0.0,
            y_center: 2.0,
            width: 0.25,
            height: 1.0,
        };
        assert_eq!(corner.to_line(), "2 0.0 2.0 0.25 1.0\n");
    }

    #[test]
    fn odd_item_sizes_use_true_division() {
        let record = AnnotationRecord::from_placement(
            0,
            PlacementPoint::new(0, 0),
            Shape::new(3, 5),
            Shape::new(10, 10),
        );
        assert_eq!(record.x_center, 0.25);
        assert_eq!(record.y_center, 0.15);
        assert_eq!(record.width, 0.5);
        assert_eq!(record.height, 0.3);
    }

    #[test]
    fn placement_past_the_edge_is_flagged_but_computed() {
        let record = AnnotationRecord::from_placement(
            1,
            PlacementPoint::new(95, 95),
            Shape::new(20, 20),
            Shape::new(100, 100),
        );
        assert!(!record.is_normalized());
        assert_eq!(record.x_center, 1.05);
    }

    #[test]
    fn writes_append_in_call_order() {
        let path = scratch_file("append.txt");
        fs::write(&path, "7 0.1 0.2 0.3 0.4\n").unwrap();

        let background = Shape::new(1000, 2000);
        let item = Shape::new(100, 200);
        write(1, PlacementPoint::new(450, 900), item, background, &path).unwrap();
        write(2, PlacementPoint::new(0, 0), item, background, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "7 0.1 0.2 0.3 0.4");
        assert_eq!(lines[1], "1 0.5 0.5 0.1 0.1");
        assert_eq!(lines[2], "2 0.05 0.05 0.1 0.1");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn two_writes_to_a_fresh_file_give_two_lines() {
        let path = scratch_file("fresh.txt");
        let background = Shape::new(10, 10);
        let item = Shape::new(2, 2);
        write(0, PlacementPoint::new(0, 0), item, background, &path).unwrap();
        write(0, PlacementPoint::new(4, 4), item, background, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0 0.1 0.1 0.2 0.2\n0 0.5 0.5 0.2 0.2\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let path = std::env::temp_dir()
            .join("nut_synth_missing_dir")
            .join("nested")
            .join("labels.txt");
        let result = write(
            0,
            PlacementPoint::new(0, 0),
            Shape::new(1, 1),
            Shape::new(1, 1),
            &path,
        );
        assert!(matches!(result, Err(crate::error::SynthError::Io(_))));
    }
}
