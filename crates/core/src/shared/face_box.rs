use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Detector bounding box of a face, in image pixels.
///
/// Only carried through to the overlay; classification never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Where the overlay places the label text: the box's top-left corner.
    pub fn label_anchor(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}
