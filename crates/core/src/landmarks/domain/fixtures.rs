//! Landmark sets with hand-checkable measurements.

use crate::shared::point::Point2D;

use super::landmark_set::LandmarkSet;

/// Left half of a symmetric jaw. Chin at (50, 100); the right half mirrors
/// around x = 50. Segments 2→3 … 7→8 measure 5, 10, 10, 10, 20, 15.
const LEFT_JAW: [(f64, f64); 9] = [
    (0.0, 0.0),
    (2.0, 20.0),
    (8.0, 44.0),
    (11.0, 48.0),
    (17.0, 56.0),
    (23.0, 64.0),
    (29.0, 72.0),
    (41.0, 88.0),
    (50.0, 100.0),
];

pub(crate) fn symmetric_jaw() -> [Point2D; 17] {
    std::array::from_fn(|i| {
        if i <= 8 {
            Point2D::from(LEFT_JAW[i])
        } else {
            let (x, y) = LEFT_JAW[16 - i];
            Point2D::new(100.0 - x, y)
        }
    })
}

pub(crate) fn left_eyebrow() -> [Point2D; 5] {
    [
        Point2D::new(12.0, -10.0),
        Point2D::new(20.0, -14.0),
        Point2D::new(28.0, -16.0),
        Point2D::new(36.0, -15.0),
        Point2D::new(44.0, -12.0),
    ]
}

pub(crate) fn right_eyebrow() -> [Point2D; 5] {
    [
        Point2D::new(56.0, -12.0),
        Point2D::new(64.0, -15.0),
        Point2D::new(72.0, -16.0),
        Point2D::new(80.0, -14.0),
        Point2D::new(87.0, -10.0),
    ]
}

/// Forehead 75, cheekbone 80, jawline 70: a diamond-family face.
pub(crate) fn diamond_face() -> LandmarkSet {
    LandmarkSet::new(symmetric_jaw(), left_eyebrow(), right_eyebrow())
}

/// The same face as a flat 68-point detector result.
pub(crate) fn diamond_face_points() -> Vec<Point2D> {
    let mut points = vec![Point2D::new(0.0, 0.0); 68];
    points[0..17].copy_from_slice(&symmetric_jaw());
    points[17..22].copy_from_slice(&left_eyebrow());
    points[22..27].copy_from_slice(&right_eyebrow());
    points
}
