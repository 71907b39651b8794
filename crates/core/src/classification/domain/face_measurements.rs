//! Geometric measurements derived from a face's landmarks.
//!
//! All values are in image pixels and are recomputed from scratch for every
//! face; nothing is carried between calls.

use serde::Serialize;

use crate::geometry::segment_intersection::intersect;
use crate::landmarks::domain::landmark_set::LandmarkSet;
use crate::shared::constants::{
    CHEEK_CROSS_LEFT, CHEEK_CROSS_RIGHT, JAWLINE_PATH_START, JAW_CENTER, JAW_LEFT_END,
    JAW_RIGHT_END,
};
use crate::shared::point::Point2D;
use crate::shared::segment::Segment;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FaceMeasurements {
    /// Rightmost right-eyebrow x minus leftmost left-eyebrow x. Signed.
    pub forehead_width: f64,
    /// Distance between where the two ear-to-chin lines cross the cheek line.
    /// Exactly 0 when either crossing does not exist.
    pub cheekbone_width: f64,
    /// Path length along the jaw from `JAWLINE_PATH_START` to the chin.
    pub jawline_length_from_center: f64,
}

impl FaceMeasurements {
    pub fn new(forehead_width: f64, cheekbone_width: f64, jawline_length_from_center: f64) -> Self {
        Self {
            forehead_width,
            cheekbone_width,
            jawline_length_from_center,
        }
    }
}

pub fn measure(landmarks: &LandmarkSet) -> FaceMeasurements {
    FaceMeasurements {
        forehead_width: forehead_width(landmarks),
        cheekbone_width: cheekbone_width(landmarks),
        jawline_length_from_center: jawline_length_from_center(landmarks),
    }
}

fn forehead_width(landmarks: &LandmarkSet) -> f64 {
    let leftmost = first_extreme(landmarks.left_eyebrow(), |candidate, best| candidate < best);
    let rightmost = first_extreme(landmarks.right_eyebrow(), |candidate, best| candidate > best);
    rightmost.x - leftmost.x
}

/// Scans in input order, replacing the pick only when a later x strictly
/// `beats` it. Ties keep the earliest point.
fn first_extreme(points: &[Point2D], beats: impl Fn(f64, f64) -> bool) -> Point2D {
    let mut best = points[0];
    for p in &points[1..] {
        if beats(p.x, best.x) {
            best = *p;
        }
    }
    best
}

fn cheekbone_width(landmarks: &LandmarkSet) -> f64 {
    let jaw = landmarks.jaw_outline();
    let center = jaw[JAW_CENTER];
    let cheek_line = Segment::new(jaw[CHEEK_CROSS_LEFT], jaw[CHEEK_CROSS_RIGHT]);

    let left = intersect(&Segment::new(jaw[JAW_LEFT_END], center), &cheek_line);
    let right = intersect(&Segment::new(jaw[JAW_RIGHT_END], center), &cheek_line);

    match (left, right) {
        (Some(l), Some(r)) => l.distance_to(&r),
        _ => 0.0,
    }
}

fn jawline_length_from_center(landmarks: &LandmarkSet) -> f64 {
    landmarks.jaw_outline()[JAWLINE_PATH_START..=JAW_CENTER]
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]).length())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::domain::fixtures::{
        diamond_face, left_eyebrow, right_eyebrow, symmetric_jaw,
    };
    use approx::assert_relative_eq;
    use rstest::rstest;

    // ── Fixture face ────────────────────────────────────────────────

    #[test]
    fn test_fixture_measurements() {
        let m = measure(&diamond_face());
        assert_eq!(m.forehead_width, 75.0);
        assert_eq!(m.cheekbone_width, 80.0);
        assert_eq!(m.jawline_length_from_center, 70.0);
    }

    #[test]
    fn test_measure_is_repeatable() {
        let face = diamond_face();
        let a = measure(&face);
        let b = measure(&face);
        assert_eq!(a.forehead_width.to_bits(), b.forehead_width.to_bits());
        assert_eq!(a.cheekbone_width.to_bits(), b.cheekbone_width.to_bits());
        assert_eq!(
            a.jawline_length_from_center.to_bits(),
            b.jawline_length_from_center.to_bits()
        );
    }

    // ── Forehead width ──────────────────────────────────────────────

    #[test]
    fn test_forehead_ignores_eyebrow_point_order() {
        let mut left = left_eyebrow();
        let mut right = right_eyebrow();
        left.reverse();
        right.swap(0, 4);
        right.swap(1, 3);
        let m = measure(&LandmarkSet::new(symmetric_jaw(), left, right));
        assert_eq!(m.forehead_width, 75.0);
    }

    #[test]
    fn test_forehead_negative_when_eyebrows_swapped() {
        let m = measure(&LandmarkSet::new(
            symmetric_jaw(),
            right_eyebrow(),
            left_eyebrow(),
        ));
        // rightmost of [12..44] is 44, leftmost of [56..87] is 56
        assert_eq!(m.forehead_width, 44.0 - 56.0);
    }

    #[test]
    fn test_forehead_with_duplicate_extremes() {
        let left = [Point2D::new(10.0, 0.0); 5];
        let right = [Point2D::new(30.0, 1.0); 5];
        let m = measure(&LandmarkSet::new(symmetric_jaw(), left, right));
        assert_eq!(m.forehead_width, 20.0);
    }

    #[rstest]
    #[case::tie_keeps_first(&[(1.0, 5.0), (3.0, 0.0), (1.0, 9.0)], (1.0, 5.0))]
    #[case::later_strictly_smaller(&[(4.0, 0.0), (2.0, 1.0), (3.0, 2.0)], (2.0, 1.0))]
    fn test_first_extreme_minimum(#[case] pts: &[(f64, f64)], #[case] expected: (f64, f64)) {
        let pts: Vec<Point2D> = pts.iter().copied().map(Point2D::from).collect();
        assert_eq!(first_extreme(&pts, |c, b| c < b), Point2D::from(expected));
    }

    #[test]
    fn test_first_extreme_maximum_keeps_first_on_tie() {
        let pts = [
            Point2D::new(7.0, 1.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(7.0, 3.0),
        ];
        assert_eq!(first_extreme(&pts, |c, b| c > b), Point2D::new(7.0, 1.0));
    }

    // ── Cheekbone width ─────────────────────────────────────────────

    #[test]
    fn test_cheekbone_zero_when_jaw_lines_parallel_to_cheek_line() {
        let mut jaw = symmetric_jaw();
        jaw[JAW_LEFT_END] = Point2D::new(0.0, 100.0);
        jaw[JAW_CENTER] = Point2D::new(50.0, 100.0);
        jaw[JAW_RIGHT_END] = Point2D::new(100.0, 100.0);
        jaw[CHEEK_CROSS_LEFT] = Point2D::new(0.0, 50.0);
        jaw[CHEEK_CROSS_RIGHT] = Point2D::new(100.0, 50.0);
        let m = measure(&LandmarkSet::new(jaw, left_eyebrow(), right_eyebrow()));
        assert_eq!(m.cheekbone_width, 0.0);
    }

    #[test]
    fn test_cheekbone_zero_when_one_crossing_out_of_bounds() {
        let mut jaw = symmetric_jaw();
        // Cheek line now stops at x=60, short of the right crossing at x=90.
        jaw[CHEEK_CROSS_RIGHT] = Point2D::new(60.0, 20.0);
        let m = measure(&LandmarkSet::new(jaw, left_eyebrow(), right_eyebrow()));
        assert_eq!(m.cheekbone_width, 0.0);
    }

    #[test]
    fn test_cheekbone_tilted_cheek_line() {
        let mut jaw = symmetric_jaw();
        // Ear-to-chin lines y = 2x and y = 200 - 2x; cheek line y = 10 + x/2.
        jaw[CHEEK_CROSS_LEFT] = Point2D::new(0.0, 10.0);
        jaw[CHEEK_CROSS_RIGHT] = Point2D::new(100.0, 60.0);
        let m = measure(&LandmarkSet::new(jaw, left_eyebrow(), right_eyebrow()));
        // Crossings at (20/3, 40/3) and (76, 48).
        let expected = ((76.0 - 20.0 / 3.0_f64).powi(2) + (48.0 - 40.0 / 3.0_f64).powi(2)).sqrt();
        assert_relative_eq!(m.cheekbone_width, expected, epsilon = 1e-9);
    }

    // ── Jawline length ──────────────────────────────────────────────

    #[test]
    fn test_jawline_ignores_points_outside_path() {
        let mut jaw = symmetric_jaw();
        jaw[0] = Point2D::new(-500.0, -500.0);
        jaw[1] = Point2D::new(-400.0, 300.0);
        jaw[12] = Point2D::new(900.0, 900.0);
        let m = measure(&LandmarkSet::new(jaw, left_eyebrow(), right_eyebrow()));
        assert_eq!(m.jawline_length_from_center, 70.0);
    }

    #[test]
    fn test_jawline_zero_when_path_collapsed() {
        let mut jaw = symmetric_jaw();
        for p in &mut jaw[JAWLINE_PATH_START..=JAW_CENTER] {
            *p = Point2D::new(5.0, 5.0);
        }
        let m = measure(&LandmarkSet::new(jaw, left_eyebrow(), right_eyebrow()));
        assert_eq!(m.jawline_length_from_center, 0.0);
    }
}
