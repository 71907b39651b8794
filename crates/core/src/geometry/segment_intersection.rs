//! Finite segment intersection via the two-line determinant form.
//!
//! The containment test is an axis-aligned bounding-box check against both
//! segments, not an exact on-segment test. It is accurate for the
//! near-orthogonal jaw segments it is applied to.

use crate::shared::point::Point2D;
use crate::shared::segment::Segment;

/// Intersection point of `a` and `b`, or `None` when the lines are parallel
/// (including coincident) or the crossing lies outside either segment's
/// bounding interval on either axis. Bounds are inclusive.
pub fn intersect(a: &Segment, b: &Segment) -> Option<Point2D> {
    let Point2D { x: x1, y: y1 } = a.start;
    let Point2D { x: x2, y: y2 } = a.end;
    let Point2D { x: x3, y: y3 } = b.start;
    let Point2D { x: x4, y: y4 } = b.end;

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d == 0.0 {
        return None;
    }

    let a_cross = x1 * y2 - y1 * x2;
    let b_cross = x3 * y4 - y3 * x4;
    let x = (a_cross * (x3 - x4) - (x1 - x2) * b_cross) / d;
    let y = (a_cross * (y3 - y4) - (y1 - y2) * b_cross) / d;

    if outside(x, a.x_bounds())
        || outside(y, a.y_bounds())
        || outside(x, b.x_bounds())
        || outside(y, b.y_bounds())
    {
        return None;
    }

    Some(Point2D::new(x, y))
}

fn outside(v: f64, (min, max): (f64, f64)) -> bool {
    v < min || v > max
}
