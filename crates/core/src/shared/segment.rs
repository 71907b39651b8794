use super::point::Point2D;

/// A finite straight line between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Closed `[min, max]` interval covered on the x axis.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.start.x.min(self.end.x), self.start.x.max(self.end.x))
    }

    /// Closed `[min, max]` interval covered on the y axis.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.start.y.min(self.end.y), self.start.y.max(self.end.y))
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
