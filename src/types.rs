use serde::Serialize;

/// Real-valued image coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered, cyclic sequence of points. No self-intersection is assumed but
/// none is guaranteed either; garbage input must be tolerated downstream by
/// discarding, never by panicking.
pub type Polygon = Vec<Point>;

/// Four corner points with canonical roles, produced by corner ordering.
///
/// Validity (every interior corner angle within the slack of 90°) is checked
/// by [`crate::reduce::validate_corner_angles`]; a `Quad` by itself carries
/// no such guarantee.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Quad {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Quad {
    /// Corners as a cyclic polygon, clockwise from the top-left.
    pub fn cyclic(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Final composite image returned to the caller.
pub type FusedReceipt = image::RgbImage;
