//! Corner-angle validation shared by polygon reduction and rectification.
use crate::geometry::corner_angle_deg;
use crate::types::Point;

/// Allowed deviation of a corner from a right angle (degrees).
pub const DEFAULT_CORNER_SLACK_DEG: f32 = 15.0;

/// A four-point ring is acceptable when every corner angle is finite and
/// within `slack_deg` of 90 degrees. Degenerate corners produce NaN angles,
/// and `NaN > slack` is false, so the finiteness check must come first.
pub fn validate_corner_angles(quad: &[Point; 4], slack_deg: f32) -> bool {
    for i in 0..4 {
        let prev = &quad[(i + 3) % 4];
        let next = &quad[(i + 1) % 4];
        let angle = corner_angle_deg(&quad[i], prev, next);
        if !angle.is_finite() || (angle - 90.0).abs() > slack_deg {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_square_passes() {
        let quad = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(validate_corner_angles(&quad, DEFAULT_CORNER_SLACK_DEG));
    }

    #[test]
    fn mild_perspective_skew_passes() {
        // Corners stay within a few degrees of square.
        let quad = [
            Point::new(2.0, 0.0),
            Point::new(103.0, 3.0),
            Point::new(100.0, 201.0),
            Point::new(0.0, 198.0),
        ];
        assert!(validate_corner_angles(&quad, DEFAULT_CORNER_SLACK_DEG));
    }

    #[test]
    fn sheared_parallelogram_fails() {
        // 45 degree corners.
        let quad = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 10.0),
        ];
        assert!(!validate_corner_angles(&quad, DEFAULT_CORNER_SLACK_DEG));
    }

    #[test]
    fn repeated_vertex_is_invalid_not_a_panic() {
        let p = Point::new(5.0, 5.0);
        let quad = [p, p, Point::new(10.0, 5.0), Point::new(10.0, 10.0)];
        assert!(!validate_corner_angles(&quad, DEFAULT_CORNER_SLACK_DEG));
    }
}
