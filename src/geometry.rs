//! Polygon utilities used across the extraction pipeline.
//!
//! All routines are NaN-safe: degenerate input (zero-length edges, repeated
//! points) yields `NaN` angles or zero areas, never a panic. Callers treat
//! non-finite results as validation failure.

use crate::types::{Point, Polygon};

/// Interior angle at `vertex` formed with its two cyclic neighbours,
/// in degrees, via the law of cosines over the three side lengths.
///
/// Returns `NaN` when an adjacent edge has zero length.
pub fn corner_angle_deg(vertex: &Point, prev: &Point, next: &Point) -> f32 {
    let a = vertex.distance(prev);
    let b = vertex.distance(next);
    let c = prev.distance(next);
    let cos = (a * a + b * b - c * c) / (2.0 * a * b);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Enclosed area of a cyclic polygon (shoelace formula, absolute value).
/// Fewer than three points enclose nothing.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
    }
    sum.abs() * 0.5
}

/// Total edge length of a cyclic polygon, closing edge included.
pub fn polygon_perimeter(points: &[Point]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut sum = 0.0f32;
    for (i, p) in points.iter().enumerate() {
        sum += p.distance(&points[(i + 1) % points.len()]);
    }
    sum
}

/// Axis-aligned bounding rectangle of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRect {
    pub min: Point,
    pub max: Point,
}

/// Bounding rectangle of the polygon, or `None` for an empty one.
pub fn bounding_rect(points: &[Point]) -> Option<BoundingRect> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(BoundingRect { min, max })
}

/// Douglas-Peucker simplification of a cyclic polygon.
///
/// The ring is split at its two mutually farthest anchor points and each
/// open chain is simplified independently; points farther than `epsilon`
/// from the current chord survive.
pub fn simplify_polygon(points: &[Point], epsilon: f32) -> Polygon {
    if points.len() < 3 {
        return points.to_vec();
    }

    // Split anchor: the point farthest from the first one.
    let mut far = 0usize;
    let mut far_dist = 0.0f32;
    for (i, p) in points.iter().enumerate() {
        let d = points[0].distance(p);
        if d > far_dist {
            far_dist = d;
            far = i;
        }
    }
    if far == 0 {
        // All points coincide.
        return vec![points[0]];
    }

    let mut out = Vec::new();
    simplify_chain(&points[0..=far], epsilon, &mut out);
    out.pop();
    let mut back: Vec<Point> = points[far..].to_vec();
    back.push(points[0]);
    simplify_chain(&back, epsilon, &mut out);
    out.pop();
    out
}

/// Recursive Douglas-Peucker on an open chain; appends the simplified chain
/// including both endpoints to `out`.
fn simplify_chain(chain: &[Point], epsilon: f32, out: &mut Polygon) {
    debug_assert!(!chain.is_empty());
    if chain.len() <= 2 {
        out.extend_from_slice(chain);
        return;
    }
    let first = chain[0];
    let last = chain[chain.len() - 1];
    let mut far = 0usize;
    let mut far_dist = 0.0f32;
    for (i, p) in chain.iter().enumerate().skip(1).take(chain.len() - 2) {
        let d = perpendicular_distance(p, &first, &last);
        if d > far_dist {
            far_dist = d;
            far = i;
        }
    }
    if far_dist > epsilon && far > 0 {
        simplify_chain(&chain[0..=far], epsilon, out);
        out.pop();
        simplify_chain(&chain[far..], epsilon, out);
    } else {
        out.push(first);
        out.push(last);
    }
}

/// Distance from `p` to the segment `a`-`b`; collapses to point distance
/// when the segment is degenerate.
fn perpendicular_distance(p: &Point, a: &Point, b: &Point) -> f32 {
    let len = a.distance(b);
    if len <= f32::EPSILON {
        return p.distance(a);
    }
    let cross = (b.x - a.x) * (a.y - p.y) - (a.x - p.x) * (b.y - a.y);
    cross.abs() / len
}
