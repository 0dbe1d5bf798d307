//! Reduction of detected boundary polygons to quadrilaterals.
//!
//! Two stages: a coarse pass re-runs Douglas-Peucker simplification with an
//! epsilon proportional to the perimeter, nudging the proportionality factor
//! until exactly four vertices survive. When the coarse pass keeps
//! oscillating around four, a structural pass cuts the ring at its two
//! off-square vertices and reassembles the larger half.
mod strategy;
mod validate;

pub use strategy::InclusionStrategy;
pub use validate::{validate_corner_angles, DEFAULT_CORNER_SLACK_DEG};

use std::cmp::Ordering;

use log::trace;

use crate::geometry::{corner_angle_deg, polygon_area, polygon_perimeter, simplify_polygon};
use crate::types::Point;

/// Knobs for [`to_quadrilateral`]. All defaults are pinned by tests.
#[derive(Clone, Debug)]
pub struct ReduceParams {
    /// Upper bound on coarse simplification attempts.
    pub max_attempts: u32,
    /// Initial epsilon as a fraction of the polygon perimeter.
    pub epsilon_factor_start: f32,
    /// Per-attempt adjustment of the epsilon fraction.
    pub epsilon_factor_step: f32,
    /// A vertex whose interior angle deviates from 90 degrees by more than
    /// this is a cut candidate for the structural pass.
    pub scan_tolerance_deg: f32,
    /// Corner validation slack for accepted quadrilaterals.
    pub corner_slack_deg: f32,
}

impl Default for ReduceParams {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            epsilon_factor_start: 0.50,
            epsilon_factor_step: 0.05,
            scan_tolerance_deg: 20.0,
            corner_slack_deg: DEFAULT_CORNER_SLACK_DEG,
        }
    }
}

/// Reduces an arbitrary boundary polygon to four cyclically ordered corner
/// points, or `None` when no acceptable quadrilateral exists. The coarse
/// result is returned unvalidated; rectification applies the corner-angle
/// gate before warping.
pub fn to_quadrilateral(polygon: &[Point], params: &ReduceParams) -> Option<[Point; 4]> {
    if polygon.len() < 4 {
        return None;
    }
    if let Ok(quad) = <[Point; 4]>::try_from(polygon) {
        return Some(quad);
    }

    let perimeter = polygon_perimeter(polygon);
    let mut factor = params.epsilon_factor_start;
    let mut oversized: Option<Vec<Point>> = None;
    for attempt in 0..params.max_attempts {
        if factor <= 0.0 || perimeter <= 0.0 {
            break;
        }
        let simplified = simplify_polygon(polygon, perimeter * factor);
        trace!(
            "reduce: attempt {attempt} factor {factor:.2} -> {} vertices",
            simplified.len()
        );
        match simplified.len().cmp(&4) {
            Ordering::Equal => {
                let mut quad = [Point::new(0.0, 0.0); 4];
                quad.copy_from_slice(&simplified);
                return Some(quad);
            }
            // Too many survivors: the epsilon was too tight.
            Ordering::Greater => {
                oversized = Some(simplified);
                factor += params.epsilon_factor_step;
            }
            Ordering::Less => factor -= params.epsilon_factor_step,
        }
    }

    match &oversized {
        Some(poly) => smart_reduce(poly, params),
        None => smart_reduce(polygon, params),
    }
}

/// Structural reduction: cut the ring at the first and last vertex whose
/// interior angle is off-square, keep the larger of the two arcs between the
/// cuts, and reattach the cut vertices under each [`InclusionStrategy`] in
/// turn until a validated quadrilateral appears.
fn smart_reduce(polygon: &[Point], params: &ReduceParams) -> Option<[Point; 4]> {
    let n = polygon.len();
    if n < 5 {
        return None;
    }

    let off_square = |i: usize| {
        let angle = corner_angle_deg(&polygon[i], &polygon[(i + n - 1) % n], &polygon[(i + 1) % n]);
        (angle - 90.0).abs() > params.scan_tolerance_deg
    };
    let a = (0..n).find(|&i| off_square(i))?;
    let b = (0..n).rev().find(|&i| off_square(i))?;

    if a == b {
        // A single protruding vertex; drop it and accept what remains.
        let reduced: Vec<Point> = polygon
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != a)
            .map(|(_, p)| *p)
            .collect();
        let quad = <[Point; 4]>::try_from(reduced).ok()?;
        return validate_corner_angles(&quad, params.corner_slack_deg).then_some(quad);
    }

    // Arcs strictly between the cut vertices; the cut vertices themselves
    // are excluded from the area comparison so neither arc double-counts
    // them.
    let inner: Vec<usize> = (a + 1..b).collect();
    let outer: Vec<usize> = (b + 1..n).chain(0..a).collect();
    let arc_area = |arc: &[usize]| {
        let pts: Vec<Point> = arc.iter().map(|&i| polygon[i]).collect();
        polygon_area(&pts)
    };
    let arc = if arc_area(&inner) > arc_area(&outer) {
        inner
    } else {
        outer
    };

    for strategy in InclusionStrategy::ALL {
        let indices = strategy.apply(&arc, a, b);
        if indices.len() != 4 {
            continue;
        }
        let quad = [
            polygon[indices[0]],
            polygon[indices[1]],
            polygon[indices[2]],
            polygon[indices[3]],
        ];
        if validate_corner_angles(&quad, params.corner_slack_deg) {
            trace!("reduce: {strategy:?} accepted");
            return Some(quad);
        }
    }
    None
}
