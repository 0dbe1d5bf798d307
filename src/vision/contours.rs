//! Foreground contour extraction over binary masks.
use crate::types::{Point, Polygon};
use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::point::Point as PixelPoint;

/// Extracts all foreground contours of a binary mask (non-zero pixels are
/// foreground) and returns the one with the largest enclosed area, or
/// `None` when no contour encloses a positive area.
pub fn largest_contour(binary: &GrayImage) -> Option<Polygon> {
    let contours = find_contours::<i32>(binary);

    let mut best: Option<&[PixelPoint<i32>]> = None;
    let mut best_area = 0.0f64;
    for contour in &contours {
        let area = contour_area(&contour.points);
        if area > best_area {
            best_area = area;
            best = Some(&contour.points);
        }
    }

    best.map(|points| {
        points
            .iter()
            .map(|p| Point::new(p.x as f32, p.y as f32))
            .collect()
    })
}

/// Shoelace area over integer contour points.
fn contour_area(points: &[PixelPoint<i32>]) -> f64 {
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
