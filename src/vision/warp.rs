//! Perspective transform estimation and application.
use crate::types::Point;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use nalgebra::{SMatrix, SVector};

/// Estimate the 3×3 perspective transform mapping `src[i]` onto `dst[i]`
/// for four point correspondences, in row-major order with `h33 = 1`.
///
/// Returns `None` when the correspondences are degenerate (three collinear
/// points make the 8×8 system singular).
pub fn perspective_from_corners(src: &[Point; 4], dst: &[Point; 4]) -> Option<[f32; 9]> {
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for i in 0..4 {
        let (x, y) = (src[i].x as f64, src[i].y as f64);
        let (u, v) = (dst[i].x as f64, dst[i].y as f64);
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -u * x;
        a[(r, 7)] = -u * y;
        b[r] = u;
        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -v * x;
        a[(r + 1, 7)] = -v * y;
        b[r + 1] = v;
    }

    let h = a.lu().solve(&b)?;
    if h.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some([
        h[0] as f32,
        h[1] as f32,
        h[2] as f32,
        h[3] as f32,
        h[4] as f32,
        h[5] as f32,
        h[6] as f32,
        h[7] as f32,
        1.0,
    ])
}

/// Warp `src` through `transform` (source → canvas coordinates) onto a
/// fresh canvas of the given size, sampling with cubic interpolation.
/// Unmapped canvas pixels stay white.
pub fn warp_perspective(
    src: &RgbImage,
    transform: [f32; 9],
    out_w: u32,
    out_h: u32,
) -> Option<RgbImage> {
    let projection = Projection::from_matrix(transform)?;
    let mut canvas = RgbImage::new(out_w, out_h);
    warp_into(
        src,
        &projection,
        Interpolation::Bicubic,
        Rgb([255, 255, 255]),
        &mut canvas,
    );
    Some(canvas)
}
