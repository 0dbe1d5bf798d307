//! Canonical corner ordering and perspective rectification onto the shared
//! output canvas. All rectified frames share one canvas size so fusion can
//! compare them row for row.
use image::RgbImage;
use log::debug;

use crate::image::Frame;
use crate::reduce::{validate_corner_angles, DEFAULT_CORNER_SLACK_DEG};
use crate::types::{Point, Quad};
use crate::vision;

#[derive(Clone, Debug)]
pub struct RectifyParams {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Final corner-angle gate before warping. Coarse reduction hands over
    /// unvalidated quadrilaterals; this is where they are rejected.
    pub corner_slack_deg: f32,
}

impl Default for RectifyParams {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 1000,
            corner_slack_deg: DEFAULT_CORNER_SLACK_DEG,
        }
    }
}

/// Assigns corner roles. The two points with the smallest y become the top
/// edge, the other two the bottom edge, each pair split left/right by x.
pub fn order_corners(quad: &[Point; 4]) -> Quad {
    let mut pts = *quad;
    pts.sort_by(|p, q| p.y.total_cmp(&q.y));
    let (top_left, top_right) = if pts[0].x <= pts[1].x {
        (pts[0], pts[1])
    } else {
        (pts[1], pts[0])
    };
    let (bottom_left, bottom_right) = if pts[2].x <= pts[3].x {
        (pts[2], pts[3])
    } else {
        (pts[3], pts[2])
    };
    Quad {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    }
}

/// Warps the quadrilateral region of `frame` onto the output canvas with
/// cubic interpolation. Returns `None` for quadrilaterals failing the
/// corner gate or yielding a singular transform; callers treat that as the
/// frame contributing nothing.
pub fn rectify(frame: &Frame, quad: &[Point; 4], params: &RectifyParams) -> Option<RgbImage> {
    if !validate_corner_angles(quad, params.corner_slack_deg) {
        debug!("rectify: corner gate rejected quadrilateral {quad:?}");
        return None;
    }
    let ordered = order_corners(quad);
    let src = ordered.cyclic();
    let w = params.canvas_width as f32;
    let h = params.canvas_height as f32;
    let dst = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    let transform = vision::perspective_from_corners(&src, &dst)?;
    vision::warp_perspective(frame.image(), transform, params.canvas_width, params.canvas_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn corner_roles_are_recovered_from_any_order() {
        let tl = Point::new(12.0, 8.0);
        let tr = Point::new(140.0, 15.0);
        let br = Point::new(150.0, 290.0);
        let bl = Point::new(5.0, 280.0);
        let ordered = order_corners(&[br, tl, bl, tr]);
        assert_eq!(ordered.top_left, tl);
        assert_eq!(ordered.top_right, tr);
        assert_eq!(ordered.bottom_right, br);
        assert_eq!(ordered.bottom_left, bl);
    }

    #[test]
    fn sheared_quadrilateral_is_rejected() {
        let frame = Frame::new(RgbImage::new(100, 100));
        let quad = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(90.0, 40.0),
            Point::new(40.0, 40.0),
        ];
        assert!(rectify(&frame, &quad, &RectifyParams::default()).is_none());
    }

    #[test]
    fn axis_aligned_region_fills_the_canvas() {
        // Quad interior split into a red left half and a blue right half.
        let img = RgbImage::from_fn(200, 400, |x, y| {
            if (30..170).contains(&x) && (50..350).contains(&y) {
                if x < 100 {
                    Rgb([200, 0, 0])
                } else {
                    Rgb([0, 0, 200])
                }
            } else {
                Rgb([0, 0, 0])
            }
        });
        let frame = Frame::new(img);
        let quad = [
            Point::new(30.0, 50.0),
            Point::new(170.0, 50.0),
            Point::new(170.0, 350.0),
            Point::new(30.0, 350.0),
        ];
        let canvas = rectify(&frame, &quad, &RectifyParams::default()).expect("warp");
        assert_eq!((canvas.width(), canvas.height()), (500, 1000));
        // Sample deep inside each half to stay clear of interpolation
        // around the colour boundary.
        assert_eq!(canvas.get_pixel(125, 500), &Rgb([200, 0, 0]));
        assert_eq!(canvas.get_pixel(375, 500), &Rgb([0, 0, 200]));
    }
}
