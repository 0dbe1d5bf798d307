//! Document boundary detection on a single frame.
use crate::image::Frame;
use crate::types::{Point, Polygon};
use crate::{contrast, vision};
use log::debug;

/// Finds the polygon enclosing the biggest foreground object in the frame.
///
/// The frame is binarized at the contrast-derived threshold (doubled in
/// `strict` mode, which the glare probe uses to isolate the flash spot) and
/// the largest foreground contour is returned. When no contour encloses a
/// positive area the image is assumed to be already framed and the
/// full-frame rectangle is returned instead; the output is an
/// arbitrary-length polygon, not yet a quadrilateral.
pub fn find_bounding_polygon(frame: &Frame, strict: bool) -> Polygon {
    let gray = vision::to_gray(frame.image());
    let mut thresh = contrast::boundary_threshold(frame.contrast());
    if strict {
        thresh = thresh.saturating_mul(2);
    }
    debug!("boundary: finding contours with threshold value {thresh} [strict={strict}]");

    let binary = vision::threshold_binary(&gray, thresh);
    match vision::largest_contour(&binary) {
        Some(contour) => contour,
        None => {
            debug!("boundary: no contour found, frame is already bounded");
            full_frame_polygon(frame.width(), frame.height())
        }
    }
}

/// Degenerate fallback polygon spanning the whole frame.
pub fn full_frame_polygon(width: u32, height: u32) -> Polygon {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width as f32, 0.0),
        Point::new(width as f32, height as f32),
        Point::new(0.0, height as f32),
    ]
}
