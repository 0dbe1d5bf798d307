//! Camera-flash glare handling ahead of boundary detection.
use crate::boundary;
use crate::geometry;
use crate::image::Frame;
use crate::types::Polygon;
use crate::vision;
use image::{GrayImage, Luma};
use log::debug;

/// Margins and simplification applied around a detected glare region.
///
/// The margins were fit to typical flash geometry: the bright spot bleeds
/// further upward than the strict probe reports, so the top margin is
/// larger.
#[derive(Clone, Debug)]
pub struct GlareParams {
    /// Expansion left of the glare bounding box (px).
    pub margin_left: f32,
    /// Expansion right of the glare bounding box (px).
    pub margin_right: f32,
    /// Expansion above the glare bounding box (px).
    pub margin_top: f32,
    /// Expansion below the glare bounding box (px).
    pub margin_bottom: f32,
    /// Epsilon for the post-cleanup polygon simplification that removes
    /// glare-induced extreme vertices.
    pub simplify_epsilon: f32,
}

impl Default for GlareParams {
    fn default() -> Self {
        Self {
            margin_left: 100.0,
            margin_right: 100.0,
            margin_top: 120.0,
            margin_bottom: 100.0,
            simplify_epsilon: 150.0,
        }
    }
}

/// Result of the glare pass: the boundary polygon, plus the content-filled
/// frame when glare handling actually ran. Rectification must warp the
/// cleaned frame, not the original.
#[derive(Clone, Debug)]
pub struct GlareOutcome {
    pub polygon: Polygon,
    pub cleaned: Option<Frame>,
}

/// Runs boundary detection with optional glare removal.
///
/// With `detect_glare` unset this is a pass-through to
/// [`boundary::find_bounding_polygon`]. Otherwise a strict inner probe
/// estimates the flash spot, the spot's expanded bounding box is masked and
/// content-filled, and detection re-runs on the cleaned frame. The probe is
/// a single fixed two-level recursion: it never triggers glare handling
/// itself.
pub fn refine(frame: &Frame, detect_glare: bool, params: &GlareParams) -> GlareOutcome {
    if !detect_glare {
        return GlareOutcome {
            polygon: boundary::find_bounding_polygon(frame, false),
            cleaned: None,
        };
    }

    let glare_polygon = boundary::find_bounding_polygon(frame, true);
    let mask = match geometry::bounding_rect(&glare_polygon) {
        Some(rect) => {
            let x_min = ((rect.min.x - params.margin_left).max(0.0)) as u32;
            let y_min = ((rect.min.y - params.margin_top).max(0.0)) as u32;
            let x_max = ((rect.max.x + params.margin_right) as u32).min(frame.width());
            let y_max = ((rect.max.y + params.margin_bottom) as u32).min(frame.height());
            debug!("glare: masking region x=[{x_min}, {x_max}) y=[{y_min}, {y_max})");
            GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
                if x >= x_min && x < x_max && y >= y_min && y < y_max {
                    Luma([255u8])
                } else {
                    Luma([0u8])
                }
            })
        }
        None => GrayImage::new(frame.width(), frame.height()),
    };

    let cleaned = Frame::new(vision::inpaint_region(frame.image(), &mask));
    let polygon = boundary::find_bounding_polygon(&cleaned, false);
    // Glare bends the outline into long spurious spurs; a coarse
    // simplification removes those extreme vertices before reduction.
    let polygon = geometry::simplify_polygon(&polygon, params.simplify_epsilon);

    GlareOutcome {
        polygon,
        cleaned: Some(cleaned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounding_rect;
    use crate::types::Point;
    use image::{Rgb, RgbImage};

    fn paper_with_glare() -> Frame {
        // 600×600 scene: paper at 230 on black, flash spot at 255 near the
        // centre. Numbers chosen so the relaxed threshold sits below the
        // paper while the doubled strict threshold isolates the flash.
        let img = RgbImage::from_fn(600, 600, |x, y| {
            if (290..310).contains(&x) && (290..310).contains(&y) {
                Rgb([255, 255, 255])
            } else if (88..513).contains(&x) && (88..513).contains(&y) {
                Rgb([230, 230, 230])
            } else {
                Rgb([0, 0, 0])
            }
        });
        Frame::new(img)
    }

    #[test]
    fn pass_through_without_glare_detection() {
        let frame = paper_with_glare();
        let outcome = refine(&frame, false, &GlareParams::default());
        assert!(outcome.cleaned.is_none());
        assert!(!outcome.polygon.is_empty());
    }

    #[test]
    fn glare_spot_is_filled_and_paper_recovered() {
        let frame = paper_with_glare();
        let outcome = refine(&frame, true, &GlareParams::default());

        let cleaned = outcome.cleaned.expect("glare pass must clean the frame");
        // The flash spot took on the surrounding paper intensity.
        assert_eq!(cleaned.image().get_pixel(300, 300), &Rgb([230, 230, 230]));

        let rect = bounding_rect(&outcome.polygon).expect("polygon");
        assert_eq!(rect.min, Point::new(88.0, 88.0));
        assert_eq!(rect.max, Point::new(512.0, 512.0));
        assert_eq!(outcome.polygon.len(), 4);
    }
}
