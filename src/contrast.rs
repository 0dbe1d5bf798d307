//! Normalized contrast metric and the threshold fits derived from it.
//!
//! Contrast is the spread of the per-pixel channel averages divided by
//! their mean. Two empirically fit maps turn it into binarization
//! thresholds: a negative-log fit for boundary detection and a linear fit
//! for section scanning. Both were fit against a specific camera/lighting
//! dataset; the coefficients are behavioural constants, not tunables.
use image::RgbImage;

/// Negative-log boundary fit, from the samples
/// (contrast, threshold) = (1.1, 240), (2.5, 100), (5, 0).
const BOUNDARY_FIT_SCALE: f64 = -157.763;
const BOUNDARY_FIT_INNER: f64 = 0.204531;

/// Linear section fit against the same sample library.
const SECTION_FIT_OFFSET: f64 = 368.439_203_281_436_7;
const SECTION_FIT_SLOPE: f64 = 186.283_019_260_496_9;

/// Normalized contrast of an image: `(max − min) / mean` over the
/// per-pixel channel averages, or 0 for an entirely black (or empty) image.
pub fn contrast_of(rgb: &RgbImage) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for px in rgb.pixels() {
        let avg = (px[0] as f64 + px[1] as f64 + px[2] as f64) / 3.0;
        min = min.min(avg);
        max = max.max(avg);
        sum += avg;
        count += 1;
    }
    if count == 0 || sum == 0.0 {
        return 0.0;
    }
    (max - min) / (sum / count as f64)
}

/// Binarization threshold for boundary detection,
/// `round(-157.763 · ln(0.204531 · contrast))`, clamped to the pixel range.
/// Non-positive contrast (all-black input) maps to 255, which blanks the
/// binary mask and lets the detector fall back to the full-frame rectangle.
pub fn boundary_threshold(contrast: f64) -> u8 {
    if contrast <= 0.0 {
        return u8::MAX;
    }
    let t = (BOUNDARY_FIT_SCALE * (BOUNDARY_FIT_INNER * contrast).ln()).round();
    t.clamp(0.0, 255.0) as u8
}

/// Binarization threshold for section scanning,
/// `368.4392032814367 − 186.2830192604969 · contrast`, clamped likewise.
pub fn section_threshold(contrast: f64) -> u8 {
    let t = (SECTION_FIT_OFFSET - SECTION_FIT_SLOPE * contrast).round();
    t.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn all_black_image_has_zero_contrast() {
        let img = RgbImage::new(16, 16);
        assert_eq!(contrast_of(&img), 0.0);
    }

    #[test]
    fn two_tone_contrast_value() {
        // Half 0, half 200: mean 100, spread 200 → contrast 2.0.
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                Rgb([0, 0, 0])
            } else {
                Rgb([200, 200, 200])
            }
        });
        assert!((contrast_of(&img) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn boundary_fit_is_pinned() {
        // Any change here is a behavioural regression, not a refactor.
        assert_eq!(boundary_threshold(2.0), 141);
        assert_eq!(boundary_threshold(1.1), 235);
        assert_eq!(boundary_threshold(5.0), 0);
        assert_eq!(boundary_threshold(0.0), 255);
        // Very high contrast clamps at zero instead of going negative.
        assert_eq!(boundary_threshold(50.0), 0);
    }

    #[test]
    fn section_fit_is_pinned() {
        assert_eq!(section_threshold(1.0), 182);
        assert_eq!(section_threshold(0.0), 255);
        assert_eq!(section_threshold(10.0), 0);
    }
}
