//! Grayscale conversion and binary thresholding.
use image::{GrayImage, Luma, RgbImage};

/// Luma grayscale conversion.
pub fn to_gray(rgb: &RgbImage) -> GrayImage {
    image::imageops::grayscale(rgb)
}

/// Binary threshold: pixels strictly above `thresh` become 255, the rest 0.
pub fn threshold_binary(gray: &GrayImage, thresh: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > thresh {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater() {
        let gray = GrayImage::from_fn(3, 1, |x, _| Luma([(x as u8) * 100]));
        let binary = threshold_binary(&gray, 100);
        assert_eq!(binary.get_pixel(0, 0)[0], 0);
        assert_eq!(binary.get_pixel(1, 0)[0], 0); // 100 is not > 100
        assert_eq!(binary.get_pixel(2, 0)[0], 255);
    }

    #[test]
    fn threshold_255_blanks_everything() {
        let gray = GrayImage::from_pixel(4, 4, Luma([255u8]));
        let binary = threshold_binary(&gray, 255);
        assert!(binary.pixels().all(|p| p[0] == 0));
    }
}
