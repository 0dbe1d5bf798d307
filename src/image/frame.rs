//! Immutable video frame with lazily computed quality scores.
use image::imageops::{self, FilterType};
use image::RgbImage;
use once_cell::sync::OnceCell;

/// One decoded video frame.
///
/// Frames are produced once from the source video and never mutated in
/// place; a stage that must alter pixels (rotation, glare in-fill) builds a
/// new `Frame`. The sharpness and contrast scores are computed on first use
/// and cached.
#[derive(Clone, Debug)]
pub struct Frame {
    image: RgbImage,
    sharpness: OnceCell<f64>,
    contrast: OnceCell<f64>,
}

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            sharpness: OnceCell::new(),
            contrast: OnceCell::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Tenengrad focus energy of the whole frame; higher is sharper.
    pub fn sharpness(&self) -> f64 {
        *self
            .sharpness
            .get_or_init(|| crate::sharpness::focus_energy_rgb(&self.image))
    }

    /// Normalized intensity spread `(max − min) / mean`, 0 for all-black.
    pub fn contrast(&self) -> f64 {
        *self
            .contrast
            .get_or_init(|| crate::contrast::contrast_of(&self.image))
    }

    /// Aspect-preserving downscale so that neither dimension exceeds `cap`.
    /// Frames already within the cap are returned unchanged.
    pub fn capped(self, cap: u32) -> Frame {
        let longest = self.width().max(self.height());
        if cap == 0 || longest <= cap {
            return self;
        }
        let factor = cap as f64 / longest as f64;
        let w = ((self.width() as f64 * factor).round() as u32).max(1);
        let h = ((self.height() as f64 * factor).round() as u32).max(1);
        Frame::new(imageops::resize(&self.image, w, h, FilterType::Triangle))
    }

    /// Rotate landscape frames 90° counter-clockwise into portrait
    /// orientation; portrait frames are returned unchanged.
    pub fn to_portrait(self) -> Frame {
        if self.width() > self.height() {
            Frame::new(imageops::rotate270(&self.image))
        } else {
            self
        }
    }
}

impl From<RgbImage> for Frame {
    fn from(image: RgbImage) -> Self {
        Frame::new(image)
    }
}
