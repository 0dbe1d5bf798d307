//! Owned single-channel f32 image in row-major layout.
//!
//! Backs the gradient math; intensities follow the 8-bit range [0, 255].
use image::{GrayImage, RgbImage};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Copy an 8-bit grayscale image into float intensities.
    pub fn from_gray(gray: &GrayImage) -> Self {
        let w = gray.width() as usize;
        let h = gray.height() as usize;
        let data = gray.as_raw().iter().map(|&v| v as f32).collect();
        Self { w, h, data }
    }

    /// Luma conversion of an RGB image into float intensities.
    pub fn from_rgb(rgb: &RgbImage) -> Self {
        let gray = image::imageops::grayscale(rgb);
        Self::from_gray(&gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut img = ImageF32::new(4, 3);
        img.set(2, 1, 7.5);
        assert_eq!(img.data[6], 7.5);
        assert_eq!(img.get(2, 1), 7.5);
    }

    #[test]
    fn gray_roundtrip_preserves_values() {
        let gray = GrayImage::from_fn(3, 2, |x, y| image::Luma([(x + 10 * y) as u8]));
        let img = ImageF32::from_gray(&gray);
        assert_eq!(img.get(2, 1), 12.0);
    }
}
