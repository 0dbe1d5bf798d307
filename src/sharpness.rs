//! Tenengrad focus energy.
//!
//! The mean of the squared Sobel gradient magnitude over the grayscale
//! image. Higher means sharper; a uniform (or empty) image scores 0.
use crate::image::ImageF32;
use crate::vision::sobel_gradients;
use image::RgbImage;

/// Focus energy of a grayscale float image.
pub fn focus_energy(gray: &ImageF32) -> f64 {
    let total = gray.w * gray.h;
    if total == 0 {
        return 0.0;
    }
    let grad = sobel_gradients(gray);
    let mut sum = 0.0f64;
    for (gx, gy) in grad.gx.data.iter().zip(grad.gy.data.iter()) {
        sum += (*gx as f64) * (*gx as f64) + (*gy as f64) * (*gy as f64);
    }
    sum / total as f64
}

/// Focus energy of an RGB image after luma conversion.
pub fn focus_energy_rgb(rgb: &RgbImage) -> f64 {
    focus_energy(&ImageF32::from_rgb(rgb))
}
