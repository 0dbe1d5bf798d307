use image::{Rgb, RgbImage};
use receipt_extractor::Frame;

// Paper region of the synthetic scene, in source pixel coordinates.
const PAPER_X: std::ops::Range<u32> = 50..350;
const PAPER_Y: std::ops::Range<u32> = 100..700;

const TEXT_X: std::ops::Range<u32> = 100..300;
const TOP_BAND: std::ops::Range<u32> = 250..280;
const BOTTOM_BAND: std::ops::Range<u32> = 450..480;

/// One handheld frame: a bright receipt on a dark table, carrying two text
/// bands. A sharp band is rendered as a high-frequency stripe pattern, a
/// blurred one as the flat mid-gray the stripes average to.
pub fn receipt_frame(sharp_top: bool, sharp_bottom: bool) -> Frame {
    let img = RgbImage::from_fn(400, 800, |x, y| {
        if !PAPER_X.contains(&x) || !PAPER_Y.contains(&y) {
            return Rgb([20, 20, 20]);
        }
        let band = if TOP_BAND.contains(&y) {
            Some(sharp_top)
        } else if BOTTOM_BAND.contains(&y) {
            Some(sharp_bottom)
        } else {
            None
        };
        match band {
            Some(_) if !TEXT_X.contains(&x) => Rgb([230, 230, 230]),
            // Stripe period wide enough to survive the bicubic resampling
            // of rectification with most of its amplitude.
            Some(true) => {
                if x % 8 < 4 {
                    Rgb([0, 0, 0])
                } else {
                    Rgb([230, 230, 230])
                }
            }
            Some(false) => Rgb([115, 115, 115]),
            None => Rgb([230, 230, 230]),
        }
    });
    Frame::new(img)
}

/// A video whose even frames are sharp in the top band and blurred in the
/// bottom band, odd frames the other way around. Fusion should take the top
/// band from an even frame and the bottom band from an odd one.
pub fn receipt_video(frames: usize) -> Vec<Frame> {
    (0..frames)
        .map(|i| receipt_frame(i % 2 == 0, i % 2 == 1))
        .collect()
}

pub fn black_video(frames: usize) -> Vec<Frame> {
    (0..frames)
        .map(|_| Frame::new(RgbImage::new(400, 800)))
        .collect()
}
