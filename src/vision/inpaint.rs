//! Content-aware in-fill over a masked region.
//!
//! Onion-peel fill: each pass replaces every still-unknown pixel that
//! touches a known pixel with the average of its known 8-neighbours, then
//! marks it known. The region fills from its boundary inward, so the
//! erased area takes on the colours that surround it. Deterministic, since
//! every pass reads only the previous pass's state.
use image::{GrayImage, Rgb, RgbImage};

/// Fill all pixels where `mask` is non-zero using surrounding content.
/// The input image is untouched; a filled copy is returned. A fully masked
/// image has no known content to propagate and is returned as-is.
pub fn inpaint_region(image: &RgbImage, mask: &GrayImage) -> RgbImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    debug_assert_eq!((mask.width(), mask.height()), (image.width(), image.height()));

    let mut out = image.clone();
    let mut known: Vec<bool> = mask.as_raw().iter().map(|&m| m == 0).collect();
    if known.iter().all(|&k| k) || known.iter().all(|&k| !k) {
        return out;
    }

    let mut remaining: usize = known.iter().filter(|&&k| !k).count();
    while remaining > 0 {
        let snapshot = out.clone();
        let mut filled_this_pass = Vec::new();

        for y in 0..h {
            for x in 0..w {
                if known[y * w + x] {
                    continue;
                }
                let mut sum = [0.0f64; 3];
                let mut count = 0usize;
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                            continue;
                        }
                        if !known[ny as usize * w + nx as usize] {
                            continue;
                        }
                        let px = snapshot.get_pixel(nx as u32, ny as u32);
                        for c in 0..3 {
                            sum[c] += px[c] as f64;
                        }
                        count += 1;
                    }
                }
                if count == 0 {
                    continue;
                }
                let filled = Rgb([
                    (sum[0] / count as f64).round() as u8,
                    (sum[1] / count as f64).round() as u8,
                    (sum[2] / count as f64).round() as u8,
                ]);
                out.put_pixel(x as u32, y as u32, filled);
                filled_this_pass.push(y * w + x);
            }
        }

        if filled_this_pass.is_empty() {
            break;
        }
        remaining -= filled_this_pass.len();
        for idx in filled_this_pass {
            known[idx] = true;
        }
    }

    out
}
