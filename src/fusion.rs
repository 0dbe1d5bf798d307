//! Cross-frame row fusion: per-section sharpness contest, adjacency merge,
//! and final vertical assembly.
use image::{imageops, Rgb, RgbImage};
use log::debug;
use rayon::prelude::*;

use crate::error::ExtractError;
use crate::image::ImageF32;
use crate::sections::Section;
use crate::sharpness;

#[derive(Clone, Debug)]
pub struct FusionParams {
    /// Height of the solid white separator inserted between slabs.
    pub strip_height: u32,
}

impl Default for FusionParams {
    fn default() -> Self {
        Self { strip_height: 20 }
    }
}

/// For each section, the index of the rectified frame whose padded row band
/// scores the highest focus energy. Ties go to the earliest frame. Scoring
/// is independent per section and runs in parallel.
pub fn section_winners(frames: &[RgbImage], sections: &[Section]) -> Vec<usize> {
    sections
        .par_iter()
        .map(|section| {
            let (top, bottom) = section.padded_range();
            let mut best = 0usize;
            let mut best_score = f64::NEG_INFINITY;
            for (index, frame) in frames.iter().enumerate() {
                let band = imageops::crop_imm(frame, 0, top, frame.width(), bottom - top);
                let score = sharpness::focus_energy(&ImageF32::from_rgb(&band.to_image()));
                if score > best_score {
                    best_score = score;
                    best = index;
                }
            }
            best
        })
        .collect()
}

/// A contiguous padded row range taken from one source frame.
struct Slab {
    frame: usize,
    top: u32,
    bottom: u32,
}

/// Fuses the rectified candidates into one composite. Consecutive sections
/// won by the same frame collapse into a single slab re-extracted fresh
/// from that frame, so no seam appears at the internal boundary; distinct
/// winners are separated by a white strip.
pub fn fuse(
    frames: &[RgbImage],
    sections: &[Section],
    params: &FusionParams,
) -> Result<RgbImage, ExtractError> {
    if frames.is_empty() {
        return Err(ExtractError::NoCandidates);
    }
    if sections.is_empty() {
        return Err(ExtractError::NoSections);
    }
    let winners = section_winners(frames, sections);
    fuse_winners(frames, sections, &winners, params)
}

/// Assembly half of [`fuse`], for callers that already hold the winner
/// list.
pub fn fuse_winners(
    frames: &[RgbImage],
    sections: &[Section],
    winners: &[usize],
    params: &FusionParams,
) -> Result<RgbImage, ExtractError> {
    if frames.is_empty() {
        return Err(ExtractError::NoCandidates);
    }
    if sections.is_empty() {
        return Err(ExtractError::NoSections);
    }
    debug!("fusion: winners per section {winners:?}");

    let mut slabs: Vec<Slab> = Vec::new();
    for (section, &winner) in sections.iter().zip(winners) {
        let (top, bottom) = section.padded_range();
        match slabs.last_mut() {
            Some(last) if last.frame == winner => last.bottom = bottom,
            _ => slabs.push(Slab {
                frame: winner,
                top,
                bottom,
            }),
        }
    }

    let width = frames[0].width();
    let slab_rows: u32 = slabs.iter().map(|s| s.bottom - s.top).sum();
    let total_height = slab_rows + params.strip_height * (slabs.len() as u32 - 1);
    let mut out = RgbImage::from_pixel(width, total_height, Rgb([255, 255, 255]));

    let mut y = 0u32;
    for (i, slab) in slabs.iter().enumerate() {
        let band = imageops::crop_imm(
            &frames[slab.frame],
            0,
            slab.top,
            width,
            slab.bottom - slab.top,
        )
        .to_image();
        imageops::replace(&mut out, &band, 0, y as i64);
        y += slab.bottom - slab.top;
        if i + 1 < slabs.len() {
            // The separator rows are already white in the canvas.
            y += params.strip_height;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Frame;
    use crate::sections::{find_sections, SectionParams};

    const BAND_A: (u32, u32) = (100, 130);
    const BAND_B: (u32, u32) = (300, 340);

    fn reference_sections() -> Vec<Section> {
        let img = RgbImage::from_fn(500, 1000, |x, y| {
            let in_band = |(a, b): (u32, u32)| (a..b).contains(&y) && (100..400).contains(&x);
            if in_band(BAND_A) || in_band(BAND_B) {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let sections = find_sections(&Frame::new(img), &SectionParams::default());
        assert_eq!(sections.len(), 2);
        sections
    }

    /// Rectified candidate with high-frequency texture over the chosen
    /// bands and flat gray elsewhere.
    fn candidate(sharp_bands: &[(u32, u32)]) -> RgbImage {
        RgbImage::from_fn(500, 1000, |x, y| {
            let sharp = sharp_bands.iter().any(|&(a, b)| (a..b).contains(&y));
            if sharp && x % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([200, 200, 200])
            }
        })
    }

    #[test]
    fn each_section_goes_to_the_sharpest_frame() {
        let sections = reference_sections();
        let frames = vec![candidate(&[BAND_A]), candidate(&[BAND_B])];
        assert_eq!(section_winners(&frames, &sections), vec![0, 1]);
    }

    #[test]
    fn winner_content_is_invariant_under_frame_permutation() {
        let sections = reference_sections();
        let a = candidate(&[BAND_A]);
        let b = candidate(&[BAND_B]);
        let params = FusionParams::default();
        let fused_ab = fuse(&[a.clone(), b.clone()], &sections, &params).unwrap();
        let fused_ba = fuse(&[b, a], &sections, &params).unwrap();
        assert_eq!(fused_ab, fused_ba);
    }

    #[test]
    fn distinct_winners_are_separated_by_a_white_strip() {
        let sections = reference_sections();
        let frames = vec![candidate(&[BAND_A]), candidate(&[BAND_B])];
        let fused = fuse(&frames, &sections, &FusionParams::default()).unwrap();
        // Padded slabs are rows [92, 138) and [292, 348) of the canvas.
        assert_eq!(fused.height(), 46 + 20 + 56);
        for y in 46..66 {
            assert_eq!(fused.get_pixel(250, y), &Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn same_winner_sections_merge_without_a_seam() {
        let sections = reference_sections();
        // Frame 0 is sharper everywhere, so it wins both sections.
        let frames = vec![candidate(&[(0, 1000)]), candidate(&[])];
        let fused = fuse(&frames, &sections, &FusionParams::default()).unwrap();
        // One slab spanning rows [92, 348) of frame 0, no separator.
        assert_eq!(fused.height(), 348 - 92);
        assert_eq!(fused, imageops::crop_imm(&frames[0], 0, 92, 500, 256).to_image());
    }

    #[test]
    fn ties_go_to_the_earliest_frame() {
        let sections = reference_sections();
        let frames = vec![candidate(&[]), candidate(&[])];
        assert_eq!(section_winners(&frames, &sections), vec![0, 0]);
    }

    #[test]
    fn empty_inputs_are_distinct_failures() {
        let sections = reference_sections();
        let frames = vec![candidate(&[])];
        assert!(matches!(
            fuse(&[], &sections, &FusionParams::default()),
            Err(ExtractError::NoCandidates)
        ));
        assert!(matches!(
            fuse(&frames, &[], &FusionParams::default()),
            Err(ExtractError::NoSections)
        ));
    }
}
