//! Horizontal content-band discovery on the reference rectified frame.
use log::debug;
use serde::Serialize;

use crate::contrast;
use crate::image::Frame;
use crate::vision;

#[derive(Clone, Debug)]
pub struct SectionParams {
    /// Mean binarized row intensity at or above which a row counts as
    /// whitespace.
    pub white_row_threshold: f32,
    /// Rows of whitespace required to close a band, also the expansion
    /// applied by [`Section::padded_range`].
    pub padding: u32,
    /// Bands shorter than this are noise and are discarded.
    pub min_height: u32,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            white_row_threshold: 250.0,
            padding: 8,
            min_height: 10,
        }
    }
}

/// One content band of the reference frame, a half-open row interval
/// `[start, stop)`. Sections are immutable once produced and strictly
/// increasing in `start`.
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    pub start: u32,
    pub stop: u32,
    padding: u32,
    source_height: u32,
}

impl Section {
    /// Row interval expanded by the padding on both ends, clamped to the
    /// source frame. Still half-open.
    pub fn padded_range(&self) -> (u32, u32) {
        (
            self.start.saturating_sub(self.padding),
            (self.stop + self.padding).min(self.source_height),
        )
    }

    pub fn height(&self) -> u32 {
        self.stop - self.start
    }
}

/// Scans the reference frame top to bottom for dark content bands separated
/// by at least `padding` rows of whitespace. A band only closes once a full
/// padding window of white rows follows it; shorter white gaps are absorbed
/// into the band. Bands below the minimum height are dropped.
pub fn find_sections(reference: &Frame, params: &SectionParams) -> Vec<Section> {
    let h = reference.height();
    let w = reference.width();
    if h == 0 || w == 0 {
        return Vec::new();
    }
    let frame_contrast = reference.contrast();
    if frame_contrast <= 0.0 {
        // A uniform frame has no content bands.
        return Vec::new();
    }

    let gray = vision::to_gray(reference.image());
    let binary = vision::threshold_binary(&gray, contrast::section_threshold(frame_contrast));
    let row_means: Vec<f32> = (0..h)
        .map(|y| {
            let sum: u64 = (0..w).map(|x| binary.get_pixel(x, y)[0] as u64).sum();
            sum as f32 / w as f32
        })
        .collect();
    let white = |y: u32| row_means[y as usize] >= params.white_row_threshold;

    let make = |start: u32, stop: u32| Section {
        start,
        stop,
        padding: params.padding,
        source_height: h,
    };

    let mut sections = Vec::new();
    let mut open: Option<u32> = None;
    let mut y = 0u32;
    while y < h {
        match open {
            None => {
                if !white(y) {
                    open = Some(y);
                }
                y += 1;
            }
            Some(start) => {
                if !white(y) {
                    y += 1;
                    continue;
                }
                let window_end = (y + params.padding).min(h);
                if (y..window_end).all(white) {
                    if y - start >= params.min_height {
                        sections.push(make(start, y));
                    }
                    open = None;
                    y = window_end;
                } else {
                    // White gap shorter than the padding window; the band
                    // continues through it.
                    y += 1;
                }
            }
        }
    }
    if let Some(start) = open {
        if h - start >= params.min_height {
            sections.push(make(start, h));
        }
    }

    debug!("sections: {} bands in reference frame", sections.len());
    sections
}
