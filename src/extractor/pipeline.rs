//! Extraction pipeline driving the multi-frame fusion end-to-end.
//!
//! [`ReceiptExtractor`] exposes a simple API: feed the decoded video frames
//! and get one composite receipt image back. Internally it coordinates
//! sharpness-based frame selection, glare-aware boundary detection, polygon
//! reduction, perspective rectification onto a shared canvas, content-band
//! discovery on a reference frame, and the per-section fusion contest.
//!
//! Typical usage:
//! ```no_run
//! use receipt_extractor::{ExtractorParams, Frame, ReceiptExtractor};
//!
//! # fn example(frames: Vec<Frame>) {
//! let extractor = ReceiptExtractor::new(ExtractorParams::default());
//! match extractor.extract_receipt(frames, false) {
//!     Ok(receipt) => println!("fused {}x{}", receipt.width(), receipt.height()),
//!     Err(err) => eprintln!("extraction failed: {err}"),
//! }
//! # }
//! ```
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use image::RgbImage;
use log::{debug, info};
use rayon::prelude::*;

use super::params::ExtractorParams;
use crate::diagnostics::{ExtractionReport, TimingBreakdown};
use crate::error::ExtractError;
use crate::fusion;
use crate::glare;
use crate::image::Frame;
use crate::rectify;
use crate::reduce;
use crate::sections;
use crate::select;
use crate::types::FusedReceipt;

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

/// Receipt extractor orchestrating frame selection, per-frame boundary
/// recovery and cross-frame row fusion. Stateless between calls; per-frame
/// work runs on the rayon pool.
pub struct ReceiptExtractor {
    params: ExtractorParams,
    cancel: Option<Arc<AtomicBool>>,
}

impl ReceiptExtractor {
    /// Create an extractor with the supplied parameters.
    pub fn new(params: ExtractorParams) -> Self {
        Self {
            params,
            cancel: None,
        }
    }

    /// Installs a cooperative cancellation flag. The flag is polled between
    /// frames, never mid pixel operation; a raised flag surfaces as
    /// [`ExtractError::Cancelled`].
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs the whole pipeline and returns the fused composite.
    pub fn extract_receipt(
        &self,
        frames: Vec<Frame>,
        detect_glare: bool,
    ) -> Result<FusedReceipt, ExtractError> {
        self.extract_receipt_with_report(frames, detect_glare)
            .map(|(receipt, _)| receipt)
    }

    /// Diagnostic variant returning the individual rectified candidates
    /// without fusion.
    pub fn extract_receipts(
        &self,
        frames: Vec<Frame>,
        detect_glare: bool,
    ) -> Result<Vec<RgbImage>, ExtractError> {
        let selected = self.select_frames(frames)?;
        let (candidates, dropped) = self.rectify_all(&selected, detect_glare)?;
        debug!(
            "rectification: {} candidates, {dropped} dropped",
            candidates.len()
        );
        if candidates.is_empty() {
            return Err(ExtractError::NoCandidates);
        }
        Ok(candidates)
    }

    /// Runs the whole pipeline, also returning the per-stage report.
    pub fn extract_receipt_with_report(
        &self,
        frames: Vec<Frame>,
        detect_glare: bool,
    ) -> Result<(FusedReceipt, ExtractionReport), ExtractError> {
        let total = Instant::now();
        let mut timings = TimingBreakdown::default();
        let frames_in = frames.len();

        let stage = Instant::now();
        let selected = self.select_frames(frames)?;
        timings.selection_ms = elapsed_ms(stage);
        let frames_selected = selected.len();

        let stage = Instant::now();
        let (candidates, frames_dropped) = self.rectify_all(&selected, detect_glare)?;
        timings.rectification_ms = elapsed_ms(stage);
        info!(
            "pipeline: {frames_in} frames in, {frames_selected} selected, {} rectified, {frames_dropped} dropped",
            candidates.len()
        );
        if candidates.is_empty() {
            return Err(ExtractError::NoCandidates);
        }

        // The first successful candidate fixes the section layout for the
        // whole run.
        let stage = Instant::now();
        let reference = Frame::new(candidates[0].clone());
        let section_list = sections::find_sections(&reference, &self.params.sections);
        timings.sectioning_ms = elapsed_ms(stage);
        if section_list.is_empty() {
            return Err(ExtractError::NoSections);
        }

        let stage = Instant::now();
        let winners = fusion::section_winners(&candidates, &section_list);
        let receipt = fusion::fuse_winners(&candidates, &section_list, &winners, &self.params.fusion)?;
        timings.fusion_ms = elapsed_ms(stage);
        timings.total_ms = elapsed_ms(total);

        let fused_slabs = 1 + winners.windows(2).filter(|w| w[0] != w[1]).count();
        let report = ExtractionReport {
            frames_in,
            frames_selected,
            frames_rectified: candidates.len(),
            frames_dropped,
            glare_handling: detect_glare,
            sections: section_list,
            section_winners: winners,
            fused_slabs,
            timings,
        };
        Ok((receipt, report))
    }

    /// Scales frames to the pixel cap, keeps the sharper half, normalizes
    /// the survivors to portrait orientation.
    fn select_frames(&self, frames: Vec<Frame>) -> Result<Vec<Frame>, ExtractError> {
        if frames.is_empty() {
            return Err(ExtractError::NoFrames);
        }
        if self.cancelled() {
            return Err(ExtractError::Cancelled);
        }
        let capped: Vec<Frame> = frames
            .into_iter()
            .map(|f| f.capped(self.params.frame_cap))
            .collect();
        let k = (capped.len() / 2).max(1);
        let kept = select::best_frames(capped, k);
        Ok(kept.into_iter().map(Frame::to_portrait).collect())
    }

    fn rectify_all(
        &self,
        frames: &[Frame],
        detect_glare: bool,
    ) -> Result<(Vec<RgbImage>, usize), ExtractError> {
        let results: Vec<Option<RgbImage>> = frames
            .par_iter()
            .map(|frame| {
                if self.cancelled() {
                    return None;
                }
                self.rectify_frame(frame, detect_glare)
            })
            .collect();
        if self.cancelled() {
            return Err(ExtractError::Cancelled);
        }
        let dropped = results.iter().filter(|r| r.is_none()).count();
        Ok((results.into_iter().flatten().collect(), dropped))
    }

    /// One frame through boundary recovery. `None` means the frame is
    /// dropped from the fusion pool; that is the only failure mode here.
    fn rectify_frame(&self, frame: &Frame, detect_glare: bool) -> Option<RgbImage> {
        let outcome = glare::refine(frame, detect_glare, &self.params.glare);
        let quad = reduce::to_quadrilateral(&outcome.polygon, &self.params.reduce)?;
        let source = outcome.cleaned.as_ref().unwrap_or(frame);
        rectify::rectify(source, &quad, &self.params.rectify)
    }
}
