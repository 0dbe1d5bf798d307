//! Sharpness-ranked frame selection.
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::debug;
use rayon::prelude::*;

use crate::image::Frame;

#[derive(Debug)]
struct Scored {
    score: f64,
    index: usize,
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    // Score ascending; among equal scores the earlier frame ranks higher,
    // which keeps the selection stable.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Keeps the `k` sharpest frames, in their original order. Returns exactly
/// `min(k, frames.len())` frames. Scoring runs across frames in parallel;
/// the retained set is found with a bounded min-heap rather than a full
/// sort.
pub fn best_frames(frames: Vec<Frame>, k: usize) -> Vec<Frame> {
    if k == 0 || frames.is_empty() {
        return Vec::new();
    }
    if k >= frames.len() {
        return frames;
    }

    let scores: Vec<f64> = frames.par_iter().map(|f| f.sharpness()).collect();
    let mut heap: BinaryHeap<Reverse<Scored>> = BinaryHeap::with_capacity(k + 1);
    for (index, &score) in scores.iter().enumerate() {
        heap.push(Reverse(Scored { score, index }));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut kept: Vec<usize> = heap.into_iter().map(|Reverse(s)| s.index).collect();
    kept.sort_unstable();
    debug!("selection: kept {kept:?} of {} frames", frames.len());

    let mut kept_iter = kept.into_iter().peekable();
    frames
        .into_iter()
        .enumerate()
        .filter_map(move |(i, frame)| {
            if kept_iter.peek() == Some(&i) {
                kept_iter.next();
                Some(frame)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Sharpness grows with stripe count.
    fn striped_frame(stripes: u32) -> Frame {
        let img = RgbImage::from_fn(64, 64, |x, _| {
            if stripes > 0 && (x * stripes / 64) % 2 == 1 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        Frame::new(img)
    }

    #[test]
    fn keeps_the_sharpest_in_original_order() {
        let counts = [0u32, 16, 4, 32, 8];
        let frames: Vec<Frame> = counts.iter().map(|&c| striped_frame(c)).collect();
        let kept = best_frames(frames, 2);
        assert_eq!(kept.len(), 2);
        // Stripe counts 16 and 32 win, and index order survives selection.
        let expected = [striped_frame(16), striped_frame(32)];
        for (got, want) in kept.iter().zip(&expected) {
            assert_eq!(got.image(), want.image());
        }
    }

    #[test]
    fn kept_frames_outscore_dropped_frames() {
        let counts = [2u32, 10, 6, 0, 14, 4];
        let frames: Vec<Frame> = counts.iter().map(|&c| striped_frame(c)).collect();
        let all_scores: Vec<f64> = counts.iter().map(|&c| striped_frame(c).sharpness()).collect();
        let kept = best_frames(frames, 3);
        let floor = kept
            .iter()
            .map(|f| f.sharpness())
            .fold(f64::INFINITY, f64::min);
        let dropped_max = {
            let mut scores = all_scores.clone();
            scores.sort_by(f64::total_cmp);
            scores[counts.len() - 3 - 1]
        };
        assert!(floor >= dropped_max);
    }

    #[test]
    fn short_input_is_returned_whole() {
        let frames: Vec<Frame> = (0..3).map(|c| striped_frame(c * 4)).collect();
        assert_eq!(best_frames(frames, 10).len(), 3);
    }

    #[test]
    fn zero_k_yields_nothing() {
        let frames = vec![striped_frame(8)];
        assert!(best_frames(frames, 0).is_empty());
    }
}
