//! Structured reporting for an extraction run, serializable for offline
//! inspection.
use serde::Serialize;

use crate::sections::Section;

#[derive(Clone, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub selection_ms: f64,
    pub rectification_ms: f64,
    pub sectioning_ms: f64,
    pub fusion_ms: f64,
    pub total_ms: f64,
}

/// Per-stage account of one extraction. `frames_dropped` counts frames that
/// survived selection but produced no valid quadrilateral; they contribute
/// nothing to fusion.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionReport {
    pub frames_in: usize,
    pub frames_selected: usize,
    pub frames_rectified: usize,
    pub frames_dropped: usize,
    pub glare_handling: bool,
    pub sections: Vec<Section>,
    /// Winning candidate index per section, in section order.
    pub section_winners: Vec<usize>,
    /// Slab count after merging consecutive same-winner sections.
    pub fused_slabs: usize,
    pub timings: TimingBreakdown,
}
