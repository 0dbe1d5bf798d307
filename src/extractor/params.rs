//! Parameter types configuring the extraction stages.
//!
//! Most numeric defaults were fit against a fixed camera and lighting
//! dataset. They are documented constants of the system rather than knobs
//! to re-derive; the pinned unit tests treat any change as a behavioural
//! regression.

use crate::fusion::FusionParams;
use crate::glare::GlareParams;
use crate::rectify::RectifyParams;
use crate::reduce::ReduceParams;
use crate::sections::SectionParams;

/// Pipeline-wide parameters.
#[derive(Clone, Debug)]
pub struct ExtractorParams {
    /// Incoming frames are scaled down (aspect-preserving) until neither
    /// dimension exceeds this.
    pub frame_cap: u32,
    /// Glare probe margins and cleanup simplification.
    pub glare: GlareParams,
    /// Polygon-to-quadrilateral reduction schedule.
    pub reduce: ReduceParams,
    /// Canvas geometry and the final corner gate.
    pub rectify: RectifyParams,
    /// Content-band discovery on the reference frame.
    pub sections: SectionParams,
    /// Slab separator geometry.
    pub fusion: FusionParams,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            frame_cap: 1000,
            glare: GlareParams::default(),
            reduce: ReduceParams::default(),
            rectify: RectifyParams::default(),
            sections: SectionParams::default(),
            fusion: FusionParams::default(),
        }
    }
}
