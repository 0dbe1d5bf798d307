#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod image;
pub mod types;

// Stage modules. Public so tools and tests can drive stages in isolation,
// but considered unstable internals.
pub mod boundary;
pub mod contrast;
pub mod fusion;
pub mod geometry;
pub mod glare;
pub mod rectify;
pub mod reduce;
pub mod sections;
pub mod select;
pub mod sharpness;
pub mod vision;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::diagnostics::ExtractionReport;
pub use crate::error::ExtractError;
pub use crate::extractor::{ExtractorParams, ReceiptExtractor};
pub use crate::image::Frame;
pub use crate::types::{FusedReceipt, Point, Polygon, Quad};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::Frame;
    pub use crate::{ExtractError, ExtractorParams, FusedReceipt, ReceiptExtractor};
}
