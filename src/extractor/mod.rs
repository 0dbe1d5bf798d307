//! High-level extraction pipeline: parameters and the driver.
mod params;
mod pipeline;

pub use params::ExtractorParams;
pub use pipeline::ReceiptExtractor;
