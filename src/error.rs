use thiserror::Error;

/// Fatal extraction failures surfaced to the caller.
///
/// Per-frame failures (boundary detection, polygon reduction, corner
/// validation) are absorbed inside the pipeline and only shrink the
/// candidate pool; these variants cover pool exhaustion and cancellation.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The frame source yielded zero frames.
    #[error("no frames supplied")]
    NoFrames,

    /// Every frame was dropped during boundary detection or validation.
    #[error("no frame produced a valid document boundary")]
    NoCandidates,

    /// The reference frame yielded zero content sections.
    #[error("reference frame produced no sections")]
    NoSections,

    /// The hosting application cancelled the extraction.
    #[error("extraction cancelled")]
    Cancelled,
}
