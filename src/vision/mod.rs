//! Vision primitives backing the extraction pipeline.
//!
//! Thin, pure functions over `image`/`imageproc` buffers plus a few
//! primitives those crates do not provide (masked in-fill, perspective
//! estimation from four correspondences). Nothing in here holds state.

pub mod binarize;
pub mod contours;
pub mod gradient;
pub mod inpaint;
pub mod warp;

pub use binarize::{threshold_binary, to_gray};
pub use contours::largest_contour;
pub use gradient::{sobel_gradients, Gradients};
pub use inpaint::inpaint_region;
pub use warp::{perspective_from_corners, warp_perspective};
