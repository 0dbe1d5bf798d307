//! I/O helpers for frames and JSON reports.
//!
//! - `load_frame`: read a PNG/JPEG/etc. into a [`Frame`].
//! - `save_rgb`: write an RGB buffer to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Frame;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as an RGB frame.
pub fn load_frame(path: &Path) -> Result<Frame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    Ok(Frame::new(img))
}

/// Save an RGB buffer to disk, creating parent directories.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
