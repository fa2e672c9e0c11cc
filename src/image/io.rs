//! I/O helpers for binary rasters and JSON.
//!
//! - `load_binary_image`: read a PNG/JPEG/etc. and threshold its luma into a
//!   [`BinaryImage`].
//! - `save_debug_mask`: write a grayscale PNG showing claimed regions and
//!   traced boundary walks.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryImage, ImageView, FOREGROUND};
use crate::types::GridPoint;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const MASK_FOREGROUND: u8 = 48;
const MASK_CLAIMED: u8 = 96;
const MASK_BOUNDARY: u8 = 255;

/// Load an image from disk and threshold it to a binary raster.
///
/// A pixel is foreground when its luma is `>= threshold`, or `< threshold`
/// when `invert` is set (dark objects on a light background).
pub fn load_binary_image(path: &Path, threshold: u8, invert: bool) -> Result<BinaryImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| u8::from((v >= threshold) != invert))
        .collect();
    BinaryImage::from_raw(width, height, data)
        .ok_or_else(|| format!("Decoded buffer of {} has unexpected size", path.display()))
}

/// Save a debug mask: background black, unclaimed foreground dim, claimed
/// cells mid-gray and boundary walk cells white.
pub fn save_debug_mask<I>(
    image: &BinaryImage,
    marked: &HashSet<GridPoint>,
    boundary: I,
    path: &Path,
) -> Result<(), String>
where
    I: IntoIterator<Item = GridPoint>,
{
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let shade = if v != FOREGROUND {
                0
            } else if marked.contains(&GridPoint::new(y as i32, x as i32)) {
                MASK_CLAIMED
            } else {
                MASK_FOREGROUND
            };
            out.put_pixel(x as u32, y as u32, Luma([shade]));
        }
    }
    for p in boundary {
        if image.contains(p) {
            out.put_pixel(p.col as u32, p.row as u32, Luma([MASK_BOUNDARY]));
        }
    }
    out.save(path)
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
