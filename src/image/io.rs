//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned linear f32 buffer.
//! - `save_rgb_f32`: write an `ImageRgbF32` to an 8-bit RGB PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgbF32;
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to RGB f32 in `[0, 1]`.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgbF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut out = ImageRgbF32::new(width, height);
    for (y, row) in img.rows().enumerate() {
        let dst = out.row_mut(y);
        for (x, px) in row.enumerate() {
            dst[x] = [
                px.0[0] as f32 / 255.0,
                px.0[1] as f32 / 255.0,
                px.0[2] as f32 / 255.0,
            ];
        }
    }
    Ok(out)
}

/// Save a float image to an RGB PNG, clamping values into the display range.
pub fn save_rgb_f32(image: &ImageRgbF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, px) in row.iter().enumerate() {
            let quantize = |v: f32| (v * 255.0).clamp(0.0, 255.0) as u8;
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([quantize(px[0]), quantize(px[1]), quantize(px[2])]),
            );
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
