//! Sampling kernels used to build and reconstruct the pyramid.
//!
//! Both filters address the source through bilinear taps with clamp-to-edge
//! borders, mirroring the sampler behavior the original screen-space effect
//! relied on. Tap offsets are expressed in source texels around the mapped
//! destination position.

use crate::image::ImageRgbF32;
use crate::types::RgbF32;

/// 13-tap downsample kernel: a half-weight inner 2×2 box plus four
/// overlapping outer 2×2 boxes. Offsets are (dx, dy, weight); weights sum
/// to 1 so uniform regions keep their intensity.
const DOWNSAMPLE_TAPS: [(f32, f32, f32); 13] = [
    (-1.0, -1.0, 0.125),
    (1.0, -1.0, 0.125),
    (-1.0, 1.0, 0.125),
    (1.0, 1.0, 0.125),
    (-2.0, -2.0, 0.03125),
    (0.0, -2.0, 0.0625),
    (2.0, -2.0, 0.03125),
    (-2.0, 0.0, 0.0625),
    (0.0, 0.0, 0.125),
    (2.0, 0.0, 0.0625),
    (-2.0, 2.0, 0.03125),
    (0.0, 2.0, 0.0625),
    (2.0, 2.0, 0.03125),
];

/// Bilinear sample at pixel-space coordinates, clamping to the extents.
#[inline]
fn sample_bilinear(img: &ImageRgbF32, x: f32, y: f32) -> RgbF32 {
    let fx = x.clamp(0.0, (img.w - 1) as f32);
    let fy = y.clamp(0.0, (img.h - 1) as f32);
    let x0 = fx as usize;
    let y0 = fy as usize;
    let x1 = (x0 + 1).min(img.w - 1);
    let y1 = (y0 + 1).min(img.h - 1);
    let tx = fx - x0 as f32;
    let ty = fy - y0 as f32;
    let row0 = img.row(y0);
    let row1 = img.row(y1);
    let mut out = [0.0f32; 3];
    for c in 0..3 {
        let top = row0[x0][c] + tx * (row0[x1][c] - row0[x0][c]);
        let bot = row1[x0][c] + tx * (row1[x1][c] - row1[x0][c]);
        out[c] = top + ty * (bot - top);
    }
    out
}

/// Downsample `src` into `dst` with the wide 13-tap low-pass kernel.
///
/// Each destination pixel maps to its footprint center in `src`; taps land on
/// the surrounding 6×6 texel neighborhood through bilinear lookups.
pub fn downsample_13tap_into(src: &ImageRgbF32, dst: &mut ImageRgbF32) {
    if src.w == 0 || src.h == 0 || dst.w == 0 || dst.h == 0 {
        return;
    }
    let scale_x = src.w as f32 / dst.w as f32;
    let scale_y = src.h as f32 / dst.h as f32;
    for y in 0..dst.h {
        let sy = (y as f32 + 0.5) * scale_y - 0.5;
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let sx = (x as f32 + 0.5) * scale_x - 0.5;
            let mut acc = [0.0f32; 3];
            for &(dx, dy, weight) in &DOWNSAMPLE_TAPS {
                let s = sample_bilinear(src, sx + dx, sy + dy);
                acc[0] += weight * s[0];
                acc[1] += weight * s[1];
                acc[2] += weight * s[2];
            }
            *dst_px = acc;
        }
    }
}

/// Upsample `src` into `dst` with a 4-tap tent filter.
///
/// Taps sit at `±0.5 * filter_scale` source texels around the mapped
/// position and are averaged; a scale above 1 widens the footprint and
/// softens the reconstruction. `src` and `dst` may share dimensions, in
/// which case this is a plain tent blur.
pub fn upsample_tent_into(src: &ImageRgbF32, dst: &mut ImageRgbF32, filter_scale: f32) {
    if src.w == 0 || src.h == 0 || dst.w == 0 || dst.h == 0 {
        return;
    }
    let scale_x = src.w as f32 / dst.w as f32;
    let scale_y = src.h as f32 / dst.h as f32;
    let d = 0.5 * filter_scale;
    for y in 0..dst.h {
        let sy = (y as f32 + 0.5) * scale_y - 0.5;
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let sx = (x as f32 + 0.5) * scale_x - 0.5;
            let s0 = sample_bilinear(src, sx - d, sy - d);
            let s1 = sample_bilinear(src, sx + d, sy - d);
            let s2 = sample_bilinear(src, sx - d, sy + d);
            let s3 = sample_bilinear(src, sx + d, sy + d);
            let mut acc = [0.0f32; 3];
            for c in 0..3 {
                acc[c] = (s0[c] + s1[c] + s2[c] + s3[c]) * 0.25;
            }
            *dst_px = acc;
        }
    }
}
