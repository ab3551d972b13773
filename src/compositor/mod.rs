//! Upsample-and-combine pass reconstructing the bloom layer.
//!
//! Walks the pyramid coarsest-to-finest: the running accumulation is
//! upsampled to the next finer level and summed with it (sum, not average —
//! the energy accumulation across scales is what makes bloom glow), then the
//! final accumulation is upsampled to source resolution and added onto the
//! original image. Every pool buffer is returned to the workspace before the
//! pass completes, on the degenerate paths included.

use crate::bloom::workspace::BloomWorkspace;
use crate::image::{ImageRgbF32, RgbView};
use crate::pyramid::{filters, BlurPyramid};

/// Which pool slot the running accumulation came from.
enum AccumSlot {
    Prefilter,
    Downsample(usize),
    Upsample(usize),
}

/// Combine the pyramid with the original source into the final image.
///
/// With an empty pyramid the prefiltered seed itself is tent-filtered at
/// source resolution and blended onto the source. The output always has the
/// source dimensions and is freshly allocated (caller-owned).
pub fn composite(
    source: &RgbView<'_>,
    prefiltered: ImageRgbF32,
    pyramid: BlurPyramid,
    filter_scale: f32,
    ws: &mut BloomWorkspace,
) -> ImageRgbF32 {
    let mut levels = pyramid.levels;
    let n = levels.len();

    let (mut accum, mut accum_slot) = match levels.pop() {
        Some(coarsest) => {
            ws.checkin_prefilter(prefiltered);
            (coarsest, AccumSlot::Downsample(n - 1))
        }
        None => (prefiltered, AccumSlot::Prefilter),
    };

    for level in (0..n.saturating_sub(1)).rev() {
        let base = levels.pop().expect("pyramid level available");
        let mut dst = ws.checkout_upsample(level, base.w, base.h);
        filters::upsample_tent_into(&accum, &mut dst, filter_scale);
        add_image_into(&mut dst, &base);
        ws.checkin_downsample(level, base);
        release(ws, accum, accum_slot);
        accum = dst;
        accum_slot = AccumSlot::Upsample(level);
    }

    let mut output = ImageRgbF32::new(source.w, source.h);
    filters::upsample_tent_into(&accum, &mut output, filter_scale);
    add_source_into(&mut output, source);
    release(ws, accum, accum_slot);
    output
}

fn release(ws: &mut BloomWorkspace, img: ImageRgbF32, slot: AccumSlot) {
    match slot {
        AccumSlot::Prefilter => ws.checkin_prefilter(img),
        AccumSlot::Downsample(level) => ws.checkin_downsample(level, img),
        AccumSlot::Upsample(level) => ws.checkin_upsample(level, img),
    }
}

/// `dst += other`, texel-wise.
fn add_image_into(dst: &mut ImageRgbF32, other: &ImageRgbF32) {
    debug_assert_eq!((dst.w, dst.h), (other.w, other.h));
    for y in 0..dst.h {
        let src_row = other.row(y);
        let dst_row = dst.row_mut(y);
        for (dst_px, src_px) in dst_row.iter_mut().zip(src_row) {
            dst_px[0] += src_px[0];
            dst_px[1] += src_px[1];
            dst_px[2] += src_px[2];
        }
    }
}

/// `dst += source`, texel-wise.
fn add_source_into(dst: &mut ImageRgbF32, source: &RgbView<'_>) {
    debug_assert_eq!((dst.w, dst.h), (source.w, source.h));
    for y in 0..dst.h {
        let src_row = source.row(y);
        let dst_row = dst.row_mut(y);
        for (dst_px, src_px) in dst_row.iter_mut().zip(src_row) {
            dst_px[0] += src_px[0];
            dst_px[1] += src_px[1];
            dst_px[2] += src_px[2];
        }
    }
}
