//! Brightness prefilter seeding the blur pyramid.
//!
//! Each pixel is scaled by a soft-threshold response of its max-channel
//! brightness. The response is zero below `threshold - knee`, a quadratic
//! ramp inside the `±knee` band and `brightness - threshold` above it, so the
//! bloom mask has no hard edge. With anti-flicker disabled the pass degrades
//! to a plain step threshold.

use crate::image::{ImageRgbF32, RgbView};
use crate::types::RgbF32;

/// Guards the divide-by-brightness normalization on black pixels.
const BRIGHTNESS_EPS: f32 = 1e-5;

/// Precomputed soft-knee threshold curve.
///
/// `knee = threshold * soft_knee + 1e-5`; the epsilon keeps the quadratic
/// coefficient finite when `soft_knee == 0`.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdCurve {
    threshold: f32,
    /// Lower edge of the transition band, `threshold - knee`.
    lower: f32,
    /// Band width, `2 * knee`.
    span: f32,
    /// Quadratic coefficient, `0.25 / knee`.
    scale: f32,
}

impl ThresholdCurve {
    /// Build the curve from already-clamped threshold and knee parameters.
    pub fn new(threshold: f32, soft_knee: f32) -> Self {
        let knee = threshold * soft_knee + 1e-5;
        Self {
            threshold,
            lower: threshold - knee,
            span: 2.0 * knee,
            scale: 0.25 / knee,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Soft-threshold response for brightness `b`. Monotonically
    /// non-decreasing in `b`.
    #[inline]
    pub fn response(&self, b: f32) -> f32 {
        let rq = (b - self.lower).clamp(0.0, self.span);
        let rq = self.scale * rq * rq;
        rq.max(b - self.threshold)
    }
}

/// Max-channel brightness of a pixel.
#[inline]
pub fn brightness(px: RgbF32) -> f32 {
    px[0].max(px[1]).max(px[2])
}

/// Apply the prefilter to `src`, writing the same-resolution seed into `dst`.
///
/// `anti_flicker` selects the normalized soft-knee response; without it each
/// pixel is either kept or zeroed by a hard threshold comparison.
pub fn apply_into(
    src: &RgbView<'_>,
    curve: &ThresholdCurve,
    anti_flicker: bool,
    dst: &mut ImageRgbF32,
) {
    debug_assert_eq!((src.w, src.h), (dst.w, dst.h));
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = dst.row_mut(y);
        for (dst_px, &px) in dst_row.iter_mut().zip(src_row) {
            let b = brightness(px);
            let factor = if anti_flicker {
                curve.response(b) / b.max(BRIGHTNESS_EPS)
            } else if b > curve.threshold() {
                1.0
            } else {
                0.0
            };
            *dst_px = [px[0] * factor, px[1] * factor, px[2] * factor];
        }
    }
}
