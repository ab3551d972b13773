//! Parameter types configuring the bloom pipeline.
//!
//! Out-of-range values are clamped at use rather than rejected, so any
//! `BloomParams` is valid. Defaults aim for a visible but restrained glow on
//! LDR-ish content.

use serde::{Deserialize, Serialize};

/// Per-invocation bloom configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomParams {
    /// Brightness cutoff for the prefilter. Clamped to `[1e-5, 1]` at use.
    pub threshold_brightness: f32,
    /// Width of the soft transition band around the cutoff, as a fraction of
    /// the threshold. Clamped to `[0, 1]` at use.
    pub soft_threshold_knee: f32,
    /// Extra downsample passes on top of the resolution-derived count.
    ///
    /// Higher values widen the blur at extra draw cost; the effective count
    /// is clamped to `[0, 16]`, so negative values are tolerated.
    pub extra_blur_iterations: i32,
    /// Upsample tent-filter footprint scale, typically in `[0, 3]`.
    /// 1.0 is the natural footprint; larger softens the reconstruction.
    pub upsample_filter_scale: f32,
    /// Normalize the prefilter response by brightness to stabilise the glow
    /// against small per-pixel changes across frames. When off, the
    /// prefilter is a hard step threshold.
    pub anti_flicker: bool,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            threshold_brightness: 0.8,
            soft_threshold_knee: 0.5,
            extra_blur_iterations: 0,
            upsample_filter_scale: 1.0,
            anti_flicker: true,
        }
    }
}

impl BloomParams {
    /// Valid brightness threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold_brightness.clamp(1e-5, 1.0)
    }

    /// Valid soft-knee fraction.
    pub fn soft_knee(&self) -> f32 {
        self.soft_threshold_knee.clamp(0.0, 1.0)
    }

    /// Valid upsample footprint scale.
    pub fn filter_scale(&self) -> f32 {
        self.upsample_filter_scale.max(0.0)
    }
}
