//! Resolution-adaptive blur pyramid.
//!
//! The prefiltered seed is repeatedly halved (floor division, never below
//! 1×1) with a wide 13-tap low-pass kernel, producing a chain of
//! progressively smaller blurred levels. The chain length follows the source
//! width so higher resolutions get proportionally more passes; the hard cap
//! bounds worst-case memory and time. Level buffers are drawn from the
//! renderer's workspace pool and returned during compositing.

pub mod filters;

use crate::bloom::workspace::BloomWorkspace;
use crate::image::ImageRgbF32;

/// Hard cap on pyramid depth.
pub const MAX_ITERATIONS: usize = 16;

/// Number of downsample/blur passes for a given source resolution.
///
/// `clamp(floor(log2(width)) + extra - 8, 0, 16)`; a zero-area source yields
/// 0 (log2 of 0 is undefined) and bloom degenerates to a single
/// soft-threshold pass at source resolution.
pub fn iteration_count(width: usize, height: usize, extra_blur_iterations: i32) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    let base = width.ilog2() as i32;
    (base + extra_blur_iterations - 8).clamp(0, MAX_ITERATIONS as i32) as usize
}

/// Ordered chain of downsampled+blurred levels, coarsest last.
///
/// Transient: built and fully consumed within one renderer invocation.
#[derive(Debug, Default)]
pub struct BlurPyramid {
    pub levels: Vec<ImageRgbF32>,
}

impl BlurPyramid {
    /// Build `iterations` levels from the prefiltered seed, drawing buffers
    /// from the workspace pool. Level 0 is half the seed resolution; every
    /// further level halves its predecessor.
    pub fn build(seed: &ImageRgbF32, iterations: usize, ws: &mut BloomWorkspace) -> Self {
        let mut levels: Vec<ImageRgbF32> = Vec::with_capacity(iterations);
        for level in 0..iterations {
            let (pw, ph) = levels.last().map_or((seed.w, seed.h), |l| (l.w, l.h));
            let (nw, nh) = ((pw / 2).max(1), (ph / 2).max(1));
            let mut down = ws.checkout_downsample(level, nw, nh);
            filters::downsample_13tap_into(levels.last().unwrap_or(seed), &mut down);
            levels.push(down);
        }
        Self { levels }
    }
}
