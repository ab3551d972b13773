#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bloom;
pub mod diagnostics;
pub mod image;
pub mod types;

// Stage modules – still public, but considered unstable internals.
pub mod compositor;
pub mod prefilter;
pub mod pyramid;

// --- High-level re-exports -------------------------------------------------

// Main entry points: renderer + configuration.
pub use crate::bloom::{BloomParams, BloomRenderer};
pub use crate::types::BloomStats;

// High-level diagnostics returned by the renderer.
pub use crate::diagnostics::{BloomReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bloom_post::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let pixels = vec![[0.0f32; 3]; w * h];
/// let source = RgbView { w, h, stride: w, data: &pixels };
///
/// let mut renderer = BloomRenderer::new(BloomParams::default());
/// let output = renderer.process(source);
/// println!("{}x{}", output.w, output.h);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgbF32, RgbView};
    pub use crate::{BloomParams, BloomRenderer, BloomStats};
}

// --- Stage-level diagnostics API (for tools & advanced users) --------------

pub mod stages {
    pub use crate::diagnostics::{
        CompositeStage, InputDescriptor, PrefilterStage, PyramidLevelReport, PyramidStage,
        StageTiming, TimingBreakdown,
    };
}
