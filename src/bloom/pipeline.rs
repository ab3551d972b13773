//! Renderer driving the bloom pipeline end-to-end.
//!
//! The [`BloomRenderer`] exposes a simple API: feed an RGB image and get the
//! bloomed image back, optionally with per-stage diagnostics. Internally it
//! coordinates the soft-threshold prefilter, the blur pyramid and the
//! upsample-combine composite over a reusable buffer pool.
//!
//! One invocation is a single synchronous pass; the renderer keeps no state
//! between frames beyond its parameters and the pool, and `&mut self`
//! serializes concurrent use.
//!
//! Typical usage:
//! ```no_run
//! use bloom_post::{BloomParams, BloomRenderer};
//! use bloom_post::image::RgbView;
//!
//! # fn example(source: RgbView) {
//! let mut renderer = BloomRenderer::new(BloomParams::default());
//! let report = renderer.process_with_diagnostics(source);
//! println!("iterations={} latency_ms={:.3}", report.stats.iterations, report.stats.latency_ms);
//! # }
//! ```
use super::params::BloomParams;
use super::workspace::BloomWorkspace;
use crate::compositor;
use crate::diagnostics::{
    BloomReport, CompositeStage, InputDescriptor, PipelineTrace, PrefilterStage, PyramidStage,
    TimingBreakdown,
};
use crate::image::{ImageRgbF32, RgbView};
use crate::prefilter::{self, ThresholdCurve};
use crate::pyramid::{iteration_count, BlurPyramid};
use crate::types::BloomStats;
use log::debug;
use std::time::Instant;

/// Bloom renderer orchestrating prefilter, pyramid build and composite.
pub struct BloomRenderer {
    params: BloomParams,
    workspace: BloomWorkspace,
}

impl BloomRenderer {
    /// Create a renderer with the supplied parameters.
    pub fn new(params: BloomParams) -> Self {
        Self {
            params,
            workspace: BloomWorkspace::new(),
        }
    }

    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    /// Swap configuration between frames. The buffer pool is kept.
    pub fn set_params(&mut self, params: BloomParams) {
        self.params = params;
    }

    /// Run the pipeline on an RGB image, returning the bloomed image.
    pub fn process(&mut self, source: RgbView<'_>) -> ImageRgbF32 {
        self.process_with_diagnostics(source).output
    }

    /// Run the pipeline and return both the image and a detailed report.
    pub fn process_with_diagnostics(&mut self, source: RgbView<'_>) -> BloomReport {
        let (width, height) = (source.w, source.h);
        let iterations = iteration_count(width, height, self.params.extra_blur_iterations);
        debug!(
            "BloomRenderer::process start w={} h={} iterations={}",
            width, height, iterations
        );
        let total_start = Instant::now();

        let pre_start = Instant::now();
        let curve = ThresholdCurve::new(self.params.threshold(), self.params.soft_knee());
        let mut prefiltered = self.workspace.checkout_prefilter(width, height);
        prefilter::apply_into(&source, &curve, self.params.anti_flicker, &mut prefiltered);
        let prefilter_ms = pre_start.elapsed().as_secs_f64() * 1000.0;
        let mean_response = prefiltered.mean_intensity();

        let pyr_start = Instant::now();
        let pyramid = BlurPyramid::build(&prefiltered, iterations, &mut self.workspace);
        let pyramid_ms = pyr_start.elapsed().as_secs_f64() * 1000.0;
        let pyramid_stage = if pyramid.levels.is_empty() {
            None
        } else {
            Some(PyramidStage::from_pyramid(&pyramid, pyramid_ms))
        };

        let comp_start = Instant::now();
        let filter_scale = self.params.filter_scale();
        let output = compositor::composite(
            &source,
            prefiltered,
            pyramid,
            filter_scale,
            &mut self.workspace,
        );
        let composite_ms = comp_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let mut timings = TimingBreakdown::with_total(total_ms);
        timings.push("prefilter", prefilter_ms);
        timings.push("pyramid", pyramid_ms);
        timings.push("composite", composite_ms);
        debug!("BloomRenderer::process done total_ms={total_ms:.3}");

        BloomReport {
            stats: BloomStats {
                width,
                height,
                iterations,
                latency_ms: total_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width,
                    height,
                    iterations,
                },
                timings,
                prefilter: PrefilterStage {
                    elapsed_ms: prefilter_ms,
                    threshold: self.params.threshold(),
                    soft_knee: self.params.soft_knee(),
                    anti_flicker: self.params.anti_flicker,
                    mean_response,
                },
                pyramid: pyramid_stage,
                composite: CompositeStage {
                    elapsed_ms: composite_ms,
                    filter_scale,
                },
            },
            output,
        }
    }
}
