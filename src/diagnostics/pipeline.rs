use crate::diagnostics::{PyramidStage, TimingBreakdown};
use crate::image::ImageRgbF32;
use crate::types::BloomStats;
use serde::Serialize;

/// Result produced by
/// [`BloomRenderer::process_with_diagnostics`](crate::BloomRenderer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomReport {
    pub stats: BloomStats,
    pub trace: PipelineTrace,
    /// Final image; not serialized, the demo saves it separately.
    #[serde(skip)]
    pub output: ImageRgbF32,
}

/// End-to-end trace describing the internal execution of the renderer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub prefilter: PrefilterStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pyramid: Option<PyramidStage>,
    pub composite: CompositeStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub iterations: usize,
}

/// Prefilter execution details, including the effective (clamped) curve.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefilterStage {
    pub elapsed_ms: f64,
    pub threshold: f32,
    pub soft_knee: f32,
    pub anti_flicker: bool,
    pub mean_response: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeStage {
    pub elapsed_ms: f64,
    pub filter_scale: f32,
}
