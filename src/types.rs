use serde::Serialize;

/// Linear RGB pixel. Alpha is implicit and ignored by the pipeline.
pub type RgbF32 = [f32; 3];

/// Compact summary of one bloom invocation.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomStats {
    pub width: usize,
    pub height: usize,
    /// Number of pyramid levels built for this frame.
    pub iterations: usize,
    pub latency_ms: f64,
}
