use crate::pyramid::BlurPyramid;
use serde::{Deserialize, Serialize};

/// Statistics for a single level of the blur pyramid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidLevelReport {
    pub level_index: usize,
    pub width: usize,
    pub height: usize,
    pub mean_intensity: f32,
}

/// Pyramid construction details captured by the renderer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidStage {
    pub elapsed_ms: f64,
    pub levels: Vec<PyramidLevelReport>,
}

impl PyramidStage {
    pub fn from_pyramid(pyramid: &BlurPyramid, elapsed_ms: f64) -> Self {
        let levels = pyramid
            .levels
            .iter()
            .enumerate()
            .map(|(level, lvl)| PyramidLevelReport {
                level_index: level,
                width: lvl.w,
                height: lvl.h,
                mean_intensity: lvl.mean_intensity(),
            })
            .collect();
        Self { elapsed_ms, levels }
    }
}
