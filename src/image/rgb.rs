//! Owned RGB f32 image in row-major layout (stride == width, in pixels).
//!
//! The working format of the whole pipeline. Values are linear and
//! un-clamped; HDR-range additive results are valid.
use crate::types::RgbF32;

#[derive(Clone, Debug, Default)]
pub struct ImageRgbF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<RgbF32>,
}

impl ImageRgbF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![[0.0; 3]; w * h],
        }
    }

    /// Re-dimension the buffer to `w × h` and clear it to black, keeping the
    /// existing allocation when it is large enough. Used by the buffer pool.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.stride = w;
        self.data.clear();
        self.data.resize(w * h, [0.0; 3]);
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> RgbF32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: RgbF32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[RgbF32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [RgbF32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Borrow as a read-only view (e.g. to feed the output of one pass back
    /// into another).
    pub fn as_view(&self) -> crate::image::RgbView<'_> {
        crate::image::RgbView {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Mean per-channel intensity over the whole buffer, for diagnostics.
    pub fn mean_intensity(&self) -> f32 {
        let denom = (self.w * self.h) as f32 * 3.0;
        if denom == 0.0 {
            return 0.0;
        }
        let sum: f32 = self
            .data
            .iter()
            .map(|px| px[0] + px[1] + px[2])
            .sum();
        sum / denom
    }
}
