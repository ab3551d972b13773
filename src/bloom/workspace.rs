//! Reusable image-buffer pool amortising allocations across frames.
//!
//! The pool holds one slot per pyramid level in two banks (downsample chain
//! and upsample accumulators) plus the prefilter seed, matching the hard
//! iteration cap. Buffers are checked out at build time and must be checked
//! back in before the invocation returns; a buffer left in a slot keeps its
//! allocation for the next frame.

use crate::image::ImageRgbF32;
use crate::pyramid::MAX_ITERATIONS;

/// Buffer pool owned by a single renderer instance.
pub struct BloomWorkspace {
    downsample: Vec<Option<ImageRgbF32>>,
    upsample: Vec<Option<ImageRgbF32>>,
    prefilter: Option<ImageRgbF32>,
}

impl BloomWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the prefilter seed buffer, re-dimensioned to `w × h` and cleared.
    pub fn checkout_prefilter(&mut self, w: usize, h: usize) -> ImageRgbF32 {
        checkout(&mut self.prefilter, w, h)
    }

    pub fn checkin_prefilter(&mut self, img: ImageRgbF32) {
        self.prefilter = Some(img);
    }

    /// Take the downsample-bank buffer for `level`.
    pub fn checkout_downsample(&mut self, level: usize, w: usize, h: usize) -> ImageRgbF32 {
        checkout(&mut self.downsample[level], w, h)
    }

    pub fn checkin_downsample(&mut self, level: usize, img: ImageRgbF32) {
        self.downsample[level] = Some(img);
    }

    /// Take the upsample-bank buffer for `level`.
    pub fn checkout_upsample(&mut self, level: usize, w: usize, h: usize) -> ImageRgbF32 {
        checkout(&mut self.upsample[level], w, h)
    }

    pub fn checkin_upsample(&mut self, level: usize, img: ImageRgbF32) {
        self.upsample[level] = Some(img);
    }
}

impl Default for BloomWorkspace {
    fn default() -> Self {
        Self {
            downsample: (0..MAX_ITERATIONS).map(|_| None).collect(),
            upsample: (0..MAX_ITERATIONS).map(|_| None).collect(),
            prefilter: None,
        }
    }
}

fn checkout(slot: &mut Option<ImageRgbF32>, w: usize, h: usize) -> ImageRgbF32 {
    let mut img = slot.take().unwrap_or_default();
    img.reset(w, h);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_returns_cleared_buffer_of_requested_size() {
        let mut ws = BloomWorkspace::new();
        let img = ws.checkout_downsample(0, 8, 4);
        assert_eq!((img.w, img.h), (8, 4));
        assert!(img.data.iter().all(|px| *px == [0.0; 3]));
    }

    #[test]
    fn checkin_then_checkout_reuses_the_allocation() {
        let mut ws = BloomWorkspace::new();
        let mut img = ws.checkout_upsample(2, 16, 16);
        img.set(0, 0, [1.0; 3]);
        let ptr = img.data.as_ptr();
        ws.checkin_upsample(2, img);
        let again = ws.checkout_upsample(2, 16, 16);
        assert_eq!(again.data.as_ptr(), ptr, "buffer should be recycled");
        assert_eq!(again.get(0, 0), [0.0; 3], "recycled buffer must be cleared");
    }

    #[test]
    fn banks_cover_the_hard_cap() {
        let mut ws = BloomWorkspace::new();
        for level in 0..MAX_ITERATIONS {
            let d = ws.checkout_downsample(level, 2, 2);
            let u = ws.checkout_upsample(level, 2, 2);
            ws.checkin_downsample(level, d);
            ws.checkin_upsample(level, u);
        }
    }
}
