//! Bloom renderer orchestrating the threshold → pyramid → composite pass.
//!
//! Overview
//! - Applies the soft-knee brightness prefilter to seed the blur chain.
//! - Builds a resolution-adaptive pyramid of 13-tap downsampled levels
//!   (`iteration_count` ties depth to source width, capped at 16).
//! - Walks the pyramid coarse → fine, tent-upsampling and additively
//!   combining each level, and finally blends the reconstructed glow onto
//!   the original source image.
//!
//! Modules
//! - [`params`] – configuration with clamp-at-use semantics.
//! - `pipeline` – the main [`BloomRenderer`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.

pub mod params;
mod pipeline;
pub mod workspace;

pub use params::BloomParams;
pub use pipeline::BloomRenderer;
pub use workspace::BloomWorkspace;
