use bloom_post::prelude::*;

fn main() {
    // Demo stub: runs the renderer over a black frame
    let w = 640usize;
    let h = 480usize;
    let pixels = vec![[0.0f32; 3]; w * h];
    let source = RgbView {
        w,
        h,
        stride: w,
        data: &pixels,
    };

    let mut renderer = BloomRenderer::new(BloomParams::default());
    let report = renderer.process_with_diagnostics(source);
    println!(
        "iterations={} latency_ms={:.3}",
        report.stats.iterations, report.stats.latency_ms
    );
}
