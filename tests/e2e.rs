mod common;

use bloom_post::image::{ImageRgbF32, RgbView};
use bloom_post::prefilter::{self, ThresholdCurve};
use bloom_post::pyramid::filters;
use bloom_post::{BloomParams, BloomRenderer};
use common::synthetic_image::{bright_spot_rgb, uniform_rgb};

fn view(data: &[[f32; 3]], w: usize, h: usize) -> RgbView<'_> {
    RgbView {
        w,
        h,
        stride: w,
        data,
    }
}

#[test]
fn black_source_passes_through_unchanged() {
    let data = uniform_rgb(256, 256, 0.0);
    let source = view(&data, 256, 256);

    for extra in [0, 2, 5] {
        let mut renderer = BloomRenderer::new(BloomParams {
            extra_blur_iterations: extra,
            ..Default::default()
        });
        let output = renderer.process(source);
        assert_eq!((output.w, output.h), (256, 256));
        assert_eq!(
            output.data, data,
            "black input must be returned bit-exact (extra={extra})"
        );
    }
}

#[test]
fn output_dimensions_always_match_source() {
    for (w, h) in [(64, 64), (321, 179), (1024, 17), (1, 1)] {
        let data = uniform_rgb(w, h, 0.9);
        let source = view(&data, w, h);
        let mut renderer = BloomRenderer::new(BloomParams {
            extra_blur_iterations: 3,
            ..Default::default()
        });
        let output = renderer.process(source);
        assert_eq!((output.w, output.h), (w, h), "dims mismatch for {w}x{h}");
    }
}

#[test]
fn uniform_gray_below_threshold_is_identity() {
    // 0.5 sits below threshold - knee = 0.8 - 0.08, so the prefilter response
    // is exactly zero and the composite adds nothing.
    let data = uniform_rgb(512, 512, 0.5);
    let source = view(&data, 512, 512);

    for extra in [0, 3] {
        let mut renderer = BloomRenderer::new(BloomParams {
            threshold_brightness: 0.8,
            soft_threshold_knee: 0.1,
            extra_blur_iterations: extra,
            ..Default::default()
        });
        let output = renderer.process(source);
        assert_eq!(
            output.data, data,
            "sub-threshold uniform gray must pass through exactly (extra={extra})"
        );
    }
}

#[test]
fn degenerate_iteration_count_blends_threshold_pass_directly() {
    // width 200 → floor(log2) = 7 → 7 - 8 < 0 → no pyramid levels
    let (w, h) = (200usize, 150usize);
    let data = bright_spot_rgb(w, h, 20, 0.2, 1.5);
    let source = view(&data, w, h);

    let params = BloomParams::default();
    let mut renderer = BloomRenderer::new(params.clone());
    let report = renderer.process_with_diagnostics(source);
    assert_eq!(report.stats.iterations, 0);

    // expected: source + tent-filtered prefilter output at source resolution
    let curve = ThresholdCurve::new(params.threshold(), params.soft_knee());
    let mut seed = ImageRgbF32::new(w, h);
    prefilter::apply_into(&source, &curve, params.anti_flicker, &mut seed);
    let mut expected = ImageRgbF32::new(w, h);
    filters::upsample_tent_into(&seed, &mut expected, params.filter_scale());
    for (dst, src) in expected.data.iter_mut().zip(&data) {
        dst[0] += src[0];
        dst[1] += src[1];
        dst[2] += src[2];
    }

    assert_eq!(
        report.output.data, expected.data,
        "degenerate composite must equal source + upsample(prefilter(source))"
    );
}

#[test]
fn clamped_threshold_behaves_like_max() {
    let data = bright_spot_rgb(512, 512, 32, 0.1, 2.0);
    let source = view(&data, 512, 512);

    let mut over = BloomRenderer::new(BloomParams {
        threshold_brightness: 1.5,
        extra_blur_iterations: 2,
        ..Default::default()
    });
    let mut max = BloomRenderer::new(BloomParams {
        threshold_brightness: 1.0,
        extra_blur_iterations: 2,
        ..Default::default()
    });
    assert_eq!(
        over.process(source).data,
        max.process(source).data,
        "threshold above 1 must clamp to 1"
    );
}

#[test]
fn bright_spot_spreads_glow() {
    let (w, h) = (256usize, 256usize);
    let data = bright_spot_rgb(w, h, 16, 0.0, 2.0);
    let source = view(&data, w, h);

    let mut renderer = BloomRenderer::new(BloomParams {
        threshold_brightness: 0.8,
        soft_threshold_knee: 0.1,
        extra_blur_iterations: 2,
        ..Default::default()
    });
    let report = renderer.process_with_diagnostics(source);
    assert_eq!(report.stats.iterations, 2);
    let output = report.output;

    // the highlight keeps its energy and gains glow
    let center = output.get(w / 2, h / 2);
    assert!(
        center[0] > 2.0,
        "center must exceed the source highlight, got {}",
        center[0]
    );

    // pixels outside the spot pick up spilled light
    let spot_edge = (w + 16) / 2;
    let outside = output.get(spot_edge + 4, h / 2);
    assert!(
        outside[0] > 1e-4,
        "glow must spill outside the highlight, got {}",
        outside[0]
    );
}

#[test]
fn zero_area_source_passes_through() {
    let data: Vec<[f32; 3]> = Vec::new();
    let source = RgbView {
        w: 0,
        h: 0,
        stride: 0,
        data: &data,
    };
    let mut renderer = BloomRenderer::new(BloomParams::default());
    let report = renderer.process_with_diagnostics(source);
    assert_eq!(report.stats.iterations, 0);
    assert_eq!((report.output.w, report.output.h), (0, 0));
    assert!(report.output.data.is_empty());
}

#[test]
fn anti_flicker_toggle_changes_partially_bright_pixels() {
    // brightness 0.75 sits inside the soft band for t=0.8, k=0.5:
    // the normalized response keeps a fraction, the step response drops it.
    let data = uniform_rgb(128, 128, 0.75);
    let source = view(&data, 128, 128);

    let mut soft = BloomRenderer::new(BloomParams {
        anti_flicker: true,
        ..Default::default()
    });
    let mut hard = BloomRenderer::new(BloomParams {
        anti_flicker: false,
        ..Default::default()
    });
    let soft_out = soft.process(source);
    let hard_out = hard.process(source);

    assert_eq!(hard_out.data, data, "step threshold must drop 0.75 < 0.8");
    assert!(
        soft_out.get(64, 64)[0] > 0.75,
        "soft knee must add glow inside the transition band, got {}",
        soft_out.get(64, 64)[0]
    );
}
