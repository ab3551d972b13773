use bloom_post::types::RgbF32;

/// Generates a uniform RGB field.
pub fn uniform_rgb(width: usize, height: usize, value: f32) -> Vec<RgbF32> {
    vec![[value, value, value]; width * height]
}

/// Generates a dark field with a bright square highlight in the middle.
pub fn bright_spot_rgb(
    width: usize,
    height: usize,
    spot: usize,
    background: f32,
    highlight: f32,
) -> Vec<RgbF32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(spot <= width.min(height), "spot must fit inside the image");

    let x0 = (width - spot) / 2;
    let y0 = (height - spot) / 2;
    let mut img = vec![[background, background, background]; width * height];
    for y in y0..y0 + spot {
        for x in x0..x0 + spot {
            img[y * width + x] = [highlight, highlight, highlight];
        }
    }
    img
}
