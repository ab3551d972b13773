use bloom_post::image::io::{load_rgb_image, save_rgb_f32, write_json_file};
use bloom_post::{BloomParams, BloomRenderer};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BloomDemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub bloom: BloomParams,
    pub output: BloomOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BloomOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BloomDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_rgb_image(&config.input)?;
    let mut renderer = BloomRenderer::new(config.bloom);
    let report = renderer.process_with_diagnostics(source.as_view());

    save_rgb_f32(&report.output, &config.output.image)?;
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Saved bloomed image to {} ({}x{}, {} pyramid levels)",
        config.output.image.display(),
        report.stats.width,
        report.stats.height,
        report.stats.iterations
    );
    println!(
        "Saved stage report to {} (total {:.3} ms)",
        config.output.report_json.display(),
        report.stats.latency_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: bloom_demo <config.json>".to_string()
}
