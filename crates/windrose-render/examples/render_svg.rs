//! Render a wind rose from a JSON sample file
//!
//! Usage: `cargo run --example render_svg -- samples.json [config.json] > rose.svg`
//!
//! Without arguments a synthetic set of samples clustered around 45 and 220
//! degrees is used. Set `RUST_LOG=debug` to see binning details.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use windrose_histogram::{DirectionalHistogram, Sample};
use windrose_render::{load_samples, DiagramConfig, DiagramRenderer, RoseDiagram, SvgRenderer};

fn synthetic_samples() -> Vec<Sample> {
    (0..500)
        .map(|i| {
            let t = i as f64 * 0.04;
            let center = if i % 3 == 0 { 220.0 } else { 45.0 };
            let spread = ((i * 37) % 61) as f64 - 30.0;
            Sample::new(center + spread, t)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let samples = match args.first() {
        Some(path) => load_samples(Path::new(path))?,
        None => synthetic_samples(),
    };
    let config = match args.get(1) {
        Some(path) => DiagramConfig::from_json_file(Path::new(path))?,
        None => DiagramConfig::default(),
    };

    let histogram = DirectionalHistogram::new(&samples, config.precision)?;
    eprintln!("{histogram}");
    if let Some(bin) = histogram.dominant_bin() {
        eprintln!("Dominant direction: {:?}", histogram.bin_range(bin));
    }

    let diagram = RoseDiagram::new(&histogram, &config)?;
    let svg = SvgRenderer::default().render(&diagram)?;
    println!("{svg}");
    Ok(())
}
