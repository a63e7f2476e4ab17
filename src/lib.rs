//! # windrose
//!
//! Directional histograms drawn as HSV-colored wind roses.
//!
//! Samples (angles in degrees) are counted into fixed-width angular bins.
//! Each bin's count, relative to the busiest bin, picks a hue from a
//! configurable gradient, and the bins are drawn as an annulus of colored
//! arcs next to a legend strip of the same gradient.
//!
//! ## Crates
//!
//! - [`windrose_core`]: shared error type and angle helpers
//! - [`windrose_color`]: RGB/HSV conversion and hue gradients
//! - [`windrose_histogram`]: binning and frequency-to-hue normalization
//! - [`windrose_render`]: configuration, sample loading, layout and SVG
//!
//! ## Example
//!
//! ```rust
//! use windrose::{build_diagram, DiagramConfig, Sample};
//!
//! let samples = vec![Sample::new(10.0, 0.0), Sample::new(370.0, 1.0)];
//! let config = DiagramConfig::default().with_precision(10.0);
//!
//! let diagram = build_diagram(&samples, &config).unwrap();
//! assert_eq!(diagram.arcs().len(), 36);
//! assert_eq!(diagram.legend().len(), 100);
//! ```

use std::path::Path;
use tracing::{debug, instrument};

pub use windrose_core::{normalize_degrees, Error, Result};

pub use windrose_color::{
    hsv2rgb, hsv_to_hex, hsv_to_rgb, legend_gradient, rgb2hsv, GradientRange, Hsv, Rgb,
    RgbEncoding, RgbValue, DEFAULT_LEGEND_STEPS,
};

pub use windrose_histogram::{
    BinCountBuilder, BinWidth, DirectionalHistogram, FixedWidthBuilder, GradientOps,
    HistogramBuilder, Sample,
};

pub use windrose_render::{
    load_samples, samples_from_reader, samples_from_str, ArcSegment, DiagramConfig,
    DiagramRenderer, NullRenderer, Overlay, RoseDiagram, SvgRenderer,
};

/// Bin `samples` with `config.precision` and lay out the diagram
pub fn build_diagram(samples: &[Sample], config: &DiagramConfig) -> Result<RoseDiagram> {
    config.validate()?;
    let histogram = DirectionalHistogram::new(samples, config.precision)?;
    debug!("{}", histogram);
    RoseDiagram::new(&histogram, config)
}

/// Load samples from `path`, build the diagram and draw it with `renderer`
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn render_with<R: DiagramRenderer>(
    path: &Path,
    config: &DiagramConfig,
    renderer: &mut R,
) -> Result<R::Output> {
    let samples = load_samples(path)?;
    let diagram = build_diagram(&samples, config)?;
    renderer.render(&diagram)
}

/// Load samples from `path` and render the wind rose as an SVG document
pub fn render_diagram(path: &Path, config: &DiagramConfig) -> Result<String> {
    render_with(path, config, &mut SvgRenderer::default())
}
