//! Wind-rose layout and drawing
//!
//! Turns a [`DirectionalHistogram`](windrose_histogram::DirectionalHistogram)
//! into a [`RoseDiagram`]: one colored arc per bin, a legend strip sampling
//! the same gradient and an optional overlay image. A [`DiagramRenderer`]
//! then draws the diagram; [`SvgRenderer`] writes an SVG document.
//!
//! # Example
//!
//! ```rust
//! use windrose_histogram::DirectionalHistogram;
//! use windrose_render::{samples_from_str, DiagramConfig, RoseDiagram};
//!
//! let samples = samples_from_str(r#"[{"direction": 10.0, "time": 0.0}]"#).unwrap();
//! let config = DiagramConfig::default();
//! let histogram = DirectionalHistogram::new(&samples, config.precision).unwrap();
//!
//! let diagram = RoseDiagram::new(&histogram, &config).unwrap();
//! let svg = diagram.to_svg().unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod config;
pub mod diagram;
pub mod loader;
pub mod renderer;
pub mod svg;

pub use config::DiagramConfig;
pub use diagram::{inscribed_square_side, ArcSegment, Overlay, RoseDiagram};
pub use loader::{load_samples, samples_from_reader, samples_from_str};
pub use renderer::{DiagramRenderer, NullRenderer};
pub use svg::SvgRenderer;

pub use windrose_core::{Error, Result};
