//! Directional histograms for wind-rose diagrams
//!
//! Samples carry a direction in degrees. Directions are wrapped into
//! `[0, 360)` and counted into fixed-width angular bins; the bin counts are
//! then normalized against the busiest bin and mapped onto a hue gradient.
//!
//! # Examples
//!
//! ```rust
//! use windrose_histogram::{DirectionalHistogram, GradientOps, Sample};
//! use windrose_color::GradientRange;
//!
//! let samples = vec![
//!     Sample::new(10.0, 0.0),
//!     Sample::new(370.0, 0.5), // Same bin as 10 degrees
//!     Sample::new(200.0, 1.0),
//! ];
//! let histogram = DirectionalHistogram::new(&samples, 5.0).unwrap();
//! assert_eq!(histogram.bin_count(), 72);
//! assert_eq!(histogram.counts()[2], 2);
//!
//! let colors = histogram.normalize_to_color(&GradientRange::default()).unwrap();
//! assert_eq!(colors.len(), 72);
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{BinCountBuilder, FixedWidthBuilder};
pub use ops::GradientOps;
pub use traits::HistogramBuilder;
pub use types::{BinWidth, DirectionalHistogram, Sample, MAX_BINS};

pub use windrose_core::{Error, Result};
