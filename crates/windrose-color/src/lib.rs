//! Color conversion and hue gradients for wind-rose diagrams
//!
//! This crate converts between RGB and HSV and builds the hue gradients
//! that map histogram density to color.
//!
//! # Examples
//!
//! ## Converting Colors
//!
//! ```rust
//! use windrose_color::{hsv2rgb, rgb2hsv, RgbEncoding};
//!
//! let green = hsv2rgb(120.0, 1.0, 1.0, RgbEncoding::Hex).unwrap();
//! assert_eq!(green.as_hex(), Some("#00ff00"));
//!
//! let gray = rgb2hsv(128.0, 128.0, 128.0).unwrap();
//! assert_eq!(gray.h, 0.0);
//! assert_eq!(gray.s, 0.0);
//! ```
//!
//! ## Legend Strip
//!
//! ```rust
//! use windrose_color::{GradientRange, DEFAULT_LEGEND_STEPS};
//!
//! let range = GradientRange::new(0.0, 120.0, 0.95, 0.95).unwrap();
//! let legend = range.legend_gradient(DEFAULT_LEGEND_STEPS).unwrap();
//! assert_eq!(legend.len(), 100);
//! ```

pub mod conversion;
pub mod gradient;
pub mod types;

pub use conversion::{hsv2rgb, hsv_to_hex, hsv_to_rgb, rgb2hsv};
pub use gradient::{legend_gradient, GradientRange, DEFAULT_LEGEND_STEPS};
pub use types::{Hsv, Rgb, RgbEncoding, RgbValue};

pub use windrose_core::{Error, Result};
