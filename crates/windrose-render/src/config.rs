//! Diagram configuration
//!
//! Geometry of the annulus, the hue gradient and the canvas. Every field
//! has a default, so a JSON file only needs the fields it changes:
//!
//! ```no_run
//! use windrose_render::DiagramConfig;
//! use std::path::Path;
//!
//! let config = DiagramConfig::from_json_file(Path::new("diagram.json"))?;
//! let gradient = config.gradient();
//! # Ok::<(), windrose_render::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use windrose_color::{GradientRange, DEFAULT_LEGEND_STEPS};
use windrose_core::{Error, Result, FULL_TURN};
use windrose_histogram::BinWidth;

/// Complete wind-rose configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Outer bound of every arc, in pixels
    pub outer_radius: f64,

    /// Inner bound of every arc, in pixels; also sizes the overlay image
    pub inner_radius: f64,

    /// Gradient saturation (0.0-1.0)
    pub saturation: f64,

    /// Gradient brightness (0.0-1.0)
    pub brightness: f64,

    /// Hue bound in degrees
    pub low: f64,

    /// Hue bound in degrees
    pub high: f64,

    /// Bin width in degrees
    pub precision: f64,

    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Entries in the legend strip
    pub legend_steps: usize,

    /// Image drawn in the square inscribed in the inner circle
    pub overlay_image: Option<String>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            outer_radius: 200.0,
            inner_radius: 100.0,
            saturation: 0.95,
            brightness: 0.95,
            low: 0.0,
            high: 120.0,
            precision: 5.0,
            width: 700.0,
            height: 700.0,
            legend_steps: DEFAULT_LEGEND_STEPS,
            overlay_image: None,
        }
    }
}

impl DiagramConfig {
    /// Check every field, failing on the first bad one
    pub fn validate(&self) -> Result<()> {
        Error::check_range("inner_radius", self.inner_radius, 0.0, f64::MAX)?;
        Error::check_range("outer_radius", self.outer_radius, self.inner_radius, f64::MAX)?;
        if self.outer_radius == self.inner_radius {
            return Err(Error::InvalidParameter(
                "outer_radius must exceed inner_radius".to_string(),
            ));
        }
        Error::check_range("width", self.width, 1.0, f64::MAX)?;
        Error::check_range("height", self.height, 1.0, f64::MAX)?;
        if self.legend_steps == 0 {
            return Err(Error::InvalidParameter(
                "legend_steps must be positive".to_string(),
            ));
        }
        BinWidth::new(self.precision)?;
        self.gradient().validate()
    }

    /// The hue gradient described by `low`, `high`, `saturation` and `brightness`
    pub fn gradient(&self) -> GradientRange {
        GradientRange {
            low: self.low,
            high: self.high,
            saturation: self.saturation,
            brightness: self.brightness,
        }
    }

    /// Sets the saturation, clamped to 0.0-1.0
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation.clamp(0.0, 1.0);
        self
    }

    /// Sets the brightness, clamped to 0.0-1.0
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness.clamp(0.0, 1.0);
        self
    }

    /// Sets both hue bounds, each clamped to 0-360
    pub fn with_hue_range(mut self, low: f64, high: f64) -> Self {
        self.low = low.clamp(0.0, FULL_TURN);
        self.high = high.clamp(0.0, FULL_TURN);
        self
    }

    pub fn with_radii(mut self, inner_radius: f64, outer_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_overlay_image(mut self, href: impl Into<String>) -> Self {
        self.overlay_image = Some(href.into());
        self
    }

    /// Parse configuration JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
