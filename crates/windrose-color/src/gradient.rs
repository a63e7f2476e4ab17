//! Hue gradients used to color-encode bin frequency

use crate::conversion::hsv_to_hex;
use serde::{Deserialize, Serialize};
use windrose_core::{Error, Result, FULL_TURN};

/// Number of entries in a legend strip
pub const DEFAULT_LEGEND_STEPS: usize = 100;

/// Hue range plus the fixed saturation and brightness of a gradient
///
/// `low` may exceed `high`; the gradient then runs backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientRange {
    /// Hue bound in degrees, `[0, 360]`
    pub low: f64,
    /// Hue bound in degrees, `[0, 360]`
    pub high: f64,
    /// Saturation, `[0, 1]`
    pub saturation: f64,
    /// HSV value, `[0, 1]`
    pub brightness: f64,
}

impl Default for GradientRange {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 120.0,
            saturation: 0.95,
            brightness: 0.95,
        }
    }
}

impl GradientRange {
    /// Create a validated gradient range
    pub fn new(low: f64, high: f64, saturation: f64, brightness: f64) -> Result<Self> {
        let range = Self {
            low,
            high,
            saturation,
            brightness,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        Error::check_range("low", self.low, 0.0, FULL_TURN)?;
        Error::check_range("high", self.high, 0.0, FULL_TURN)?;
        Error::check_range("saturation", self.saturation, 0.0, 1.0)?;
        Error::check_range("brightness", self.brightness, 0.0, 1.0)
    }

    /// Signed width of the hue range
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Hue for a bin holding `fraction` of the busiest bin's count
    ///
    /// The busiest bin (`fraction == 1`) maps to 0 and an empty bin to
    /// `high - low`. The result is not offset by `low`.
    pub fn hue_for_fraction(&self, fraction: f64) -> f64 {
        self.span() * (1.0 - fraction)
    }

    /// Hex color for `hue` at this range's saturation and brightness
    pub fn color_for_hue(&self, hue: f64) -> Result<String> {
        hsv_to_hex(hue, self.saturation, self.brightness)
    }

    /// Hues of a linear legend strip: `low + i * (high - low) / steps`
    pub fn legend_hues(&self, steps: usize) -> Result<Vec<f64>> {
        if steps == 0 {
            return Err(Error::InvalidParameter(
                "legend steps must be positive".to_string(),
            ));
        }
        let step = self.span() / steps as f64;
        Ok((0..steps).map(|i| step * i as f64 + self.low).collect())
    }

    /// Hex colors of a linear legend strip, independent of any sample data
    pub fn legend_gradient(&self, steps: usize) -> Result<Vec<String>> {
        self.legend_hues(steps)?
            .into_iter()
            .map(|hue| self.color_for_hue(hue))
            .collect()
    }
}

/// Legend strip for `range` with `steps` entries
pub fn legend_gradient(range: &GradientRange, steps: usize) -> Result<Vec<String>> {
    range.legend_gradient(steps)
}
