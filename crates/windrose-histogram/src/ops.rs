//! Frequency-to-hue normalization

use crate::types::DirectionalHistogram;
use windrose_color::GradientRange;
use windrose_core::Result;

/// Operations mapping bin frequency onto a hue gradient
pub trait GradientOps {
    /// One hue per bin: `(high - low) * (1 - count / max_count)`
    ///
    /// The busiest bin gets hue 0 and empty bins get `high - low`. When
    /// every bin is empty each bin is treated as an empty bin, so the whole
    /// sequence is `high - low`.
    fn normalize_hue(&self, low: f64, high: f64) -> Vec<f64>;

    /// One `#rrggbb` color per bin in angle order
    fn normalize_to_color(&self, range: &GradientRange) -> Result<Vec<String>>;
}

impl GradientOps for DirectionalHistogram {
    fn normalize_hue(&self, low: f64, high: f64) -> Vec<f64> {
        self.relative_to_max()
            .into_iter()
            .map(|fraction| (high - low) * (1.0 - fraction))
            .collect()
    }

    fn normalize_to_color(&self, range: &GradientRange) -> Result<Vec<String>> {
        range.validate()?;
        self.relative_to_max()
            .into_iter()
            .map(|fraction| range.color_for_hue(range.hue_for_fraction(fraction)))
            .collect()
    }
}
