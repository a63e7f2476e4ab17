//! Core traits for histogram building

use crate::types::{DirectionalHistogram, Sample};
use windrose_core::Result;

/// Trait for building directional histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given samples
    fn build(&self, samples: &[Sample]) -> Result<DirectionalHistogram>;

    /// Build a histogram from bare directions in degrees
    ///
    /// Default implementation wraps each direction in a [`Sample`] with time 0.
    fn build_directions(&self, directions: &[f64]) -> Result<DirectionalHistogram> {
        let samples: Vec<Sample> = directions.iter().map(|&d| Sample::new(d, 0.0)).collect();
        self.build(&samples)
    }

    /// Number of bins every histogram from this builder has
    fn target_bins(&self) -> usize;
}
