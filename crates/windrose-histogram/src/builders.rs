//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{BinWidth, DirectionalHistogram, Sample};
use tracing::{debug, instrument, warn};
use windrose_core::Result;

/// Fixed-width builder
///
/// Creates one bin per `precision` degrees around the full circle.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    width: BinWidth,
}

impl FixedWidthBuilder {
    /// Create a builder with bins `precision` degrees wide
    pub fn new(precision: f64) -> Result<Self> {
        Ok(Self {
            width: BinWidth::new(precision)?,
        })
    }

    pub fn width(&self) -> BinWidth {
        self.width
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, samples: &[Sample]) -> Result<DirectionalHistogram> {
        Ok(bin_samples(self.width, samples))
    }

    fn target_bins(&self) -> usize {
        self.width.bins()
    }
}

/// Bin-count builder
///
/// Splits the circle into a given number of equal bins; the width need not
/// be a round number of degrees.
#[derive(Debug, Clone, Copy)]
pub struct BinCountBuilder {
    width: BinWidth,
}

impl BinCountBuilder {
    pub fn new(num_bins: usize) -> Result<Self> {
        Ok(Self {
            width: BinWidth::from_bin_count(num_bins)?,
        })
    }
}

impl HistogramBuilder for BinCountBuilder {
    fn build(&self, samples: &[Sample]) -> Result<DirectionalHistogram> {
        Ok(bin_samples(self.width, samples))
    }

    fn target_bins(&self) -> usize {
        self.width.bins()
    }
}

/// Count every sample with a finite direction into its bin
#[instrument(level = "debug", skip(samples), fields(precision = width.degrees(), bins = width.bins()))]
fn bin_samples(width: BinWidth, samples: &[Sample]) -> DirectionalHistogram {
    let mut counts = vec![0usize; width.bins()];
    let mut skipped = 0;

    for sample in samples {
        match width.index_of(sample.direction) {
            Some(index) => counts[index] += 1,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} of {} samples without a finite direction", skipped, samples.len());
    }
    debug!("Binned {} samples", samples.len() - skipped);

    DirectionalHistogram::from_parts(width, counts, skipped)
}
