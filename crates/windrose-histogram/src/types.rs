//! Core types for directional histograms

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use windrose_core::{normalize_degrees, Error, Result, FULL_TURN};

/// Largest bin count accepted (a bin width of 0.0001 degrees)
pub const MAX_BINS: usize = 3_600_000;

/// Relative tolerance when checking that a bin width divides 360
const DIVISOR_TOLERANCE: f64 = 1e-9;

/// A timestamped direction reading
///
/// Only `direction` takes part in binning; `time` is carried through.
/// A missing or `null` direction deserializes as NaN and is skipped by the
/// builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Degrees, any real value
    #[serde(default = "undefined_direction", deserialize_with = "nullable_f64")]
    pub direction: f64,
    #[serde(default)]
    pub time: f64,
}

fn undefined_direction() -> f64 {
    f64::NAN
}

fn nullable_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Sample {
    pub fn new(direction: f64, time: f64) -> Self {
        Self { direction, time }
    }

    /// Whether the direction can be binned
    pub fn has_direction(&self) -> bool {
        self.direction.is_finite()
    }
}

/// Validated angular bin width (the "precision" of a wind rose)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinWidth {
    degrees: f64,
    bins: usize,
}

impl BinWidth {
    /// Bin width in degrees; must be positive and divide 360 into whole bins
    pub fn new(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || degrees <= 0.0 || degrees > FULL_TURN {
            return Err(Error::invalid_precision(degrees));
        }

        let ratio = FULL_TURN / degrees;
        let bins = ratio.round();
        if (ratio - bins).abs() > DIVISOR_TOLERANCE * bins || bins > MAX_BINS as f64 {
            return Err(Error::invalid_precision(degrees));
        }

        Ok(Self {
            degrees,
            bins: bins as usize,
        })
    }

    /// Width that splits the circle into `bins` equal bins
    pub fn from_bin_count(bins: usize) -> Result<Self> {
        if bins == 0 || bins > MAX_BINS {
            return Err(Error::InvalidParameter(format!(
                "bin count {bins} must be in 1..={MAX_BINS}"
            )));
        }
        Ok(Self {
            degrees: FULL_TURN / bins as f64,
            bins,
        })
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Bin holding `direction`, or `None` for NaN/infinite directions
    pub fn index_of(&self, direction: f64) -> Option<usize> {
        if !direction.is_finite() {
            return None;
        }
        let normalized = normalize_degrees(direction);
        // Rounding can push a direction just below 360 past the last bin
        Some(((normalized / self.degrees).floor() as usize).min(self.bins - 1))
    }

    /// Half-open `[start, end)` interval of bin `index` in degrees
    pub fn range(&self, index: usize) -> Option<(f64, f64)> {
        (index < self.bins).then(|| {
            let start = index as f64 * self.degrees;
            (start, start + self.degrees)
        })
    }
}

/// Counts of directional samples per angular bin
///
/// Built once from the full sample set; bin `i` covers
/// `[i * precision, (i + 1) * precision)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalHistogram {
    width: BinWidth,
    counts: Vec<usize>,
    skipped: usize,
}

impl DirectionalHistogram {
    /// Bin `samples` into bins of `precision` degrees
    pub fn new(samples: &[Sample], precision: f64) -> Result<Self> {
        use crate::traits::HistogramBuilder;
        crate::builders::FixedWidthBuilder::new(precision)?.build(samples)
    }

    pub(crate) fn from_parts(width: BinWidth, counts: Vec<usize>, skipped: usize) -> Self {
        debug_assert_eq!(width.bins(), counts.len());
        Self {
            width,
            counts,
            skipped,
        }
    }

    /// Bin width in degrees
    pub fn precision(&self) -> f64 {
        self.width.degrees()
    }

    pub fn bin_width(&self) -> BinWidth {
        self.width
    }

    /// Get the number of bins
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-bin counts in angle order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of binned samples
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Samples left out because their direction was not finite
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn has_samples(&self) -> bool {
        self.counts.iter().any(|&c| c > 0)
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Each count divided by the total; all zeros for an empty histogram
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total_count();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }

    /// Each count divided by the busiest bin's count; all zeros when every bin is empty
    pub fn relative_to_max(&self) -> Vec<f64> {
        let max = self.max_count();
        if max == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / max as f64)
            .collect()
    }

    pub fn bin_range(&self, index: usize) -> Option<(f64, f64)> {
        self.width.range(index)
    }

    pub fn bin_center(&self, index: usize) -> Option<f64> {
        self.bin_range(index).map(|(start, end)| (start + end) / 2.0)
    }

    /// Find which bin a direction falls into
    pub fn bin_index(&self, direction: f64) -> Option<usize> {
        self.width.index_of(direction)
    }

    /// Busiest bin (lowest angle on ties), `None` without samples
    pub fn dominant_bin(&self) -> Option<usize> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.counts.iter().position(|&c| c == max)
    }
}

impl fmt::Display for DirectionalHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectionalHistogram({} bins of {:.3} deg, n={})",
            self.bin_count(),
            self.precision(),
            self.total_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bin_width_divisors() {
        assert_eq!(BinWidth::new(5.0).unwrap().bins(), 72);
        assert_eq!(BinWidth::new(0.5).unwrap().bins(), 720);
        assert_eq!(BinWidth::new(0.1).unwrap().bins(), 3600);
        assert_eq!(BinWidth::new(360.0).unwrap().bins(), 1);
    }

    #[test]
    fn test_bin_width_rejects_non_divisors() {
        for precision in [7.0, 0.0, -5.0, 361.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(BinWidth::new(precision), Err(Error::InvalidPrecision(_))),
                "precision {precision} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_bin_count() {
        let width = BinWidth::from_bin_count(8).unwrap();
        assert_relative_eq!(width.degrees(), 45.0);
        assert!(BinWidth::from_bin_count(0).is_err());
    }

    #[test]
    fn test_index_of_wraps() {
        let width = BinWidth::new(5.0).unwrap();
        assert_eq!(width.index_of(10.0), Some(2));
        assert_eq!(width.index_of(370.0), Some(2));
        assert_eq!(width.index_of(-5.0), Some(71));
        assert_eq!(width.index_of(359.999), Some(71));
        assert_eq!(width.index_of(f64::NAN), None);
    }

    #[test]
    fn test_bin_range() {
        let width = BinWidth::new(90.0).unwrap();
        assert_eq!(width.range(0), Some((0.0, 90.0)));
        assert_eq!(width.range(3), Some((270.0, 360.0)));
        assert_eq!(width.range(4), None);
    }

    #[test]
    fn test_histogram_queries() {
        let width = BinWidth::new(90.0).unwrap();
        let hist = DirectionalHistogram::from_parts(width, vec![2, 5, 3, 0], 1);

        assert_eq!(hist.bin_count(), 4);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.skipped_count(), 1);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.dominant_bin(), Some(1));
        assert_eq!(hist.bin_center(2), Some(225.0));
        assert_eq!(hist.frequencies(), vec![0.2, 0.5, 0.3, 0.0]);
        assert_eq!(hist.relative_to_max(), vec![0.4, 1.0, 0.6, 0.0]);
        assert_eq!(
            hist.to_string(),
            "DirectionalHistogram(4 bins of 90.000 deg, n=10)"
        );
    }

    #[test]
    fn test_empty_histogram_queries() {
        let width = BinWidth::new(45.0).unwrap();
        let hist = DirectionalHistogram::from_parts(width, vec![0; 8], 0);
        assert!(!hist.has_samples());
        assert_eq!(hist.dominant_bin(), None);
        assert_eq!(hist.relative_to_max(), vec![0.0; 8]);
        assert_eq!(hist.frequencies(), vec![0.0; 8]);
    }

    #[test]
    fn test_sample_deserialization() {
        let samples: Vec<Sample> = serde_json::from_str(
            r#"[{"direction": 12.5, "time": 0.04}, {"direction": null, "time": 1.0}, {"time": 2.0}]"#,
        )
        .unwrap();
        assert_eq!(samples[0], Sample::new(12.5, 0.04));
        assert!(!samples[1].has_direction());
        assert!(!samples[2].has_direction());
        assert_eq!(samples[2].time, 2.0);
    }
}
