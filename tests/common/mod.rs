//! Common test utilities for windrose integration tests

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use windrose::Sample;

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// Samples with the given directions and increasing timestamps
pub fn samples(directions: &[f64]) -> Vec<Sample> {
    directions
        .iter()
        .enumerate()
        .map(|(i, &d)| Sample::new(d, i as f64 * 0.04))
        .collect()
}

/// Write samples to a temporary JSON file
pub fn sample_file(samples: &[Sample]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string(samples).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Every bin width that divides the circle into whole degrees or half degrees
pub fn divisor_precisions() -> Vec<f64> {
    let mut precisions: Vec<f64> = (1..=360)
        .filter(|d| 360 % d == 0)
        .map(|d| d as f64)
        .collect();
    precisions.extend([0.5, 0.25, 0.1]);
    precisions
}
