//! Sample loading from JSON
//!
//! Expected format:
//!
//! ```json
//! [
//!     { "direction": 12.5, "time": 0.04 },
//!     ...
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, instrument};
use windrose_core::Result;
use windrose_histogram::Sample;

/// Read samples from a JSON file
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let file = File::open(path)?;
    let samples = samples_from_reader(BufReader::new(file))?;
    debug!("Loaded {} samples", samples.len());
    Ok(samples)
}

/// Read samples from any JSON source
pub fn samples_from_reader<R: Read>(reader: R) -> Result<Vec<Sample>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn samples_from_str(json: &str) -> Result<Vec<Sample>> {
    Ok(serde_json::from_str(json)?)
}
