//! Error types for wind-rose construction and rendering
//!
//! Provides a unified error type for all windrose crates.

use thiserror::Error;

/// Core error type for windrose operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Bin width that is not positive or does not divide the full circle
    #[error("Invalid precision: {0} degrees must be positive and divide 360 evenly")]
    InvalidPrecision(f64),

    /// Numeric input outside its accepted interval
    #[error("Value out of range: {name} = {value} (expected {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite input where a finite number is required
    #[error("Non-finite value: {0} must be a finite number")]
    NonFinite(&'static str),

    /// Malformed `#rrggbb` color string
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample or configuration JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a value outside `[min, max]`
    pub fn out_of_range(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            name,
            value,
            min,
            max,
        }
    }

    /// Create an error for an unusable bin width
    pub fn invalid_precision(precision: f64) -> Self {
        Self::InvalidPrecision(precision)
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(name: &'static str) -> Self {
        Self::NonFinite(name)
    }

    /// Check that `value` is finite and within `[min, max]`
    pub fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Self::non_finite(name));
        }
        if value < min || value > max {
            return Err(Self::out_of_range(name, value, min, max));
        }
        Ok(())
    }

    /// Whether the error stems from caller-supplied configuration rather than I/O
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter(_)
                | Error::InvalidPrecision(_)
                | Error::OutOfRange { .. }
                | Error::NonFinite(_)
        )
    }
}
