//! Core types shared by the windrose crates
//!
//! Holds the unified [`Error`] type and the angle normalization used both
//! when binning directions and when wrapping hues.

pub mod angle;
pub mod error;

pub use angle::{lit, normalize_degrees, FULL_TURN};
pub use error::{Error, Result};
