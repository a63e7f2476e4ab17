//! Angle helpers shared by binning and hue wrapping

use num_traits::{Float, NumCast};

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Convert an `f64` constant into `T`, yielding NaN if it is unrepresentable
#[inline]
pub fn lit<T: Float>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

/// Wrap an angle in degrees into `[0, 360)`
///
/// Uses the exact float remainder, shifted up by a full turn when negative.
/// Tiny negative inputs can round up to exactly 360 after the shift; those
/// fold back to 0.
pub fn normalize_degrees<T: Float>(deg: T) -> T {
    let full: T = lit(FULL_TURN);
    let rem = deg % full;
    let wrapped = if rem < T::zero() { rem + full } else { rem };
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}
