//! Color value types

use crate::conversion;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use windrose_core::{lit, Error, Result};

/// RGB color with channels in `[0, 255]`
///
/// Channels are kept as unrounded floats; [`Rgb::to_hex`] floors them when
/// packing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb<T = f64> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T: Float> Rgb<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSV
    pub fn to_hsv(&self) -> Result<Hsv<T>> {
        conversion::rgb2hsv(self.r, self.g, self.b)
    }

    /// Pack as a lowercase `#rrggbb` string, flooring each channel
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            floor_channel(self.r),
            floor_channel(self.g),
            floor_channel(self.b)
        )
    }

    /// Parse `#rrggbb` (the leading `#` is optional, digits are case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<T> {
            u8::from_str_radix(&digits[range], 16)
                .map(|c| lit(f64::from(c)))
                .map_err(|_| Error::InvalidHexColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

fn floor_channel<T: Float>(channel: T) -> u8 {
    channel
        .floor()
        .max(T::zero())
        .min(lit(255.0))
        .to_u8()
        .unwrap_or(0)
}

impl<T: Float + fmt::Display> fmt::Display for Rgb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.1}, {:.1}, {:.1})", self.r, self.g, self.b)
    }
}

/// HSV color: hue in degrees `[0, 360)`, saturation and value in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv<T = f64> {
    pub h: T,
    pub s: T,
    pub v: T,
}

impl<T: Float> Hsv<T> {
    pub fn new(h: T, s: T, v: T) -> Self {
        Self { h, s, v }
    }

    /// Convert to RGB with float channels
    pub fn to_rgb(&self) -> Result<Rgb<T>> {
        conversion::hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Convert straight to a `#rrggbb` string
    pub fn to_hex(&self) -> Result<String> {
        conversion::hsv_to_hex(self.h, self.s, self.v)
    }
}

/// Output encoding for HSV to RGB conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RgbEncoding {
    /// Float channels in `[0, 255]`
    Object,
    /// Packed `#rrggbb`
    #[default]
    Hex,
}

/// An RGB color in one of the two supported encodings
#[derive(Debug, Clone, PartialEq)]
pub enum RgbValue<T = f64> {
    Object(Rgb<T>),
    Hex(String),
}

impl<T: Float> RgbValue<T> {
    pub fn encoding(&self) -> RgbEncoding {
        match self {
            RgbValue::Object(_) => RgbEncoding::Object,
            RgbValue::Hex(_) => RgbEncoding::Hex,
        }
    }

    /// The channels, if this value is object-encoded
    pub fn as_rgb(&self) -> Option<Rgb<T>> {
        match self {
            RgbValue::Object(rgb) => Some(*rgb),
            RgbValue::Hex(_) => None,
        }
    }

    /// The hex string, if this value is hex-encoded
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            RgbValue::Hex(hex) => Some(hex),
            RgbValue::Object(_) => None,
        }
    }

    /// Hex form regardless of encoding
    pub fn into_hex(self) -> String {
        match self {
            RgbValue::Hex(hex) => hex,
            RgbValue::Object(rgb) => rgb.to_hex(),
        }
    }
}
