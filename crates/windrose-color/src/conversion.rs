//! RGB <-> HSV conversion
//!
//! Both directions validate their inputs instead of emitting malformed
//! colors: RGB channels must lie in `[0, 255]`, saturation and value in
//! `[0, 1]`, and hue must be finite. Hue is wrapped fully into `[0, 360)`
//! before the sextant lookup, so both negative hues and hues of 360 or more
//! are accepted.

use crate::types::{Hsv, Rgb, RgbEncoding, RgbValue};
use num_traits::Float;
use windrose_core::{lit, normalize_degrees, Error, Result};

fn check<T: Float>(name: &'static str, value: T, max: f64) -> Result<()> {
    Error::check_range(name, value.to_f64().unwrap_or(f64::NAN), 0.0, max)
}

/// Convert RGB channels in `[0, 255]` to HSV
///
/// On ties for the maximum channel, red wins over green and green over
/// blue. Grays (`max == min`) get hue 0; black gets saturation 0.
pub fn rgb2hsv<T: Float>(r: T, g: T, b: T) -> Result<Hsv<T>> {
    check("red", r, 255.0)?;
    check("green", g, 255.0)?;
    check("blue", b, 255.0)?;

    let scale: T = lit(255.0);
    let (r, g, b) = (r / scale, g / scale, b / scale);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let sixty: T = lit(60.0);

    let h = if delta == T::zero() {
        T::zero()
    } else if max == r {
        // 60 * (x mod 6) == (60 * x) mod 360
        normalize_degrees(sixty * ((g - b) / delta))
    } else if max == g {
        sixty * ((b - r) / delta + lit(2.0))
    } else {
        sixty * ((r - g) / delta + lit(4.0))
    };

    let s = if max == T::zero() {
        T::zero()
    } else {
        delta / max
    };

    Ok(Hsv::new(h, s, max))
}

/// Convert HSV to RGB float channels in `[0, 255]`
pub fn hsv_to_rgb<T: Float>(h: T, s: T, v: T) -> Result<Rgb<T>> {
    if !h.is_finite() {
        return Err(Error::non_finite("hue"));
    }
    check("saturation", s, 1.0)?;
    check("value", v, 1.0)?;

    let h = normalize_degrees(h);
    let one = T::one();
    let zero = T::zero();

    let c = s * v;
    let sector = h / lit(60.0);
    let x = c * (one - ((sector % lit(2.0)) - one).abs());
    let m = v - c;

    let (r1, g1, b1) = match sector.floor().to_u8() {
        Some(0) => (c, x, zero),
        Some(1) => (x, c, zero),
        Some(2) => (zero, c, x),
        Some(3) => (zero, x, c),
        Some(4) => (x, zero, c),
        _ => (c, zero, x),
    };

    let scale: T = lit(255.0);
    Ok(Rgb::new((r1 + m) * scale, (g1 + m) * scale, (b1 + m) * scale))
}

/// Convert HSV to a lowercase `#rrggbb` string
pub fn hsv_to_hex<T: Float>(h: T, s: T, v: T) -> Result<String> {
    Ok(hsv_to_rgb(h, s, v)?.to_hex())
}

/// Convert HSV to RGB in the requested encoding
pub fn hsv2rgb<T: Float>(h: T, s: T, v: T, encoding: RgbEncoding) -> Result<RgbValue<T>> {
    let rgb = hsv_to_rgb(h, s, v)?;
    Ok(match encoding {
        RgbEncoding::Object => RgbValue::Object(rgb),
        RgbEncoding::Hex => RgbValue::Hex(rgb.to_hex()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn hex(h: f64, s: f64, v: f64) -> String {
        hsv2rgb(h, s, v, RgbEncoding::Hex).unwrap().into_hex()
    }

    #[test]
    fn test_sextant_boundaries() {
        assert_eq!(hex(0.0, 1.0, 1.0), "#ff0000");
        assert_eq!(hex(60.0, 1.0, 1.0), "#ffff00");
        assert_eq!(hex(120.0, 1.0, 1.0), "#00ff00");
        assert_eq!(hex(180.0, 1.0, 1.0), "#00ffff");
        assert_eq!(hex(240.0, 1.0, 1.0), "#0000ff");
        assert_eq!(hex(300.0, 1.0, 1.0), "#ff00ff");
    }

    #[test]
    fn test_hue_wrapping() {
        assert_eq!(hex(-120.0, 1.0, 1.0), hex(240.0, 1.0, 1.0));
        assert_eq!(hex(360.0, 1.0, 1.0), "#ff0000");
        assert_eq!(hex(480.0, 1.0, 1.0), "#00ff00");
    }

    #[test]
    fn test_huge_hue_wraps_to_true_remainder() {
        // 1e20 mod 360 is 280, not 0
        assert_eq!(hsv_to_hex(1e20_f64, 1.0, 1.0).unwrap(), hex(280.0, 1.0, 1.0));
        assert_ne!(hsv_to_hex(1e20_f64, 1.0, 1.0).unwrap(), "#ff0000");
    }

    #[test]
    fn test_object_encoding_is_unrounded() {
        let rgb = hsv2rgb(0.0, 0.95, 0.95, RgbEncoding::Object)
            .unwrap()
            .as_rgb()
            .unwrap();
        assert_relative_eq!(rgb.r, 0.95 * 255.0, epsilon = 1e-9);
        assert_relative_eq!(rgb.g, 0.0475 * 255.0, epsilon = 1e-9);
        assert_relative_eq!(rgb.b, 0.0475 * 255.0, epsilon = 1e-9);
        assert_eq!(hex(0.0, 0.95, 0.95), "#f20c0c");
    }

    #[test]
    fn test_grayscale() {
        let hsv = rgb2hsv(128.0, 128.0, 128.0).unwrap();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_relative_eq!(hsv.v, 128.0 / 255.0);

        let black = rgb2hsv(0.0, 0.0, 0.0).unwrap();
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb2hsv_primaries() {
        let red = rgb2hsv(255.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(red.h, 0.0);
        assert_relative_eq!(red.s, 1.0);

        let yellow = rgb2hsv(255.0, 255.0, 0.0).unwrap();
        assert_relative_eq!(yellow.h, 60.0);

        let blue = rgb2hsv(0.0_f32, 0.0, 255.0).unwrap();
        assert_relative_eq!(blue.h, 240.0);

        // Red is max and blue exceeds green: hue lands just below 360
        let rose = rgb2hsv(255.0, 0.0, 1.0).unwrap();
        assert!(rose.h > 359.0 && rose.h < 360.0, "hue {}", rose.h);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            rgb2hsv(256.0, 0.0, 0.0),
            Err(Error::OutOfRange { name: "red", .. })
        ));
        assert!(matches!(
            rgb2hsv(0.0, -1.0, 0.0),
            Err(Error::OutOfRange { name: "green", .. })
        ));
        assert!(matches!(
            hsv_to_rgb(0.0, 1.5, 1.0),
            Err(Error::OutOfRange { name: "saturation", .. })
        ));
        assert!(matches!(
            hsv_to_rgb(0.0, 1.0, -0.1),
            Err(Error::OutOfRange { name: "value", .. })
        ));
        assert!(matches!(
            hsv_to_rgb(f64::NAN, 1.0, 1.0),
            Err(Error::NonFinite("hue"))
        ));
    }

    proptest! {
        #[test]
        fn prop_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
            let hsv = rgb2hsv(r, g, b).unwrap();
            prop_assert!((0.0..360.0).contains(&hsv.h));
            let back = hsv2rgb(hsv.h, hsv.s, hsv.v, RgbEncoding::Object)
                .unwrap()
                .as_rgb()
                .unwrap();
            prop_assert!((back.r - r).abs() <= 1.0, "r {} vs {}", back.r, r);
            prop_assert!((back.g - g).abs() <= 1.0, "g {} vs {}", back.g, g);
            prop_assert!((back.b - b).abs() <= 1.0, "b {} vs {}", back.b, b);
        }

        #[test]
        fn prop_hex_is_well_formed(h in -720.0f64..720.0, s in 0.0f64..=1.0, v in 0.0f64..=1.0) {
            let hex = hsv_to_hex(h, s, v).unwrap();
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            prop_assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
