//! HSL triples with circular hue arithmetic.
//!
//! All three components are unit-interval values. Hue is a circular
//! coordinate: it wraps modulo 1.0 on every rotation, and distances between
//! hues are measured the short way round the wheel.

use palette::IntoColor;
use serde::Serialize;

/// sRGB-encoded HSL in double precision, as used by the `palette` crate.
type SrgbHsl = palette::Hsl<palette::encoding::Srgb, f64>;

/// A hue/saturation/lightness triple, each component in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a triple, wrapping the hue into `[0.0, 1.0)`.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h: wrap_hue(h), s, l }
    }

    /// Convert 8-bit RGB channels to HSL.
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        let rgb = palette::Srgb::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        );
        let hsl: SrgbHsl = rgb.into_color();
        Self::new(
            hsl.hue.into_positive_degrees() / 360.0,
            hsl.saturation,
            hsl.lightness,
        )
    }

    /// Convert to unit-range RGB components.
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        let hsl = SrgbHsl::new(self.h * 360.0, self.s, self.l);
        let rgb: palette::Srgb<f64> = hsl.into_color();
        (rgb.red, rgb.green, rgb.blue)
    }

    /// Rotate the hue by `turns` of the colour wheel.
    pub fn rotate(self, turns: f64) -> Self {
        Self::new(self.h + turns, self.s, self.l)
    }

    /// Replace the lightness, clamped to `[0.0, 1.0]`.
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Replace the saturation, clamped to `[0.0, 1.0]`.
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Shortest distance between two hues, in `[0.0, 0.5]`.
    pub fn hue_distance(self, other: Hsl) -> f64 {
        hue_distance(self.h, other.h)
    }
}

/// Shortest circular distance between two hues: `min(|a - b|, 1 - |a - b|)`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// Wrap a hue into `[0.0, 1.0)`.
fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_red() {
        let hsl = Hsl::from_channels(255, 0, 0);
        assert!(approx(hsl.h, 0.0));
        assert!(approx(hsl.s, 1.0));
        assert!(approx(hsl.l, 0.5));
    }

    #[test]
    fn test_blue_hue() {
        let hsl = Hsl::from_channels(0, 0, 255);
        assert!(approx(hsl.h, 2.0 / 3.0));
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let hsl = Hsl::from_channels(128, 128, 128);
        assert!(approx(hsl.h, 0.0));
        assert!(approx(hsl.s, 0.0));
        assert!(approx(hsl.l, 128.0 / 255.0));
    }

    #[test]
    fn test_to_unit_rgb_cyan() {
        let (r, g, b) = Hsl::new(0.5, 1.0, 0.5).to_unit_rgb();
        assert!(approx(r, 0.0));
        assert!(approx(g, 1.0));
        assert!(approx(b, 1.0));
    }

    #[test]
    fn test_rotate_wraps() {
        let hsl = Hsl::new(0.9, 0.5, 0.5).rotate(0.2);
        assert!(approx(hsl.h, 0.1));

        let hsl = Hsl::new(0.1, 0.5, 0.5).rotate(-0.2);
        assert!(approx(hsl.h, 0.9));
    }

    #[test]
    fn test_new_wraps_full_turn() {
        assert_eq!(Hsl::new(1.0, 0.0, 0.0).h, 0.0);
        assert!(approx(Hsl::new(2.25, 0.0, 0.0).h, 0.25));
        assert_eq!(Hsl::new(-1e-18, 0.0, 0.0).h, 0.0);
    }

    #[test]
    fn test_hue_distance_is_circular() {
        assert!(approx(hue_distance(0.95, 0.05), 0.1));
        assert!(approx(hue_distance(0.05, 0.95), 0.1));
        assert!(approx(hue_distance(0.0, 0.5), 0.5));
        assert!(approx(hue_distance(0.3, 0.3), 0.0));
    }

    #[test]
    fn test_with_lightness_clamps() {
        let hsl = Hsl::new(0.0, 1.0, 0.5);
        assert_eq!(hsl.with_lightness(1.7).l, 1.0);
        assert_eq!(hsl.with_lightness(-0.2).l, 0.0);
    }
}
