//! Colour type, conversions and colour-theory derivations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HuesError, Result};
use crate::parser;

use super::Hsl;

/// Default lightness step for [`Colour::lighten`] and [`Colour::darken`].
pub const DEFAULT_SHIFT: f64 = 0.1;

/// Default hue separation, in degrees, for [`Colour::analogous`].
pub const DEFAULT_ANALOGOUS_ANGLE: f64 = 30.0;

/// An immutable 8-bit RGB colour.
///
/// Equality compares channels only; the derived HSL triple is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    /// Create a colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from real-valued channels.
    ///
    /// Each value is rounded to the nearest integer (ties to even) and must
    /// then lie in `0..=255`.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Parse a `#RRGGBB` / `RRGGBB` hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        parser::parse_hex(s)
    }

    /// Parse an `rgb(R, G, B)` literal.
    pub fn from_rgb_string(s: &str) -> Result<Self> {
        parser::parse_rgb(s)
    }

    /// Create a colour from HSL components, each in `[0.0, 1.0]`.
    ///
    /// Channels are truncated toward zero after scaling, not rounded.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Self> {
        for (name, value) in [("hue", h), ("saturation", s), ("lightness", l)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HuesError::Range {
                    message: format!("HSL {} {} is outside 0.0..=1.0", name, value),
                    help: None,
                });
            }
        }
        Self::from_hsl_triple(Hsl::new(h, s, l))
    }

    /// Convert an HSL triple back to RGB, truncating each scaled channel.
    fn from_hsl_triple(hsl: Hsl) -> Result<Self> {
        let (r, g, b) = hsl.to_unit_rgb();
        Self::new(truncate_unit(r), truncate_unit(g), truncate_unit(b))
    }

    pub fn r(self) -> u8 {
        self.r
    }

    pub fn g(self) -> u8 {
        self.g
    }

    pub fn b(self) -> u8 {
        self.b
    }

    /// The channels as an `(r, g, b)` tuple.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The derived HSL triple.
    pub fn hsl(self) -> Hsl {
        Hsl::from_channels(self.r, self.g, self.b)
    }

    /// Weighted channel sum `0.299r + 0.587g + 0.114b`, in `[0, 255]`.
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Straight-line distance to another colour in RGB space.
    pub fn distance(self, other: Colour) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Uppercase hex with a leading `#`, e.g. `#FF8000`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The `rgb(R, G, B)` literal form.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Raise HSL lightness by `amount`, capped at 1.0.
    pub fn lighten(self, amount: f64) -> Result<Self> {
        finite("lighten amount", amount)?;
        let hsl = self.hsl();
        Self::from_hsl_triple(hsl.with_lightness(hsl.l + amount))
    }

    /// Lower HSL lightness by `amount`, floored at 0.0.
    pub fn darken(self, amount: f64) -> Result<Self> {
        finite("darken amount", amount)?;
        let hsl = self.hsl();
        Self::from_hsl_triple(hsl.with_lightness(hsl.l - amount))
    }

    /// Halve saturation (at least 0.05) and raise lightness by 20% (at most 0.95).
    pub fn pastel(self) -> Result<Self> {
        let hsl = self.hsl();
        let softened = hsl
            .with_saturation((hsl.s * 0.5).max(0.05))
            .with_lightness((hsl.l * 1.2).min(0.95));
        Self::from_hsl_triple(softened)
    }

    /// The colour opposite on the wheel (hue rotated by half a turn).
    pub fn complementary(self) -> Result<Self> {
        Self::from_hsl_triple(self.hsl().rotate(0.5))
    }

    /// The two colours `angle` degrees either side on the wheel.
    ///
    /// Returns `(hue + angle, hue - angle)`.
    pub fn analogous(self, angle: f64) -> Result<(Self, Self)> {
        finite("analogous angle", angle)?;
        let hsl = self.hsl();
        let turns = angle / 360.0;
        Ok((
            Self::from_hsl_triple(hsl.rotate(turns))?,
            Self::from_hsl_triple(hsl.rotate(-turns))?,
        ))
    }

    /// The two colours a third of the wheel away.
    pub fn triadic(self) -> Result<(Self, Self)> {
        self.analogous(120.0)
    }
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HuesError::Range {
            message: format!("{} must be a finite number, got {}", name, value),
            help: None,
        })
    }
}

/// Headroom so a channel that is exact up to float noise truncates to itself.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Scale a unit channel to `0..=255` and truncate toward zero.
fn truncate_unit(value: f64) -> f64 {
    (value * 255.0 + TRUNCATION_EPSILON).trunc()
}

/// Round and range-check a single channel.
fn channel(value: f64) -> Result<u8> {
    if !value.is_finite() {
        return Err(HuesError::Range {
            message: format!("Channel value {} is not a finite number", value),
            help: None,
        });
    }

    let rounded = value.round_ties_even();
    if !(0.0..=255.0).contains(&rounded) {
        return Err(HuesError::Range {
            message: format!("Channel value {} is outside 0..=255", value),
            help: Some("RGB channels must be between 0 and 255".to_string()),
        });
    }

    Ok(rounded as u8)
}

impl FromStr for Colour {
    type Err = HuesError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_colour(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
