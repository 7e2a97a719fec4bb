//! Core domain types for hues.
//!
//! This module contains the value types the scoring engine works on:
//! - `Colour` - immutable 8-bit RGB values and their derivations
//! - `Hsl` - derived hue/saturation/lightness triples
//! - `Palette` - ordered, non-empty colour collections

mod colour;
mod hsl;
mod palette;

pub use colour::{Colour, DEFAULT_ANALOGOUS_ANGLE, DEFAULT_SHIFT};
pub use hsl::{hue_distance, Hsl};
pub use palette::Palette;
