//! Palette scoring engine.
//!
//! Seven independent metrics, each a pure aggregation over per-colour or
//! pairwise colour properties:
//! - `contrast` - luminance spread
//! - `uniqueness` - RGB-space distinctness
//! - `harmony` - hue relationships (see [`harmony`])
//! - `saturation_variation`, `temperature_variation`
//! - `brightness`, `brightness_balance`

pub mod harmony;
mod metrics;

pub use metrics::{
    brightness, brightness_balance, contrast, harmony, is_warm, saturation_variation,
    temperature_variation, uniqueness, MAX_RGB_DISTANCE,
};

use serde::Serialize;

use crate::types::Colour;

/// Every metric for one set of colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub contrast: f64,
    pub uniqueness: f64,
    pub harmony: f64,
    pub saturation_variation: f64,
    pub temperature_variation: f64,
    pub brightness: f64,
    pub brightness_balance: f64,
}

impl ScoreReport {
    /// Score a colour slice.
    pub fn from_colours(colours: &[Colour]) -> Self {
        Self {
            contrast: contrast(colours),
            uniqueness: uniqueness(colours),
            harmony: harmony(colours),
            saturation_variation: saturation_variation(colours),
            temperature_variation: temperature_variation(colours),
            brightness: brightness(colours),
            brightness_balance: brightness_balance(colours),
        }
    }

    /// Metric names and values, in a fixed display order.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("contrast", self.contrast),
            ("uniqueness", self.uniqueness),
            ("harmony", self.harmony),
            ("saturation_variation", self.saturation_variation),
            ("temperature_variation", self.temperature_variation),
            ("brightness", self.brightness),
            ("brightness_balance", self.brightness_balance),
        ]
    }
}
