//! Hue-relationship scoring for colour pairs.
//!
//! A pair is scored from the circular distance between its hues. Four
//! tolerance bands reward the classic relationships, and a continuous fallback
//! scores everything else. Bands overlap near their edges; a pair takes the
//! highest value of every band it falls in, never just the first.

use crate::types::hue_distance;

/// A hue-distance window and the score awarded inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyBucket {
    pub name: &'static str,
    /// Ideal hue distance, in turns.
    pub centre: f64,
    /// Half-width of the window; membership is strict (`<`).
    pub tolerance: f64,
    pub score: f64,
}

impl HarmonyBucket {
    /// Whether a hue distance falls inside this window.
    pub fn contains(&self, distance: f64) -> bool {
        (distance - self.centre).abs() < self.tolerance
    }
}

/// The monochromatic, analogous, triadic and complementary windows.
pub const BUCKETS: [HarmonyBucket; 4] = [
    HarmonyBucket {
        name: "monochromatic",
        centre: 0.0,
        tolerance: 0.01,
        score: 1.0,
    },
    HarmonyBucket {
        name: "analogous",
        centre: 1.0 / 6.0,
        tolerance: 0.1,
        score: 0.8,
    },
    HarmonyBucket {
        name: "triadic",
        centre: 1.0 / 3.0,
        tolerance: 0.1,
        score: 0.9,
    },
    HarmonyBucket {
        name: "complementary",
        centre: 0.5,
        tolerance: 0.1,
        score: 0.85,
    },
];

/// Score for a distance matching no band: 0.5 less the gap to the nearest centre.
pub fn fallback_score(distance: f64) -> f64 {
    let nearest = BUCKETS
        .iter()
        .map(|bucket| (distance - bucket.centre).abs())
        .fold(f64::INFINITY, f64::min);
    0.5 - nearest
}

/// Harmony of a single hue distance, in turns.
pub fn distance_score(distance: f64) -> f64 {
    BUCKETS
        .iter()
        .filter(|bucket| bucket.contains(distance))
        .map(|bucket| bucket.score)
        .fold(fallback_score(distance), f64::max)
}

/// Harmony of two hues.
pub fn pair_score(h1: f64, h2: f64) -> f64 {
    distance_score(hue_distance(h1, h2))
}
