//! The palette quality metrics.
//!
//! Each metric is a pure function over a colour slice. Pairwise metrics visit
//! every unordered pair exactly once and return 1.0 when there are fewer than
//! two colours.

use crate::types::Colour;

use super::harmony::pair_score;

/// Largest possible RGB distance, `sqrt(3 * 255^2)`.
pub const MAX_RGB_DISTANCE: f64 = 441.67;

/// Hues at or below this, or at or above [`COOL_LIMIT`], count as warm.
pub const WARM_LIMIT: f64 = 1.0 / 6.0;
pub const COOL_LIMIT: f64 = 5.0 / 6.0;

/// Every unordered pair `(colours[i], colours[j])` with `i < j`.
fn pairs(colours: &[Colour]) -> impl Iterator<Item = (Colour, Colour)> + '_ {
    colours
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| colours[i + 1..].iter().map(move |&b| (a, b)))
}

/// Mean of the pair values, or 1.0 when there are no pairs.
fn pairwise_mean(colours: &[Colour], score: impl Fn(Colour, Colour) -> f64) -> f64 {
    if colours.len() < 2 {
        return 1.0;
    }
    mean(pairs(colours).map(|(a, b)| score(a, b)))
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Mean absolute luminance difference over all pairs, normalised by 255.
pub fn contrast(colours: &[Colour]) -> f64 {
    pairwise_mean(colours, |a, b| (a.luminance() - b.luminance()).abs() / 255.0)
}

/// One minus the mean pairwise similarity, where similarity is
/// `1 - distance / MAX_RGB_DISTANCE`.
pub fn uniqueness(colours: &[Colour]) -> f64 {
    if colours.len() < 2 {
        return 1.0;
    }
    1.0 - pairwise_mean(colours, |a, b| 1.0 - a.distance(b) / MAX_RGB_DISTANCE)
}

/// Mean harmony of every pair of hues.
pub fn harmony(colours: &[Colour]) -> f64 {
    let hues: Vec<f64> = colours.iter().map(|c| c.hsl().h).collect();
    if hues.len() < 2 {
        return 1.0;
    }
    let scores = hues
        .iter()
        .enumerate()
        .flat_map(|(i, &h1)| hues[i + 1..].iter().map(move |&h2| pair_score(h1, h2)));
    mean(scores)
}

/// Population standard deviation of saturation.
pub fn saturation_variation(colours: &[Colour]) -> f64 {
    if colours.len() < 2 {
        return 1.0;
    }
    let saturations: Vec<f64> = colours.iter().map(|c| c.hsl().s).collect();
    let avg = mean(saturations.iter().copied());
    let variance = mean(saturations.iter().map(|s| (s - avg).powi(2)));
    variance.sqrt()
}

/// Whether a hue sits in the red-orange-magenta end of the wheel.
pub fn is_warm(hue: f64) -> bool {
    hue <= WARM_LIMIT || hue >= COOL_LIMIT
}

/// `1 - |warm - cool| / total`: 1.0 for an even split, 0.0 for all one kind.
pub fn temperature_variation(colours: &[Colour]) -> f64 {
    if colours.len() < 2 {
        return 1.0;
    }
    let total = colours.len();
    let warm = colours.iter().filter(|c| is_warm(c.hsl().h)).count();
    let cool = total - warm;
    1.0 - warm.abs_diff(cool) as f64 / total as f64
}

/// Mean lightness. Defined for a single colour too.
pub fn brightness(colours: &[Colour]) -> f64 {
    if colours.is_empty() {
        return 0.0;
    }
    mean(colours.iter().map(|c| c.hsl().l))
}

/// `1 - 2 * |mean lightness - 0.5|`.
pub fn brightness_balance(colours: &[Colour]) -> f64 {
    if colours.len() < 2 {
        return 1.0;
    }
    1.0 - 2.0 * (brightness(colours) - 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const GREEN: Colour = Colour::rgb(0, 255, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    fn primaries() -> Vec<Colour> {
        vec![RED, GREEN, BLUE]
    }

    fn blues() -> Vec<Colour> {
        vec![BLUE, Colour::rgb(0, 0, 192), Colour::rgb(0, 0, 128)]
    }

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_pairs_visits_each_once() {
        let colours = vec![RED, GREEN, BLUE, Colour::BLACK];
        assert_eq!(pairs(&colours).count(), 6);
        assert_eq!(pairs(&colours[..1]).count(), 0);
        assert!(pairs(&colours).all(|(a, b)| a != b));
    }

    #[test]
    fn test_single_colour_defaults() {
        let one = [RED];
        assert_eq!(contrast(&one), 1.0);
        assert_eq!(uniqueness(&one), 1.0);
        assert_eq!(harmony(&one), 1.0);
        assert_eq!(saturation_variation(&one), 1.0);
        assert_eq!(temperature_variation(&one), 1.0);
        assert_eq!(brightness_balance(&one), 1.0);
    }

    #[test]
    fn test_contrast() {
        let high = contrast(&primaries());
        let low = contrast(&blues());
        assert!((0.0..=1.0).contains(&high));
        assert!((0.0..=1.0).contains(&low));
        assert!(high > low);
        assert!(approx(contrast(&[Colour::BLACK, Colour::WHITE]), 1.0, 1e-9));
    }

    #[test]
    fn test_uniqueness() {
        assert!(uniqueness(&primaries()) > 0.8);
        assert!(approx(uniqueness(&[RED, RED]), 0.0, 1e-9));
        // black and white are as far apart as RGB allows
        assert!(approx(uniqueness(&[Colour::BLACK, Colour::WHITE]), 1.0, 1e-4));
    }

    #[test]
    fn test_harmony() {
        let mono = harmony(&blues());
        let triad = harmony(&primaries());
        assert!(approx(mono, 1.0, 1e-9));
        assert!(approx(triad, 0.9, 1e-9));
        assert!(mono > triad);
    }

    #[test]
    fn test_harmony_complementary_pair() {
        let cyan = Colour::rgb(0, 255, 255);
        assert!(approx(harmony(&[RED, cyan]), 0.85, 1e-9));
    }

    #[test]
    fn test_saturation_variation() {
        assert!(approx(saturation_variation(&primaries()), 0.0, 1e-9));
        // saturations 1.0 and 0.0: population std dev is 0.5
        let grey = Colour::rgb(128, 128, 128);
        assert!(approx(saturation_variation(&[RED, grey]), 0.5, 1e-9));
    }

    #[test]
    fn test_is_warm() {
        assert!(is_warm(0.0));
        assert!(is_warm(WARM_LIMIT));
        assert!(is_warm(0.9));
        assert!(!is_warm(0.5));
        assert!(!is_warm(0.2));
    }

    #[test]
    fn test_temperature_variation() {
        // red is warm, green and blue are cool
        assert!(approx(temperature_variation(&primaries()), 2.0 / 3.0, 1e-9));
        assert_eq!(temperature_variation(&blues()), 0.0);
        assert_eq!(temperature_variation(&[RED, BLUE]), 1.0);
    }

    #[test]
    fn test_brightness() {
        assert!(approx(brightness(&[Colour::WHITE]), 1.0, 0.01));
        assert!(approx(brightness(&[Colour::BLACK]), 0.0, 0.01));
        assert!(approx(brightness(&[Colour::WHITE, Colour::BLACK]), 0.5, 0.01));
    }

    #[test]
    fn test_brightness_balance() {
        assert!(approx(brightness_balance(&[Colour::WHITE, Colour::BLACK]), 1.0, 1e-9));
        assert!(approx(brightness_balance(&[Colour::WHITE, Colour::WHITE]), 0.0, 1e-9));
        assert!(approx(brightness_balance(&primaries()), 1.0, 1e-9));
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = primaries();
        let mut reversed = primaries();
        reversed.reverse();
        assert!(approx(contrast(&forward), contrast(&reversed), 1e-12));
        assert!(approx(uniqueness(&forward), uniqueness(&reversed), 1e-12));
        assert!(approx(harmony(&forward), harmony(&reversed), 1e-12));
        assert_eq!(temperature_variation(&forward), temperature_variation(&reversed));
    }
}
