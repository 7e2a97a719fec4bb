//! Palette type: an ordered, non-empty colour collection.

use std::fmt;
use std::ops::Index;

use crate::error::{HuesError, Result};
use crate::scoring::{self, ScoreReport};

use super::Colour;

/// An ordered, non-empty sequence of colours.
///
/// The palette owns its colours. Accessors hand out copies or read-only
/// views, so the only way to change the sequence is [`Palette::add`] and
/// [`Palette::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from at least one colour.
    pub fn new(colours: impl IntoIterator<Item = Colour>) -> Result<Self> {
        let colours: Vec<Colour> = colours.into_iter().collect();
        if colours.is_empty() {
            return Err(HuesError::Invariant {
                message: "Palette must contain at least one colour".to_string(),
                help: None,
            });
        }
        Ok(Self { colours })
    }

    /// Build a palette from hex strings (`#RRGGBB` or `RRGGBB`).
    pub fn from_hex_list<S: AsRef<str>>(hex_colours: &[S]) -> Result<Self> {
        let colours = hex_colours
            .iter()
            .map(|s| Colour::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colours)
    }

    /// Build a palette from `rgb(R, G, B)` literals.
    pub fn from_rgb_list<S: AsRef<str>>(rgb_colours: &[S]) -> Result<Self> {
        let colours = rgb_colours
            .iter()
            .map(|s| Colour::from_rgb_string(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colours)
    }

    /// Every colour as uppercase `#RRGGBB`, in order.
    pub fn to_hex_list(&self) -> Vec<String> {
        self.colours.iter().map(|c| c.to_hex()).collect()
    }

    /// Every colour as an `rgb(R, G, B)` literal, in order.
    pub fn to_rgb_list(&self) -> Vec<String> {
        self.colours.iter().map(|c| c.to_rgb_string()).collect()
    }

    /// An independent copy of the colours.
    pub fn colours(&self) -> Vec<Colour> {
        self.colours.clone()
    }

    /// A read-only view of the colours.
    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false; a palette holds at least one colour.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Get a colour by position.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Colour> {
        self.colours.iter()
    }

    /// Whether a colour with the same channels is present.
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }

    /// Append a colour.
    pub fn add(&mut self, colour: Colour) {
        self.colours.push(colour);
    }

    /// Remove the first colour equal to `colour`.
    ///
    /// Fails without changing the palette if the colour is absent or if it
    /// is the last one left.
    pub fn remove(&mut self, colour: Colour) -> Result<()> {
        let index = self
            .colours
            .iter()
            .position(|c| *c == colour)
            .ok_or(HuesError::NotFound { colour })?;

        if self.colours.len() <= 1 {
            return Err(HuesError::Invariant {
                message: "Cannot remove the last colour from a palette".to_string(),
                help: Some("Add another colour first".to_string()),
            });
        }

        self.colours.remove(index);
        Ok(())
    }

    /// The first colour added.
    ///
    /// This is an insertion-order placeholder, not a frequency or clustering
    /// result.
    pub fn dominant_colour(&self) -> Colour {
        self.colours[0]
    }

    /// Mean pairwise luminance difference.
    pub fn score_contrast(&self) -> f64 {
        scoring::contrast(&self.colours)
    }

    /// One minus the mean pairwise RGB similarity.
    pub fn score_uniqueness(&self) -> f64 {
        scoring::uniqueness(&self.colours)
    }

    /// Mean pairwise hue-relationship score.
    pub fn score_harmony(&self) -> f64 {
        scoring::harmony(&self.colours)
    }

    /// Population standard deviation of saturation.
    pub fn score_saturation_variation(&self) -> f64 {
        scoring::saturation_variation(&self.colours)
    }

    /// Balance of warm against cool hues.
    pub fn score_temperature_variation(&self) -> f64 {
        scoring::temperature_variation(&self.colours)
    }

    /// Mean lightness.
    pub fn score_brightness(&self) -> f64 {
        scoring::brightness(&self.colours)
    }

    /// How close mean lightness sits to the midpoint.
    pub fn score_brightness_balance(&self) -> f64 {
        scoring::brightness_balance(&self.colours)
    }

    /// All seven scores at once.
    pub fn scores(&self) -> ScoreReport {
        ScoreReport::from_colours(&self.colours)
    }
}

impl Index<usize> for Palette {
    type Output = Colour;

    fn index(&self, index: usize) -> &Colour {
        &self.colours[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Colour;
    type IntoIter = std::slice::Iter<'a, Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Palette([{}])", self.to_hex_list().join(", "))
    }
}
