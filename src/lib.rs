//! hues - colour derivation and palette scoring
//!
//! A library for building immutable RGB colours, deriving related colours in
//! HSL space, and scoring palettes on contrast, uniqueness, harmony and
//! related metrics.
//!
//! ```
//! use hues::{Colour, Palette};
//!
//! let red = Colour::from_hex("#FF0000").unwrap();
//! let palette = Palette::new([red, red.complementary().unwrap()]).unwrap();
//! assert!(palette.score_harmony() > 0.8);
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod scoring;
pub mod types;

pub use error::{ErrorKind, HuesError, Result};
pub use manifest::{Manifest, PaletteDef, MANIFEST_FILENAME};
pub use scoring::ScoreReport;
pub use types::{Colour, Hsl, Palette, DEFAULT_ANALOGOUS_ANGLE, DEFAULT_SHIFT};
