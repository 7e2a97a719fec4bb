//! Parsers for textual colour literals.
//!
//! Two literal grammars are supported:
//! - hex: `#RRGGBB` or `RRGGBB`
//! - rgb: `rgb(R, G, B)`
//!
//! # Usage
//!
//! ```
//! use hues::parser::parse_colour;
//!
//! let a = parse_colour("#FF8000").unwrap();
//! let b = parse_colour("rgb(255, 128, 0)").unwrap();
//! assert_eq!(a, b);
//! ```

mod hex;
mod rgb;

pub use hex::parse_hex;
pub use rgb::parse_rgb;

use crate::error::Result;
use crate::types::Colour;

/// Parse either literal form, choosing the grammar from the prefix.
pub fn parse_colour(s: &str) -> Result<Colour> {
    if s.trim_start().starts_with("rgb") {
        parse_rgb(s)
    } else {
        parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_rgb() {
        assert_eq!(parse_colour(" rgb(0, 0, 255)").unwrap(), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_detects_hex() {
        assert_eq!(parse_colour("0000ff").unwrap(), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_garbage() {
        assert!(parse_colour("blue").is_err());
    }
}
