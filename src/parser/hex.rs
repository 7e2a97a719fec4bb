//! Hex colour literal parsing.
//!
//! Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Surrounding whitespace is
//! ignored.

use crate::error::{HuesError, Result};
use crate::types::Colour;

/// Parse a 6-digit hex colour literal.
pub fn parse_hex(s: &str) -> Result<Colour> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 {
        return Err(HuesError::Format {
            message: format!("Invalid hex colour: {:?}", s),
            help: Some("Hex colours must be exactly 6 digits, e.g. #FF8000".to_string()),
        });
    }

    // from_str_radix tolerates a leading '+', so validate digits first
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HuesError::Format {
            message: format!("Invalid hex digit {:?} in {:?}", bad, s),
            help: None,
        });
    }

    let r = parse_hex_byte(&hex[0..2])?;
    let g = parse_hex_byte(&hex[2..4])?;
    let b = parse_hex_byte(&hex[4..6])?;
    Ok(Colour::rgb(r, g, b))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| HuesError::Format {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
