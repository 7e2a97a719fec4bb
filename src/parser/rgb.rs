//! `rgb(R, G, B)` literal parsing.
//!
//! Components are decimal integers in 0..=255. Whitespace around the literal,
//! around the parentheses and around each component is ignored. Every failure
//! is reported as a format error, including out-of-range components.

use crate::error::{HuesError, Result};
use crate::types::Colour;

const USAGE: &str = "Use the form rgb(R, G, B) with integers from 0 to 255";

/// Parse an `rgb(R, G, B)` literal.
pub fn parse_rgb(s: &str) -> Result<Colour> {
    let s = s.trim();

    let args = s
        .strip_prefix("rgb")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| HuesError::Format {
            message: format!("Invalid rgb colour: {:?}", s),
            help: Some(USAGE.to_string()),
        })?;

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(HuesError::Format {
            message: format!("rgb() requires 3 components, got {}", parts.len()),
            help: Some(USAGE.to_string()),
        });
    }

    let r = parse_component(parts[0])?;
    let g = parse_component(parts[1])?;
    let b = parse_component(parts[2])?;
    Ok(Colour::rgb(r, g, b))
}

/// Parse a single integer channel.
fn parse_component(s: &str) -> Result<u8> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HuesError::Format {
            message: format!("Invalid rgb component: {:?}", s),
            help: Some("Components must be whole numbers (no decimals)".to_string()),
        });
    }

    // All digits, so the only failure left is a negative or oversized value
    s.parse::<u8>().map_err(|_| HuesError::Format {
        message: format!("rgb component out of range: {}", s),
        help: Some(USAGE.to_string()),
    })
}
