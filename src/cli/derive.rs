//! Derive command implementation.
//!
//! Prints every colour-theory variant of a single colour.

use clap::Args;
use serde::Serialize;

use crate::error::{HuesError, Result};
use crate::output::Printer;
use crate::types::{Colour, Hsl, DEFAULT_ANALOGOUS_ANGLE, DEFAULT_SHIFT};

/// Show lighter, darker, pastel and wheel-related variants of a colour
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Base colour (hex or "rgb(R, G, B)")
    pub colour: String,

    /// Lightness step for lighten/darken (0-1)
    #[arg(long, default_value_t = DEFAULT_SHIFT)]
    pub amount: f64,

    /// Hue separation in degrees for analogous colours
    #[arg(long, default_value_t = DEFAULT_ANALOGOUS_ANGLE)]
    pub angle: f64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// All derived variants of one colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivations {
    pub base: Colour,
    pub hsl: Hsl,
    pub lighter: Colour,
    pub darker: Colour,
    pub pastel: Colour,
    pub complementary: Colour,
    pub analogous: (Colour, Colour),
    pub triadic: (Colour, Colour),
}

impl Derivations {
    pub fn compute(base: Colour, amount: f64, angle: f64) -> Result<Self> {
        Ok(Self {
            base,
            hsl: base.hsl(),
            lighter: base.lighten(amount)?,
            darker: base.darken(amount)?,
            pastel: base.pastel()?,
            complementary: base.complementary()?,
            analogous: base.analogous(angle)?,
            triadic: base.triadic()?,
        })
    }

    /// Labelled colours in display order.
    pub fn rows(&self) -> Vec<(&'static str, Colour)> {
        vec![
            ("base", self.base),
            ("lighter", self.lighter),
            ("darker", self.darker),
            ("pastel", self.pastel),
            ("complementary", self.complementary),
            ("analogous+", self.analogous.0),
            ("analogous-", self.analogous.1),
            ("triadic+", self.triadic.0),
            ("triadic-", self.triadic.1),
        ]
    }
}

pub fn run(args: DeriveArgs, printer: &Printer) -> Result<()> {
    let base: Colour = args.colour.parse()?;
    let derived = Derivations::compute(base, args.amount, args.angle)?;

    printer.status("Deriving", &base.to_hex());

    if args.json {
        let json = serde_json::to_string_pretty(&derived).map_err(|e| HuesError::Parse {
            message: format!("Failed to serialise derivations: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for (label, colour) in derived.rows() {
            println!("{:<14} {}  {}", label, colour.to_hex(), colour);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_compute_red() {
        let red = Colour::rgb(255, 0, 0);
        let derived = Derivations::compute(red, DEFAULT_SHIFT, DEFAULT_ANALOGOUS_ANGLE).unwrap();

        assert_eq!(derived.base, red);
        assert_eq!(derived.complementary, red.complementary().unwrap());
        assert_eq!(derived.triadic, red.triadic().unwrap());
        assert!(derived.lighter.hsl().l > red.hsl().l);
        assert!(derived.darker.hsl().l < red.hsl().l);
    }

    #[test]
    fn test_rows_cover_every_variant() {
        let derived = Derivations::compute(Colour::rgb(10, 120, 200), 0.2, 45.0).unwrap();
        let rows = derived.rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], ("base", Colour::rgb(10, 120, 200)));
    }

    #[test]
    fn test_non_finite_amount_is_range_error() {
        let err = Derivations::compute(Colour::WHITE, f64::NAN, 30.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_run_rejects_bad_colour() {
        let args = DeriveArgs {
            colour: "rgb(1.5, 0, 0)".to_string(),
            amount: DEFAULT_SHIFT,
            angle: DEFAULT_ANALOGOUS_ANGLE,
            json: false,
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
