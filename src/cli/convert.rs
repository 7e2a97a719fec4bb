//! Convert command implementation.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Colour;

/// Output notation for converted colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Notation {
    /// #RRGGBB
    Hex,
    /// rgb(R, G, B)
    Rgb,
    /// hsl(H, S, L) with unit-range components
    Hsl,
}

/// Convert colours between hex, rgb and hsl notation
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colours to convert (hex or "rgb(R, G, B)")
    #[arg(required = true)]
    pub colours: Vec<String>,

    /// Output notation
    #[arg(long, value_enum, default_value = "hex")]
    pub to: Notation,
}

/// Format one colour in the given notation.
pub fn format_colour(colour: Colour, notation: Notation) -> String {
    match notation {
        Notation::Hex => colour.to_hex(),
        Notation::Rgb => colour.to_rgb_string(),
        Notation::Hsl => {
            let hsl = colour.hsl();
            format!("hsl({:.3}, {:.3}, {:.3})", hsl.h, hsl.s, hsl.l)
        }
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let colours = super::parse_colours(&args.colours)?;

    printer.status(
        "Converting",
        &plural(colours.len(), "colour", "colours"),
    );

    for colour in colours {
        println!("{}", format_colour(colour, args.to));
    }

    Ok(())
}
