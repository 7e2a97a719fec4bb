pub mod completions;
pub mod convert;
pub mod derive;
pub mod init;
pub mod score;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::types::Colour;

/// hues - colour derivation and palette scoring
#[derive(Parser, Debug)]
#[command(name = "hues")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score palettes from the command line or a hues.yaml manifest
    Score(score::ScoreArgs),

    /// Show lighter, darker, pastel and wheel-related variants of a colour
    Derive(derive::DeriveArgs),

    /// Convert colours between hex, rgb and hsl notation
    Convert(convert::ConvertArgs),

    /// Initialize a hues project (generates hues.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse every argument as a colour literal.
pub(crate) fn parse_colours(inputs: &[String]) -> Result<Vec<Colour>> {
    inputs.iter().map(|s| s.parse::<Colour>()).collect()
}
