//! Score command implementation.
//!
//! Scores either a single palette given on the command line or every palette
//! in a hues.yaml manifest.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{HuesError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::scoring::ScoreReport;
use crate::types::{Colour, Palette};

/// Score palettes from the command line or a hues.yaml manifest
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Colours forming one palette (hex or "rgb(R, G, B)")
    pub colours: Vec<String>,

    /// Manifest to read palettes from (default: ./hues.yaml)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Only score the named manifest palette
    #[arg(long)]
    pub palette: Option<String>,

    /// Decimal places for text output (overrides the manifest)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// One scored palette, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ScoredPalette {
    pub name: String,
    pub colours: Vec<Colour>,
    pub dominant: Colour,
    pub scores: ScoreReport,
}

impl ScoredPalette {
    pub fn new(name: impl Into<String>, palette: &Palette) -> Self {
        Self {
            name: name.into(),
            colours: palette.colours(),
            dominant: palette.dominant_colour(),
            scores: palette.scores(),
        }
    }
}

pub fn run(args: ScoreArgs, printer: &Printer) -> Result<()> {
    let (palettes, manifest_precision) = collect_palettes(&args, printer)?;
    let precision = args.precision.unwrap_or(manifest_precision);

    let mut scored = Vec::with_capacity(palettes.len());
    for (name, palette) in &palettes {
        printer.status(
            "Scoring",
            &format!("{} ({})", name, plural(palette.len(), "colour", "colours")),
        );
        scored.push(ScoredPalette::new(name.clone(), palette));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&scored).map_err(|e| HuesError::Parse {
            message: format!("Failed to serialise scores: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for entry in &scored {
            print!("{}", render_text(entry, precision, printer));
        }
    }

    Ok(())
}

/// Resolve the palettes to score, with the manifest's text precision.
fn collect_palettes(args: &ScoreArgs, printer: &Printer) -> Result<(Vec<(String, Palette)>, usize)> {
    if !args.colours.is_empty() {
        let palette = Palette::new(super::parse_colours(&args.colours)?)?;
        return Ok((vec![("palette".to_string(), palette)], Manifest::default().precision));
    }

    let path = match &args.manifest {
        Some(path) => path.clone(),
        None => Manifest::find(&std::env::current_dir()?).ok_or_else(|| HuesError::Invariant {
            message: "No colours given and no manifest found".to_string(),
            help: Some(format!(
                "Pass colours directly, use --manifest, or run `hues init` to create {}",
                MANIFEST_FILENAME
            )),
        })?,
    };

    printer.info("Loading", &display_path(&path));
    let manifest = Manifest::load(&path)?;

    let defs: Vec<_> = match &args.palette {
        Some(name) => vec![manifest.palette(name).ok_or_else(|| HuesError::Invariant {
            message: format!("Palette '{}' is not defined in {}", name, display_path(&path)),
            help: None,
        })?],
        None => manifest.palettes.iter().collect(),
    };

    if defs.is_empty() {
        return Err(HuesError::Invariant {
            message: format!("{} defines no palettes", display_path(&path)),
            help: Some("Add a `palettes:` list".to_string()),
        });
    }

    let palettes = defs
        .into_iter()
        .map(|def| Ok((def.name.clone(), def.build()?)))
        .collect::<Result<Vec<_>>>()?;

    Ok((palettes, manifest.precision))
}

/// Render one scored palette as aligned text.
pub fn render_text(entry: &ScoredPalette, precision: usize, printer: &Printer) -> String {
    let hex: Vec<String> = entry.colours.iter().map(|c| c.to_hex()).collect();
    let mut out = format!("{}: {}\n", entry.name, hex.join(" "));
    for (metric, value) in entry.scores.entries() {
        out.push_str(&format!(
            "  {} {:.*}\n",
            printer.dim(&format!("{:<22}", metric)),
            precision,
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn args(colours: &[&str]) -> ScoreArgs {
        ScoreArgs {
            colours: colours.iter().map(|s| s.to_string()).collect(),
            manifest: None,
            palette: None,
            precision: None,
            json: false,
        }
    }

    #[test]
    fn test_collect_from_arguments() {
        let (palettes, precision) =
            collect_palettes(&args(&["#FF0000", "rgb(0, 0, 255)"]), &Printer::plain()).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].1.len(), 2);
        assert_eq!(precision, 3);
    }

    #[test]
    fn test_collect_bad_colour() {
        let err = collect_palettes(&args(&["#FF00"]), &Printer::plain()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_collect_from_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(
            &path,
            "precision: 1\npalettes:\n  - name: a\n    colours: [\"#FF0000\"]\n  - name: b\n    colours: [\"#000000\", \"#FFFFFF\"]\n",
        )
        .unwrap();

        let mut score_args = args(&[]);
        score_args.manifest = Some(path.clone());
        let (palettes, precision) = collect_palettes(&score_args, &Printer::plain()).unwrap();
        assert_eq!(precision, 1);
        let names: Vec<&str> = palettes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        score_args.palette = Some("b".to_string());
        let (palettes, _) = collect_palettes(&score_args, &Printer::plain()).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].1.len(), 2);

        score_args.palette = Some("missing".to_string());
        assert!(collect_palettes(&score_args, &Printer::plain()).is_err());
    }

    #[test]
    fn test_collect_manifest_without_palettes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, "precision: 2\n").unwrap();

        let mut score_args = args(&[]);
        score_args.manifest = Some(path);
        let err = collect_palettes(&score_args, &Printer::plain()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_render_text() {
        let palette = Palette::new([Colour::WHITE, Colour::BLACK]).unwrap();
        let entry = ScoredPalette::new("bw", &palette);
        let text = render_text(&entry, 2, &Printer::plain());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "bw: #FFFFFF #000000");
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("  contrast"));
        assert!(lines[1].ends_with("1.00"));
        assert!(lines[6].ends_with("0.50"));
    }

    #[test]
    fn test_scored_palette_json() {
        let palette = Palette::new([Colour::BLACK]).unwrap();
        let entry = ScoredPalette::new("black", &palette);
        insta::assert_json_snapshot!(entry, @r###"
        {
          "name": "black",
          "colours": [
            "#000000"
          ],
          "dominant": "#000000",
          "scores": {
            "contrast": 1.0,
            "uniqueness": 1.0,
            "harmony": 1.0,
            "saturation_variation": 1.0,
            "temperature_variation": 1.0,
            "brightness": 0.0,
            "brightness_balance": 1.0
          }
        }
        "###);
    }
}
