//! Init command implementation.
//!
//! Writes a starter `hues.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{HuesError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

const STARTER_MANIFEST: &str = r##"# Decimal places for `hues score` text output
precision: 3

# Each palette lists hex (#RRGGBB) or rgb(R, G, B) colours
palettes:
  - name: primaries
    colours: ["#FF0000", "#00FF00", "#0000FF"]
  - name: ocean
    colours: ["#0000FF", "#0000C0", "rgb(0, 0, 128)"]
"##;

/// Initialize a hues project by generating a hues.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing hues.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(HuesError::Invariant {
            message: format!("{} already exists", display_path(&manifest_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, STARTER_MANIFEST).map_err(|e| HuesError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}

/// The manifest `init` writes, parsed.
pub fn starter_manifest() -> Result<Manifest> {
    Manifest::parse(STARTER_MANIFEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_starter_manifest_is_valid() {
        let manifest = starter_manifest().unwrap();
        assert_eq!(manifest.precision, 3);
        assert_eq!(manifest.palettes.len(), 2);
        for def in &manifest.palettes {
            assert!(def.build().is_ok());
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::plain()).unwrap();

        let path = dir.path().join(MANIFEST_FILENAME);
        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.palette("primaries").is_some());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "precision: 1").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &Printer::plain()).is_err());
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, "precision: 1");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "precision: 1").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("palettes:"));
    }
}
