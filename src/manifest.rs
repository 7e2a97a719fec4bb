//! Project manifest (hues.yaml) parsing.
//!
//! The manifest names the palettes a project cares about and holds output
//! defaults for the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HuesError, Result};
use crate::types::{Colour, Palette};

/// Manifest filename looked up by [`Manifest::find`].
pub const MANIFEST_FILENAME: &str = "hues.yaml";

/// Project manifest loaded from hues.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Decimal places used when printing scores as text.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Named palettes to score.
    #[serde(default)]
    pub palettes: Vec<PaletteDef>,
}

/// A named palette definition. Colours may be hex or `rgb(...)` literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDef {
    pub name: String,
    pub colours: Vec<Colour>,
}

fn default_precision() -> usize {
    3
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            palettes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a hues.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HuesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| HuesError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check hues.yaml syntax".to_string()),
        })
    }

    /// Path of the manifest in `dir`, if one exists.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(MANIFEST_FILENAME);
        path.is_file().then_some(path)
    }

    /// Look up a palette definition by name.
    pub fn palette(&self, name: &str) -> Option<&PaletteDef> {
        self.palettes.iter().find(|p| p.name == name)
    }
}

impl PaletteDef {
    /// Build the palette, failing if it has no colours.
    pub fn build(&self) -> Result<Palette> {
        Palette::new(self.colours.iter().copied()).map_err(|e| match e {
            HuesError::Invariant { help, .. } => HuesError::Invariant {
                message: format!("Palette '{}' has no colours", self.name),
                help,
            },
            other => other,
        })
    }
}
