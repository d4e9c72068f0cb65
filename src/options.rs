//! Strand shape configuration with TOML preset support.
//!
//! All per-draw shape parameters live here: thickness subdivisions, root
//! and tip radii, the taper exponent, and tip closing. Options serialize
//! to/from TOML so hosts can store groom presets on disk.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WispError;

/// Shape parameters for a draw, immutable while a pass runs.
///
/// Uses `#[serde(default)]` so partial TOML presets (e.g. only overriding
/// `radius_root`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ShapeOptions {
    /// Output vertices per centerline point: 1 renders a single-pixel
    /// line, 2 a flat camera-facing ribbon, 3 or more an approximated
    /// tube. Must be at least 1.
    pub thickness_subdivisions: u32,
    /// Strand thickness at the root.
    pub radius_root: f32,
    /// Strand thickness at the tip.
    pub radius_tip: f32,
    /// Taper curve exponent control in (-1, 1). Negative values bulge the
    /// taper outward, positive values pull it inward.
    pub radius_shape: f32,
    /// Force zero thickness over the last 1% of the strand so tube tips do
    /// not end in a visible flat cut.
    pub close_tip: bool,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            thickness_subdivisions: 1,
            radius_root: 0.01,
            radius_tip: 0.0,
            radius_shape: 0.5,
            close_tip: true,
        }
    }
}

impl ShapeOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ShapeOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, WispError> {
        let content = std::fs::read_to_string(path).map_err(WispError::Io)?;
        toml::from_str(&content)
            .map_err(|e| WispError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), WispError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WispError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WispError::Io)?;
        }
        std::fs::write(path, content).map_err(WispError::Io)
    }
}
