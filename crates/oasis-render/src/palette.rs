//! Palette data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete palette as stored in `<id>.json`.
///
/// `colors` maps semantic roles (`background`, `link`, ...) to CSS color
/// strings. Values are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRecord {
    /// Machine name, e.g. `oasis_sand`. Used for the output filename.
    pub name: String,
    /// Human-readable name, e.g. `Oasis Sand`.
    pub display_name: String,
    pub colors: BTreeMap<String, String>,
}

impl PaletteRecord {
    /// Parse a palette from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The day and night palettes chosen for one stylesheet.
///
/// Nothing ties `day` to light palettes or `night` to dark ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettePair {
    pub day: PaletteRecord,
    pub night: PaletteRecord,
}

impl PalettePair {
    pub fn new(day: PaletteRecord, night: PaletteRecord) -> Self {
        Self { day, night }
    }
}
