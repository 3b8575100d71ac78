//! Theme catalog.
//!
//! The catalog is read from `<mappings>/index.json`:
//!
//! ```json
//! {
//!   "light_themes": [{ "id": "l1", "name": "oasis_sand" }],
//!   "dark_themes":  [{ "id": "d1", "name": "oasis_ink" }]
//! }
//! ```
//!
//! List order is the display and selection order. Each `id` names a palette
//! file `<mappings>/<id>.json`, read on demand by
//! [`Catalog::resolve_palette`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use oasis_render::PaletteRecord;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ConfigError, Resource};

/// Name of the index file inside the mappings directory.
pub const INDEX_FILE: &str = "index.json";

/// Extension of palette files inside the mappings directory.
pub const PALETTE_EXTENSION: &str = "json";

/// Light or dark palette group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Light,
    Dark,
}

impl Category {
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Capitalized name for headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSummary {
    pub id: String,
    pub name: String,
    pub is_light: bool,
}

impl PaletteSummary {
    pub fn category(&self) -> Category {
        if self.is_light {
            Category::Light
        } else {
            Category::Dark
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndexFile {
    light_themes: Vec<IndexEntry>,
    dark_themes: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    id: String,
    name: String,
}

impl IndexEntry {
    fn into_summary(self, category: Category) -> PaletteSummary {
        PaletteSummary {
            id: self.id,
            name: self.name,
            is_light: category == Category::Light,
        }
    }
}

/// All known palettes, grouped by category.
#[derive(Debug, Clone)]
pub struct Catalog {
    mappings_dir: PathBuf,
    light: Vec<PaletteSummary>,
    dark: Vec<PaletteSummary>,
}

impl Catalog {
    /// Loads `index.json` from `mappings_dir`.
    pub fn load(mappings_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mappings_dir = mappings_dir.into();
        let index_path = mappings_dir.join(INDEX_FILE);
        let index: IndexFile = read_json(Resource::Index, &index_path)?;

        let to_summaries = |entries: Vec<IndexEntry>, category| {
            entries
                .into_iter()
                .map(|entry| entry.into_summary(category))
                .collect::<Vec<_>>()
        };
        let light = to_summaries(index.light_themes, Category::Light);
        let dark = to_summaries(index.dark_themes, Category::Dark);

        debug!(
            "loaded {}: {} light, {} dark",
            index_path.display(),
            light.len(),
            dark.len()
        );

        Ok(Self {
            mappings_dir,
            light,
            dark,
        })
    }

    pub fn mappings_dir(&self) -> &Path {
        &self.mappings_dir
    }

    pub fn light_themes(&self) -> &[PaletteSummary] {
        &self.light
    }

    pub fn dark_themes(&self) -> &[PaletteSummary] {
        &self.dark
    }

    pub fn themes(&self, category: Category) -> &[PaletteSummary] {
        match category {
            Category::Light => self.light_themes(),
            Category::Dark => self.dark_themes(),
        }
    }

    /// Path of the palette file for `id`.
    pub fn palette_path(&self, id: &str) -> PathBuf {
        self.mappings_dir.join(format!("{}.{}", id, PALETTE_EXTENSION))
    }

    /// Reads the full palette for `id`.
    ///
    /// The id does not have to be listed in the index.
    pub fn resolve_palette(&self, id: &str) -> Result<PaletteRecord, ConfigError> {
        let path = self.palette_path(id);
        let record: PaletteRecord = read_json(Resource::Palette, &path)?;
        debug!(
            "resolved '{}' to {} ({} colors)",
            id,
            record.name,
            record.colors.len()
        );
        Ok(record)
    }
}

fn read_json<T: DeserializeOwned>(resource: Resource, path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::from_io(resource, path, e))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
        resource,
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
