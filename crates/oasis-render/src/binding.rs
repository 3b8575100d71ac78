//! Template variable binding.
//!
//! A [`RenderBinding`] is the flat set of variables a stylesheet template
//! can reference:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `day_name` | day palette `display_name` |
//! | `night_name` | night palette `display_name` |
//! | `day_<role>` | day palette `colors[role]` |
//! | `night_<role>` | night palette `colors[role]` |
//!
//! Role names are used as-is, without sanitizing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RenderError;
use crate::palette::{PalettePair, PaletteRecord};

/// Variable prefix for the day palette.
pub const DAY_PREFIX: &str = "day";

/// Variable prefix for the night palette.
pub const NIGHT_PREFIX: &str = "night";

/// Variable names to values for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderBinding {
    vars: BTreeMap<String, String>,
}

impl RenderBinding {
    /// Build the binding for a day/night pair.
    ///
    /// Fails with [`RenderError::BindingConflict`] when a color role would
    /// overwrite another variable, i.e. a role literally named `name`.
    pub fn for_pair(pair: &PalettePair) -> Result<Self, RenderError> {
        let mut binding = Self::default();
        binding.bind(format!("{}_name", DAY_PREFIX), &pair.day.display_name)?;
        binding.bind(format!("{}_name", NIGHT_PREFIX), &pair.night.display_name)?;
        binding.bind_colors(DAY_PREFIX, &pair.day)?;
        binding.bind_colors(NIGHT_PREFIX, &pair.night)?;
        Ok(binding)
    }

    fn bind_colors(&mut self, prefix: &str, palette: &PaletteRecord) -> Result<(), RenderError> {
        for (role, value) in &palette.colors {
            self.bind(format!("{}_{}", prefix, role), value)?;
        }
        Ok(())
    }

    fn bind(&mut self, key: String, value: &str) -> Result<(), RenderError> {
        if self.vars.contains_key(&key) {
            return Err(RenderError::BindingConflict { key });
        }
        self.vars.insert(key, value.to_string());
        Ok(())
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
