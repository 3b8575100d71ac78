//! Day/night theme selection.
//!
//! Two strategies:
//!
//! - [`Selection::Explicit`]: ids given up front, no prompting and no
//!   category check. A dark palette can be the day theme.
//! - [`Selection::Interactive`]: each role is picked from a menu of its
//!   preferred category (light for day, dark for night). The last menu entry
//!   switches to the other category.
//!
//! ```text
//!   preferred menu ──1..=len──► id
//!        │
//!      len+1
//!        ▼
//!   alternate menu ──1..=len──► id
//!
//!   anything else at either menu ──► SelectionError::InvalidChoice
//! ```
//!
//! There is no re-prompt: the first invalid answer ends the run.

use std::fmt;

use log::debug;
use oasis_input::{InputError, MenuChoice, NumberedMenu, TerminalIO};
use oasis_render::PalettePair;

use crate::catalog::{Catalog, Category};
use crate::error::{Error, SelectionError};

/// Banner printed before interactive selection.
pub const INTERACTIVE_BANNER: &str = "\n=== Oasis Vimium-C Theme Generator ===\n";

/// The slot a palette fills in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Day,
    Night,
}

impl Role {
    /// Category offered first when prompting for this role.
    pub fn preferred_category(self) -> Category {
        match self {
            Self::Day => Category::Light,
            Self::Night => Category::Dark,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// How the day and night ids are obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Explicit { day: String, night: String },
    Interactive,
}

/// Picks and resolves a day/night pair from a catalog.
pub struct ThemeSelector<'a, T: TerminalIO> {
    catalog: &'a Catalog,
    terminal: T,
}

impl<'a, T: TerminalIO> ThemeSelector<'a, T> {
    pub fn new(catalog: &'a Catalog, terminal: T) -> Self {
        Self { catalog, terminal }
    }

    /// Chooses ids and resolves both palettes through the catalog.
    pub fn select(&self, selection: &Selection) -> Result<PalettePair, Error> {
        let (day_id, night_id) = self.choose_ids(selection)?;
        let day = self.catalog.resolve_palette(&day_id)?;
        let night = self.catalog.resolve_palette(&night_id)?;
        Ok(PalettePair::new(day, night))
    }

    /// Chooses the `(day, night)` ids without resolving them.
    pub fn choose_ids(&self, selection: &Selection) -> Result<(String, String), SelectionError> {
        match selection {
            Selection::Explicit { day, night } => Ok((day.clone(), night.clone())),
            Selection::Interactive => {
                self.terminal
                    .write(INTERACTIVE_BANNER)
                    .map_err(InputError::failed)?;
                let day = self.choose(Role::Day)?;
                let night = self.choose(Role::Night)?;
                Ok((day, night))
            }
        }
    }

    /// Runs the two-level menu for one role and returns the chosen id.
    pub fn choose(&self, role: Role) -> Result<String, SelectionError> {
        let preferred = role.preferred_category();
        let themes = self.catalog.themes(preferred);

        let menu = NumberedMenu::new(
            format!("{} Themes (recommended for {})", preferred.label(), role),
            themes.iter().map(|t| t.name.as_str()),
        )
        .extra(format!("Use a {} theme instead", preferred.other()))
        .prompt(format!("Select {} theme", role));

        match menu.ask(&self.terminal)? {
            MenuChoice::Entry(i) => {
                debug!("{} theme: {} ({} list)", role, themes[i].id, preferred);
                Ok(themes[i].id.clone())
            }
            MenuChoice::Extra => self.choose_alternate(role, preferred.other()),
            MenuChoice::Invalid(choice) => Err(SelectionError::InvalidChoice {
                role,
                choice,
                max: menu.max_choice(),
            }),
        }
    }

    fn choose_alternate(&self, role: Role, category: Category) -> Result<String, SelectionError> {
        let themes = self.catalog.themes(category);

        let menu = NumberedMenu::new(
            format!("{} Themes", category.label()),
            themes.iter().map(|t| t.name.as_str()),
        )
        .prompt(format!("Select {} theme", role));

        let choice = match menu.ask(&self.terminal)? {
            MenuChoice::Entry(i) => {
                debug!("{} theme: {} ({} list)", role, themes[i].id, category);
                return Ok(themes[i].id.clone());
            }
            MenuChoice::Invalid(choice) => choice,
            // no extra entry here, so this is already past the end
            MenuChoice::Extra => themes.len() as i64 + 1,
        };

        Err(SelectionError::InvalidChoice {
            role,
            choice,
            max: menu.max_choice(),
        })
    }
}
