//! # Oasis Vimium-C Theme Generator
//!
//! Builds a Vimium C stylesheet from two Oasis palettes: one for day (light
//! mode) and one for night (dark mode).
//!
//! ## Flow
//!
//! ```text
//! Cli ──► Invocation ──► Catalog::load
//!                          │
//!            ┌─────────────┴──────────────┐
//!          List                        Generate
//!            │                            │
//!      write_listing            ThemeSelector::select ──► StylesheetRenderer::generate
//! ```
//!
//! - [`Catalog`]: `mappings/index.json` plus on-demand `mappings/<id>.json`
//! - [`ThemeSelector`]: explicit ids, or a two-level menu per role
//! - [`oasis_render::StylesheetRenderer`]: binding, template, output file
//!
//! ## Example
//!
//! ```rust,ignore
//! use oasis_input::RealTerminal;
//! use oasis_vimiumc::{run, Invocation, Mode, Paths, Selection};
//!
//! let invocation = Invocation {
//!     mode: Mode::Generate(Selection::Explicit { day: "l1".into(), night: "d1".into() }),
//!     paths: Paths::under("."),
//! };
//! run(&invocation, RealTerminal, &mut std::io::stdout())?;
//! ```

mod app;
pub mod catalog;
mod cli;
pub mod config;
mod error;
pub mod selector;

pub use app::{run, write_listing, write_report, Invocation, Mode};
pub use catalog::{Catalog, Category, PaletteSummary};
pub use cli::Cli;
pub use config::Paths;
pub use error::{ConfigError, Error, Resource, SelectionError};
pub use selector::{Role, Selection, ThemeSelector};
