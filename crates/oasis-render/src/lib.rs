//! # Oasis Render - Day/Night Stylesheet Rendering
//!
//! `oasis-render` turns a pair of color palettes into a Vimium C stylesheet.
//!
//! ## Core Concepts
//!
//! - [`PaletteRecord`]: a named palette of CSS colors keyed by role
//! - [`PalettePair`]: the day and night palettes for one stylesheet
//! - [`RenderBinding`]: template variables (`day_name`, `night_<role>`, ...)
//! - [`TemplateEngine`]: substitution backend, [`MiniJinjaEngine`] by default
//! - [`StylesheetRenderer`]: reads the template, renders, writes the file
//!
//! ## Pipeline
//!
//! ```text
//! PalettePair ──► RenderBinding ──► TemplateEngine ──► vimiumc-<night>-<day>.css
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oasis_render::{PalettePair, StylesheetRenderer};
//!
//! let renderer = StylesheetRenderer::new("vimium-c.css.jinja", "output");
//! let generated = renderer.generate(&PalettePair::new(day, night))?;
//! println!("Generated: {}", generated.path.display());
//! ```
//!
//! ## Templates
//!
//! Templates use MiniJinja syntax in strict mode: referencing a role that is
//! missing from either palette fails the render instead of producing an
//! empty value.
//!
//! ```text
//! /* {{ day_name }} / {{ night_name }} */
//! #HUD { background: {{ day_background }}; }
//! @media (prefers-color-scheme: dark) {
//!   #HUD { background: {{ night_background }}; }
//! }
//! ```

mod binding;
mod engine;
mod error;
pub mod output;
mod palette;
mod renderer;

pub use binding::{RenderBinding, DAY_PREFIX, NIGHT_PREFIX};
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use output::{output_file_name, short_name};
pub use palette::{PalettePair, PaletteRecord};
pub use renderer::{GeneratedStylesheet, StylesheetRenderer};
