//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the seam between the
//! render pipeline and the text-substitution backend. The default
//! implementation is [`MiniJinjaEngine`].

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::binding::RenderBinding;
use crate::error::RenderError;

/// A template engine that substitutes a [`RenderBinding`] into template text.
pub trait TemplateEngine: Send + Sync {
    /// Renders `source` with the given binding.
    ///
    /// `name` identifies the template in error messages.
    fn render(
        &self,
        name: &str,
        source: &str,
        binding: &RenderBinding,
    ) -> Result<String, RenderError>;
}

/// MiniJinja-based template engine.
///
/// Configured for stylesheet output:
/// - undefined variables are errors
/// - no auto-escaping
/// - the newline after a block tag is removed
/// - the template's trailing newline is kept
///
/// # Example
///
/// ```rust
/// use oasis_render::{MiniJinjaEngine, PalettePair, PaletteRecord, RenderBinding, TemplateEngine};
///
/// let palette = |name: &str| PaletteRecord {
///     name: name.into(),
///     display_name: name.into(),
///     colors: [("bg".to_string(), "#000".to_string())].into(),
/// };
/// let binding = RenderBinding::for_pair(&PalettePair::new(palette("a"), palette("b"))).unwrap();
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render("demo", "body { background: {{ day_bg }}; }\n", &binding)
///     .unwrap();
/// assert_eq!(output, "body { background: #000; }\n");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with the stylesheet settings applied.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register custom filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(
        &self,
        name: &str,
        source: &str,
        binding: &RenderBinding,
    ) -> Result<String, RenderError> {
        Ok(self.env.render_named_str(name, source, binding)?)
    }
}
