//! The render pipeline: template file + palette pair → stylesheet file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::binding::RenderBinding;
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;
use crate::output::{output_path, write_stylesheet};
use crate::palette::PalettePair;

/// Result of a successful [`StylesheetRenderer::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStylesheet {
    /// Absolute path of the written stylesheet.
    pub path: PathBuf,
    pub day_name: String,
    pub night_name: String,
}

/// Renders palette pairs through one template into one output directory.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = StylesheetRenderer::new("vimium-c.css.jinja", "output");
/// let generated = renderer.generate(&pair)?;
/// println!("{}", generated.path.display());
/// ```
pub struct StylesheetRenderer<E: TemplateEngine = MiniJinjaEngine> {
    template_path: PathBuf,
    output_dir: PathBuf,
    engine: E,
}

impl StylesheetRenderer<MiniJinjaEngine> {
    /// Creates a renderer backed by [`MiniJinjaEngine`].
    pub fn new(template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_engine(template_path, output_dir, MiniJinjaEngine::new())
    }
}

impl<E: TemplateEngine> StylesheetRenderer<E> {
    /// Creates a renderer with a custom template engine.
    pub fn with_engine(
        template_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        engine: E,
    ) -> Self {
        Self {
            template_path: template_path.into(),
            output_dir: output_dir.into(),
            engine,
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders the stylesheet text for a pair without writing it.
    pub fn render(&self, pair: &PalettePair) -> Result<String, RenderError> {
        let source = fs::read_to_string(&self.template_path)
            .map_err(|e| RenderError::io(&self.template_path, e))?;
        let binding = RenderBinding::for_pair(pair)?;
        debug!(
            "rendering {} with {} variables",
            self.template_path.display(),
            binding.len()
        );

        let name = self
            .template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.template_path.display().to_string());

        self.engine.render(&name, &source, &binding)
    }

    /// Renders the stylesheet for a pair and writes it to the output directory.
    ///
    /// Nothing is written when rendering fails.
    pub fn generate(&self, pair: &PalettePair) -> Result<GeneratedStylesheet, RenderError> {
        let contents = self.render(pair)?;

        let path = output_path(&self.output_dir, pair);
        write_stylesheet(&path, &contents)?;
        let path = std::path::absolute(&path).map_err(|e| RenderError::io(&path, e))?;
        info!("wrote {} ({} bytes)", path.display(), contents.len());

        Ok(GeneratedStylesheet {
            path,
            day_name: pair.day.display_name.clone(),
            night_name: pair.night.display_name.clone(),
        })
    }
}
