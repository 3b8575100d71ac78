//! Error types for stylesheet rendering.
//!
//! [`RenderError`] is the only error the render pipeline returns. Template
//! engine errors are converted into it, so callers never see MiniJinja types.

use std::io;
use std::path::PathBuf;

/// Error type for rendering and writing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template syntax error, undefined variable, or other engine failure.
    #[error("template error: {0}")]
    Template(String),

    /// Reading the template or writing the stylesheet failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two palette fields mapped to the same template variable.
    #[error("template variable '{key}' is bound twice; rename the color role")]
    BindingConflict { key: String },
}

impl RenderError {
    /// Create an I/O error tagged with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}
