//! Error types for the generator.
//!
//! Every error here is fatal: the binary prints it once and exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;

use oasis_input::InputError;
use oasis_render::RenderError;

use crate::selector::Role;

/// Which configuration file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Index,
    Palette,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "index file"),
            Self::Palette => write!(f, "theme file"),
        }
    }
}

/// The catalog index or a palette file is missing or unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{resource} not found: {}", .path.display())]
    NotFound { resource: Resource, path: PathBuf },

    #[error("failed to parse {resource} {}: {message}", .path.display())]
    Parse {
        resource: Resource,
        path: PathBuf,
        message: String,
    },

    #[error("failed to read {resource} {}: {source}", .path.display())]
    Read {
        resource: Resource,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Classify an I/O error from reading `path`.
    pub fn from_io(resource: Resource, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { resource, path }
        } else {
            Self::Read {
                resource,
                path,
                source,
            }
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. } | Self::Parse { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Interactive theme selection failed.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The answer was outside the offered range.
    #[error("Invalid selection for {role} theme: {choice} (expected 1-{max})")]
    InvalidChoice { role: Role, choice: i64, max: usize },

    #[error(transparent)]
    Prompt(#[from] InputError),
}

/// Any failure of a generator run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the listing or the success report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
