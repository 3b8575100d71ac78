//! File locations.
//!
//! Everything lives under one root directory by default:
//!
//! ```text
//! <root>/
//! ├── mappings/
//! │   ├── index.json
//! │   └── <id>.json
//! ├── vimium-c.css.jinja
//! └── output/
//! ```
//!
//! Each location can be overridden on its own.

use std::path::{Path, PathBuf};

/// Environment variable naming the root directory.
pub const ROOT_ENV: &str = "OASIS_VIMIUMC_ROOT";

/// Default palette directory, relative to the root.
pub const MAPPINGS_DIR: &str = "mappings";

/// Default template file, relative to the root.
pub const TEMPLATE_FILE: &str = "vimium-c.css.jinja";

/// Default output directory, relative to the root.
pub const OUTPUT_DIR: &str = "output";

/// Resolved input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub mappings_dir: PathBuf,
    pub template_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Paths {
    /// The default layout under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            mappings_dir: root.join(MAPPINGS_DIR),
            template_file: root.join(TEMPLATE_FILE),
            output_dir: root.join(OUTPUT_DIR),
        }
    }

    pub fn with_mappings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mappings_dir = dir.into();
        self
    }

    pub fn with_template_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.template_file = file.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
