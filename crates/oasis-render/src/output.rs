//! Output naming and writing.
//!
//! Stylesheets are named `vimiumc-<night>-<day>.css`, night first, where
//! each part is the palette `name` with a leading `oasis_` removed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::palette::PalettePair;

/// Prefix removed from palette names when building filenames.
pub const NAME_PREFIX: &str = "oasis_";

/// Filename prefix of every generated stylesheet.
pub const FILE_PREFIX: &str = "vimiumc";

/// Filename extension of every generated stylesheet.
pub const FILE_EXTENSION: &str = "css";

/// A palette name with a leading [`NAME_PREFIX`] removed.
pub fn short_name(name: &str) -> &str {
    name.strip_prefix(NAME_PREFIX).unwrap_or(name)
}

/// The stylesheet filename for a pair.
pub fn output_file_name(pair: &PalettePair) -> String {
    format!(
        "{}-{}-{}.{}",
        FILE_PREFIX,
        short_name(&pair.night.name),
        short_name(&pair.day.name),
        FILE_EXTENSION
    )
}

/// The stylesheet path for a pair under `output_dir`.
pub fn output_path(output_dir: &Path, pair: &PalettePair) -> PathBuf {
    output_dir.join(output_file_name(pair))
}

/// Write `contents` to `path`, creating parent directories as needed.
///
/// An existing file is replaced.
pub fn write_stylesheet(path: &Path, contents: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| RenderError::io(path, e))
}
