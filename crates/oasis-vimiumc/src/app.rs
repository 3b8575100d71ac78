//! Running one invocation end to end.

use std::io::Write;

use console::style;
use log::info;
use oasis_input::TerminalIO;
use oasis_render::{GeneratedStylesheet, StylesheetRenderer};

use crate::catalog::{Catalog, PaletteSummary};
use crate::config::Paths;
use crate::error::Error;
use crate::selector::{Selection, ThemeSelector};

/// What a run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the catalog and exit.
    List,
    /// Select a pair and write its stylesheet.
    Generate(Selection),
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub paths: Paths,
}

/// Runs an invocation.
///
/// Prompts go through `terminal`; the listing and the success report are
/// written to `out`. Returns the generated stylesheet, or `None` in list mode.
pub fn run<T: TerminalIO, W: Write>(
    invocation: &Invocation,
    terminal: T,
    out: &mut W,
) -> Result<Option<GeneratedStylesheet>, Error> {
    let paths = &invocation.paths;
    let catalog = Catalog::load(&paths.mappings_dir)?;

    match &invocation.mode {
        Mode::List => {
            write_listing(&catalog, out)?;
            Ok(None)
        }
        Mode::Generate(selection) => {
            let pair = ThemeSelector::new(&catalog, terminal).select(selection)?;
            info!("day: {}, night: {}", pair.day.name, pair.night.name);

            let renderer = StylesheetRenderer::new(&paths.template_file, &paths.output_dir);
            let generated = renderer.generate(&pair)?;
            write_report(&generated, out)?;
            Ok(Some(generated))
        }
    }
}

/// Writes every catalog entry, grouped by category.
pub fn write_listing<W: Write>(catalog: &Catalog, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n=== Oasis Vimium-C Themes ===")?;
    write_group(out, "Light Themes", catalog.light_themes())?;
    write_group(out, "Dark Themes", catalog.dark_themes())?;
    writeln!(out)
}

fn write_group<W: Write>(
    out: &mut W,
    title: &str,
    themes: &[PaletteSummary],
) -> std::io::Result<()> {
    writeln!(out, "\n{}:", title)?;
    for (i, theme) in themes.iter().enumerate() {
        writeln!(out, "  {}. {} ({})", i + 1, theme.name, theme.id)?;
    }
    Ok(())
}

/// Writes the success summary for a generated stylesheet.
pub fn write_report<W: Write>(
    generated: &GeneratedStylesheet,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(
        out,
        "\n{} Generated: {}",
        style("✓").green(),
        generated.path.display()
    )?;
    writeln!(out, "  Day theme: {}", generated.day_name)?;
    writeln!(out, "  Night theme: {}\n", generated.night_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn catalog_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.json"),
            r#"{
                "light_themes": [{"id": "l1", "name": "oasis_sand"}],
                "dark_themes": [{"id": "d1", "name": "oasis_ink"}, {"id": "d2", "name": "oasis_coal"}]
            }"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn listing_groups_by_category() {
        let dir = catalog_dir();
        let catalog = Catalog::load(dir.path()).unwrap();
        let mut out = Vec::new();

        write_listing(&catalog, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n=== Oasis Vimium-C Themes ===\n\
             \nLight Themes:\n  1. oasis_sand (l1)\n\
             \nDark Themes:\n  1. oasis_ink (d1)\n  2. oasis_coal (d2)\n\n"
        );
    }

    #[test]
    fn report_names_path_and_themes() {
        let generated = GeneratedStylesheet {
            path: PathBuf::from("/out/vimiumc-ink-sand.css"),
            day_name: "Oasis Sand".into(),
            night_name: "Oasis Ink".into(),
        };
        let mut out = Vec::new();

        write_report(&generated, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Generated: /out/vimiumc-ink-sand.css\n"));
        assert!(text.contains("  Day theme: Oasis Sand\n"));
        assert!(text.ends_with("  Night theme: Oasis Ink\n\n"));
    }
}
