//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::warn;

use crate::app::{Invocation, Mode};
use crate::config::Paths;
use crate::selector::Selection;

/// Generate Vimium C stylesheets from Oasis day/night palette pairs.
///
/// Without --day and --night, prompts for both themes.
#[derive(Debug, Clone, Parser)]
#[command(name = "oasis-vimiumc", version, about, long_about = None)]
pub struct Cli {
    /// Day theme id (normally a light theme)
    #[arg(short, long, value_name = "THEME")]
    pub day: Option<String>,

    /// Night theme id (normally a dark theme)
    #[arg(short, long, value_name = "THEME")]
    pub night: Option<String>,

    /// List all available themes
    #[arg(short, long)]
    pub list: bool,

    /// Directory containing mappings/, the template and output/
    #[arg(long, value_name = "DIR", env = "OASIS_VIMIUMC_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Palette directory [default: <ROOT>/mappings]
    #[arg(long, value_name = "DIR")]
    pub mappings_dir: Option<PathBuf>,

    /// Stylesheet template [default: <ROOT>/vimium-c.css.jinja]
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output directory [default: <ROOT>/output]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Which mode the flags ask for.
    ///
    /// `--list` wins over everything else. Explicit selection needs both
    /// ids; a single id is ignored and both roles are prompted for.
    pub fn mode(&self) -> Mode {
        if self.list {
            return Mode::List;
        }

        let selection = match (&self.day, &self.night) {
            (Some(day), Some(night)) => Selection::Explicit {
                day: day.clone(),
                night: night.clone(),
            },
            (None, None) => Selection::Interactive,
            _ => {
                warn!("both --day and --night are needed to skip prompting; ignoring the one given");
                Selection::Interactive
            }
        };
        Mode::Generate(selection)
    }

    pub fn paths(&self) -> Paths {
        let mut paths = Paths::under(&self.root);
        if let Some(dir) = &self.mappings_dir {
            paths = paths.with_mappings_dir(dir);
        }
        if let Some(file) = &self.template {
            paths = paths.with_template_file(file);
        }
        if let Some(dir) = &self.output_dir {
            paths = paths.with_output_dir(dir);
        }
        paths
    }

    pub fn invocation(&self) -> Invocation {
        Invocation {
            mode: self.mode(),
            paths: self.paths(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROOT_ENV;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("oasis-vimiumc").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_is_interactive() {
        assert_eq!(parse(&[]).mode(), Mode::Generate(Selection::Interactive));
    }

    #[test]
    fn both_ids_is_explicit() {
        let cli = parse(&["-d", "l1", "--night", "d1"]);
        assert_eq!(
            cli.mode(),
            Mode::Generate(Selection::Explicit {
                day: "l1".into(),
                night: "d1".into()
            })
        );
    }

    #[test]
    fn single_id_falls_back_to_interactive() {
        assert_eq!(
            parse(&["--day", "l1"]).mode(),
            Mode::Generate(Selection::Interactive)
        );
        assert_eq!(
            parse(&["-n", "d1"]).mode(),
            Mode::Generate(Selection::Interactive)
        );
    }

    #[test]
    fn list_wins() {
        assert_eq!(parse(&["-l", "-d", "l1", "-n", "d1"]).mode(), Mode::List);
    }

    #[test]
    fn paths_default_under_root() {
        let cli = parse(&["--root", "/themes"]);
        assert_eq!(cli.paths(), Paths::under("/themes"));
    }

    #[test]
    fn path_overrides() {
        let cli = parse(&[
            "--root",
            "/themes",
            "--mappings-dir",
            "/m",
            "--template",
            "/t.jinja",
            "--output-dir",
            "/o",
        ]);
        let paths = cli.paths();
        assert_eq!(paths.mappings_dir, PathBuf::from("/m"));
        assert_eq!(paths.template_file, PathBuf::from("/t.jinja"));
        assert_eq!(paths.output_dir, PathBuf::from("/o"));
    }

    #[test]
    fn root_reads_environment_variable() {
        let cmd = Cli::command();
        let root = cmd.get_arguments().find(|a| a.get_id() == "root").unwrap();
        assert_eq!(root.get_env(), Some(std::ffi::OsStr::new(ROOT_ENV)));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(parse(&[]).log_filter(), "warn");
        assert_eq!(parse(&["-v"]).log_filter(), "info");
        assert_eq!(parse(&["-vvv"]).log_filter(), "debug");
    }

    #[test]
    fn missing_theme_value_is_rejected() {
        assert!(Cli::try_parse_from(["oasis-vimiumc", "--day"]).is_err());
    }
}
