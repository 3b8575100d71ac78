use std::io;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use env_logger::{Builder, Env};
use log::debug;
use oasis_input::RealTerminal;
use oasis_vimiumc::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    let invocation = cli.invocation();
    match run(&invocation, RealTerminal, &mut io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
