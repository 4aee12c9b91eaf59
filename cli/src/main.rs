mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, list, report};
use huizen_common::config::Config;
use tracing::error;

use crate::terminal::logging;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    let mut cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        ..Config::default()
    };
    if let Some(tax) = commands.tax {
        cfg.tax_percentage = tax;
    }
    logging::init_logging(cfg.verbose);

    let result: anyhow::Result<()> = match commands.command {
        Some(Commands::List) => list::list(&cfg),
        Some(Commands::Report { house }) => report::report(house, &cfg),
        None => report::report(None, &cfg),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
