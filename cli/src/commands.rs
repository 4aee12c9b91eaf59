pub mod list;
pub mod report;

use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "huizen")]
#[command(about = "Volume and price summaries for houses built from rectangular rooms.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Leave out headers and summaries
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Tax (BTW) percentage applied to every house
    #[arg(long, global = true, value_name = "PERCENT")]
    pub tax: Option<Decimal>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full report for every house, or a single one
    #[command(alias = "r")]
    Report { house: Option<String> },
    /// List the houses with their total price including tax
    #[command(alias = "l")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
