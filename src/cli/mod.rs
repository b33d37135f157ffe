// CLI module
// Command-line interface, argument parsing and the demonstration scenario

mod args;
pub mod demo;

pub use args::{CliArgs, Command, StoreType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or --help), clap displays
/// an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
