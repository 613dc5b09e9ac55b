// CLI module
// Command-line interface, argument parsing and command execution

mod args;
pub mod commands;

pub use args::{CliArgs, Command, MenuArgs, OutputFormat, RolePathArgs, StatementArgs};
pub use commands::run;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process itself.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
