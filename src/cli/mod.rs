//! CLI module for pawswipe.
//!
//! Call [`run_cli_command`] early in main(), before the terminal is set up:
//!
//! ```ignore
//! use pawswipe::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(());
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_string, VERSION};

/// Handle informational commands.
///
/// Returns the run options when the TUI should start, or `None` after
/// printing version or help.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            None
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
