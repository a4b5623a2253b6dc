//! # Highcard CLI Library
//!
//! Command-line front end for the high-card engine: play wagered sessions,
//! inspect decks and the RNG, and summarize round logs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play wagered rounds against the house
//! - `deal`: Draw cards from a freshly shuffled deck
//! - `rng`: Print a sample from the seeded RNG
//! - `stats`: Summarize JSONL round logs
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, HighcardCli};
use commands::{
    PlayArgs, handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["highcard", "deal", "--seed", "42"];
/// let code = highcard_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HighcardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            bet,
            seed,
            balance,
            tie_rule,
            output,
        } => handle_play_command(
            PlayArgs {
                rounds,
                bet,
                seed,
                balance,
                tie_rule,
                output,
            },
            out,
            err,
        ),
        Commands::Deal { seed, count } => handle_deal_command(seed, count, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Stats { input, list } => handle_stats_command(&input, list, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}
