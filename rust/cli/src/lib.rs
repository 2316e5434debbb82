//! # holdem CLI Library
//!
//! Command-line driver for the hold'em round engine. It seats players,
//! invokes the round transitions in order and prints the resulting table
//! state; the engine itself never writes to the terminal.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42", "--to", "flop"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single hand up to a chosen round and display it
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{DealOptions, handle_cfg_command, handle_deal_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses `args` (including the program name) and dispatches to the matching
/// subcommand, writing results to `out` and diagnostics to `err`.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
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
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: holdem <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: holdem --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal {
            seed,
            players,
            chips,
            to,
            json,
            log,
        } => handle_deal_command(
            DealOptions {
                seed,
                players,
                chips,
                to,
                json,
                log,
            },
            out,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_every_subcommand() {
        for args in [
            vec!["holdem", "cfg"],
            vec!["holdem", "deal"],
            vec!["holdem", "deal", "--player", "A", "--player", "B", "--to", "turn"],
        ] {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn test_unknown_round_is_rejected() {
        assert!(HoldemCli::try_parse_from(["holdem", "deal", "--to", "showdown"]).is_err());
    }

    #[test]
    fn test_deal_flags_reach_the_handler() {
        let cli = HoldemCli::try_parse_from([
            "holdem", "deal", "--seed", "9", "--chips", "50", "--json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Deal {
                seed, chips, json, ..
            } => {
                assert_eq!(seed, Some(9));
                assert_eq!(chips, Some(50));
                assert!(json);
            }
            _ => panic!("expected Commands::Deal variant"),
        }
    }
}
