//! Patchdiff: field-level diff of binary synthesizer patches.
//!
//! This is the main entry point for the `patchdiff` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;

// The binary only uses the file helpers; the fixtures serve the library tests.
#[cfg(test)]
#[allow(dead_code)]
#[path = "test_support.rs"]
mod test_support;

use cli::Cli;
use patchdiff::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
