//! Command implementations for patchdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod diff_cmd;
mod init;
mod schema_cmd;

use crate::cli::{Cli, Command};
use patchdiff::config::Config;
use patchdiff::error::Result;

/// Dispatch a command to its implementation.
///
/// `init` runs without loading the config so it can replace a broken one.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init(args) => init::cmd_init(args),
        Command::Diff(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            diff_cmd::cmd_diff(args, &config)
        }
        Command::Schema(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            schema_cmd::cmd_schema(args, &config)
        }
    }
}
