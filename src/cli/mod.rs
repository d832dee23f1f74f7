//! CLI argument parsing for patchdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use patchdiff::config::OutputFormat;
use std::path::PathBuf;

/// Patchdiff: field-level diff of binary synthesizer patches.
///
/// Patch records are interpreted against a C-like struct definition file
/// and shown side by side, one row per field.
#[derive(Parser, Debug)]
#[command(name = "patchdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./patchdiff.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for patchdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two patch records, or show one.
    ///
    /// Both records are read at the same offset and decoded with the same
    /// struct layout. With a single file every field is shown.
    Diff(DiffArgs),

    /// List the structs of a schema with their sizes and fields.
    Schema(SchemaArgs),

    /// Write a patchdiff.yaml template.
    Init(InitArgs),
}

/// Arguments for the `diff` command.
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// File holding the left ("current") patch record.
    pub left: PathBuf,

    /// File holding the right ("other") patch record.
    pub right: Option<PathBuf>,

    /// Struct definition file.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Struct to interpret the records as.
    #[arg(long)]
    pub root: Option<String>,

    /// Label of the root row.
    #[arg(long)]
    pub label: Option<String>,

    /// Byte offset of the record in both files (decimal or 0x-prefixed hex).
    #[arg(long, value_parser = parse_offset)]
    pub offset: Option<usize>,

    /// Show only fields whose values differ.
    #[arg(long)]
    pub diff_only: bool,

    /// Show fields named "unknown".
    #[arg(long)]
    pub show_unknown: bool,

    /// Show precomputed sections.
    #[arg(long)]
    pub show_precomputed: bool,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `schema` command.
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Struct definition file.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Show only this struct.
    #[arg(long)]
    pub root: Option<String>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the template.
    #[arg(default_value = patchdiff::config::DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Parse a byte offset given in decimal or `0x` hex.
fn parse_offset(value: &str) -> Result<usize, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid offset '{}': {}", value, e))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_diff_minimal() {
        let cli = Cli::try_parse_from(["patchdiff", "diff", "a.svd"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("a.svd"));
            assert!(args.right.is_none());
            assert!(!args.diff_only);
            assert!(args.format.is_none());
        } else {
            panic!("Expected Diff command");
        }
    }

    #[test]
    fn parse_diff_full() {
        let cli = Cli::try_parse_from([
            "patchdiff",
            "-vv",
            "--config",
            "my.yaml",
            "diff",
            "a.svd",
            "b.svd",
            "--schema",
            "JD-08.patchdef",
            "--root",
            "PatchVST",
            "--offset",
            "0x168270",
            "--diff-only",
            "--show-unknown",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.right, Some(PathBuf::from("b.svd")));
            assert_eq!(args.root.as_deref(), Some("PatchVST"));
            assert_eq!(args.offset, Some(0x168270));
            assert!(args.diff_only);
            assert!(args.show_unknown);
            assert!(!args.show_precomputed);
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Diff command");
        }
    }

    #[test]
    fn parse_schema_and_init() {
        let cli = Cli::try_parse_from(["patchdiff", "schema", "--root", "Tone"]).unwrap();
        assert!(matches!(cli.command, Command::Schema(ref a) if a.root.as_deref() == Some("Tone")));

        let cli = Cli::try_parse_from(["patchdiff", "init", "--force"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(args.force);
            assert_eq!(args.path, PathBuf::from("patchdiff.yaml"));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn offset_accepts_decimal_and_hex() {
        assert_eq!(parse_offset("16"), Ok(16));
        assert_eq!(parse_offset("0x10"), Ok(16));
        assert!(parse_offset("sixteen").is_err());
    }

    #[test]
    fn diff_requires_left_file() {
        assert!(Cli::try_parse_from(["patchdiff", "diff"]).is_err());
    }
}
