//! Implementation of the `patchdiff diff` command.
//!
//! Loads the schema, cuts the patch record out of each input file, diffs
//! the records and prints the tree. Command-line values take precedence over
//! the config file; a filter flag turns its filter on.

use crate::cli::DiffArgs;
use patchdiff::config::{Config, OutputFormat};
use patchdiff::diff::{FilterOptions, diff_labeled};
use patchdiff::error::Result;
use patchdiff::patch::PatchSource;
use patchdiff::render::{render_json, render_text};
use patchdiff::schema;
use std::path::PathBuf;
use tracing::{info, warn};

/// Execute the `patchdiff diff` command.
pub fn cmd_diff(args: DiffArgs, config: &Config) -> Result<()> {
    let output = run_diff(&args, config)?;
    print!("{}", output);
    Ok(())
}

/// Compute the rendered diff for `args`.
fn run_diff(args: &DiffArgs, config: &Config) -> Result<String> {
    let schema_path = args
        .schema
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.schema));
    let registry = schema::parse_file(&schema_path)?;
    info!(schema = %schema_path.display(), structs = registry.len(), "schema loaded");

    let root = args.root.as_deref().unwrap_or(&config.root_struct);
    let label = args.label.as_deref().unwrap_or(&config.root_label);
    let offset = args.offset.unwrap_or(config.offset);
    let size = registry.byte_size(root)?;

    let left = PatchSource::new(&args.left, offset).load(size)?;
    let right = args
        .right
        .as_ref()
        .map(|path| PatchSource::new(path, offset).load(size))
        .transpose()?;

    let options = filter_options(args, config);
    if options.diff_only && right.is_none() {
        warn!("diff_only has no effect when a single patch is shown");
    }

    let tree = diff_labeled(
        Some(left.as_slice()),
        right.as_deref(),
        root,
        label,
        &registry,
        options,
    )?;

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => Ok(render_text(&tree)),
        OutputFormat::Json => render_json(&tree).map(|json| json + "\n"),
    }
}

/// Merge filter flags with the config defaults.
fn filter_options(args: &DiffArgs, config: &Config) -> FilterOptions {
    let defaults = config.filters;
    FilterOptions {
        diff_only: args.diff_only || defaults.diff_only,
        show_unknown: args.show_unknown || defaults.show_unknown,
        show_precomputed: args.show_precomputed || defaults.show_precomputed,
    }
}
