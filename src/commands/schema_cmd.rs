//! Implementation of the `patchdiff schema` command.

use crate::cli::SchemaArgs;
use patchdiff::config::Config;
use patchdiff::error::Result;
use patchdiff::schema::{self, SchemaRegistry, StructDef};
use std::path::PathBuf;
use tracing::debug;

/// Execute the `patchdiff schema` command.
pub fn cmd_schema(args: SchemaArgs, config: &Config) -> Result<()> {
    let path = args
        .schema
        .unwrap_or_else(|| PathBuf::from(&config.schema));
    let registry = schema::parse_file(&path)?;
    print!("{}", describe(&registry, args.root.as_deref())?);
    Ok(())
}

/// List structs with their byte sizes and fields.
///
/// With `root`, only that struct is listed and it must resolve.
fn describe(registry: &SchemaRegistry, root: Option<&str>) -> Result<String> {
    let defs: Vec<&StructDef> = match root {
        Some(name) => vec![registry.resolve(name)?],
        None => registry.iter().collect(),
    };

    let mut out = String::new();
    for def in defs {
        let size = match registry.byte_size(&def.qualified_name) {
            Ok(bytes) => format!("{} bytes", bytes),
            Err(e) => {
                debug!(name = %def.qualified_name, error = %e, "cannot size struct");
                "size unknown".to_string()
            }
        };
        out.push_str(&format!("struct {} ({})\n", def.qualified_name, size));
        for field in &def.fields {
            out.push_str(&format!("  {}\n", field));
        }
    }
    Ok(out)
}
