//! Recursive-descent parser for struct definition text.

use super::helpers::{LogicalLine, logical_lines, parse_field_line, resolve_kind, struct_header};
use super::registry::{NAMESPACE_SEPARATOR, SchemaRegistry};
use super::types::{FieldDef, StructDef};
use crate::error::{PatchDiffError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Compile struct definition text into a registry.
///
/// Lines outside a struct that do not open one are ignored. A struct whose
/// closing brace is missing runs to the end of the input.
///
/// # Returns
///
/// * `Ok(SchemaRegistry)` - Every struct found, nested ones included
/// * `Err(PatchDiffError::Schema)` - Empty text, no struct found, or a
///   malformed field declaration
pub fn parse(source: &str) -> Result<SchemaRegistry> {
    if source.trim().is_empty() {
        return Err(PatchDiffError::Schema(
            "struct definition text is empty".to_string(),
        ));
    }

    let lines = logical_lines(source);
    let mut registry = SchemaRegistry::new();
    let mut idx = 0;

    while idx < lines.len() {
        match struct_header(&lines[idx].text) {
            Some(name) => idx = parse_struct(&lines, idx + 1, name, "", &mut registry)?,
            None => idx += 1,
        }
    }

    if registry.is_empty() {
        return Err(PatchDiffError::Schema(
            "no struct definitions found".to_string(),
        ));
    }

    debug!(structs = registry.len(), "parsed schema");
    Ok(registry)
}

/// Read and compile a schema file.
///
/// # Returns
///
/// * `Ok(SchemaRegistry)` - The compiled schema
/// * `Err(PatchDiffError::Schema)` - The file does not exist or does not parse
/// * `Err(PatchDiffError::UserError)` - The file exists but cannot be read
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SchemaRegistry> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            PatchDiffError::Schema(format!("schema file not found: {}", path.display()))
        }
        _ => PatchDiffError::UserError(format!(
            "failed to read schema file '{}': {}",
            path.display(),
            e
        )),
    })?;

    debug!(path = %path.display(), lines = source.lines().count(), "reading schema");
    parse(&source)
}

/// Parse one struct body starting just after its header line.
///
/// Returns the index of the first line after the struct's closing brace.
fn parse_struct(
    lines: &[LogicalLine],
    mut idx: usize,
    bare_name: &str,
    namespace: &str,
    registry: &mut SchemaRegistry,
) -> Result<usize> {
    let mut def = StructDef::new(format!("{}{}", namespace, bare_name));
    debug!(name = %def.qualified_name, "struct");

    while idx < lines.len() {
        let line = &lines[idx];
        idx += 1;

        match line.text.as_str() {
            "{" => continue,
            "}" => {
                registry.insert(def);
                return Ok(idx);
            }
            _ => {}
        }

        if let Some(nested) = struct_header(&line.text) {
            let nested_namespace = format!("{}{}", bare_name, NAMESPACE_SEPARATOR);
            idx = parse_struct(lines, idx, nested, &nested_namespace, registry)?;
            continue;
        }

        let parsed = parse_field_line(&line.text, line.line_number)?;
        def.add_field(FieldDef::new(
            parsed.name,
            resolve_kind(&parsed.type_token, bare_name),
            parsed.count,
            line.comment.clone(),
        ));
    }

    // Missing closing brace: the struct runs to end of input.
    registry.insert(def);
    Ok(idx)
}
