//! The schema registry and its name resolver.

use super::types::{FieldDef, FieldKind, StructDef};
use crate::error::{PatchDiffError, Result};
use std::collections::BTreeMap;

/// Separator between an enclosing struct name and a nested one.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Maximum struct nesting followed when sizing or walking a layout.
pub const MAX_DEPTH: usize = 64;

/// Text after the last namespace separator, or the whole name.
pub fn unqualified(name: &str) -> &str {
    match name.rsplit_once(NAMESPACE_SEPARATOR) {
        Some((_, bare)) => bare,
        None => name,
    }
}

/// Struct definitions keyed by qualified name.
///
/// Built once by the parser and read-only afterwards, so a single registry
/// can serve any number of diff requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    structs: BTreeMap<String, StructDef>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a struct, replacing any earlier definition of the same name.
    pub fn insert(&mut self, def: StructDef) {
        self.structs.insert(def.qualified_name.clone(), def);
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    /// Resolve a struct name.
    ///
    /// Tries the exact name first, then falls back to the unqualified
    /// suffix (see [`SchemaRegistry::resolve_unqualified`]).
    ///
    /// # Returns
    ///
    /// * `Ok(&StructDef)` - The resolved definition
    /// * `Err(PatchDiffError::Schema)` - Nothing matched either step
    pub fn resolve(&self, name: &str) -> Result<&StructDef> {
        if let Some(def) = self.structs.get(name) {
            return Ok(def);
        }
        self.resolve_unqualified(name)
            .ok_or_else(|| PatchDiffError::Schema(format!("struct not found: {}", name)))
    }

    /// Second resolution step: look up the bare suffix of `name`.
    ///
    /// A top-level struct with that bare name wins. Otherwise the first
    /// nested struct (in qualified-name order) whose own suffix matches
    /// is returned.
    pub fn resolve_unqualified(&self, name: &str) -> Option<&StructDef> {
        let bare = unqualified(name);
        self.structs.get(bare).or_else(|| {
            self.structs
                .values()
                .find(|def| unqualified(&def.qualified_name) == bare)
        })
    }

    /// Total byte width of a struct.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Sum of all field widths, nested structs included
    /// * `Err(PatchDiffError::Schema)` - A referenced struct is missing, or
    ///   nesting exceeds [`MAX_DEPTH`]
    /// * `Err(PatchDiffError::Unsupported)` - The layout has a `uint16le` array
    pub fn byte_size(&self, name: &str) -> Result<usize> {
        self.size_at_depth(name, 0)
    }

    fn size_at_depth(&self, name: &str, depth: usize) -> Result<usize> {
        if depth > MAX_DEPTH {
            return Err(too_deep(name));
        }
        let def = self.resolve(name)?;
        let mut total: usize = 0;
        for field in &def.fields {
            total = total
                .checked_add(self.field_size(field, depth)?)
                .ok_or_else(|| overflow(&def.qualified_name))?;
        }
        Ok(total)
    }

    fn field_size(&self, field: &FieldDef, depth: usize) -> Result<usize> {
        field.check_supported()?;
        match &field.kind {
            FieldKind::Byte | FieldKind::Text => Ok(field.count),
            FieldKind::UInt16LE => Ok(2),
            FieldKind::Struct(nested) => self
                .size_at_depth(nested, depth + 1)?
                .checked_mul(field.count)
                .ok_or_else(|| overflow(&field.name)),
        }
    }

    /// Qualified names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structs.keys().map(String::as_str)
    }

    /// All definitions in qualified-name order.
    pub fn iter(&self) -> impl Iterator<Item = &StructDef> {
        self.structs.values()
    }

    /// Number of registered structs.
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// Whether no struct is registered.
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

/// Error for layouts whose byte size does not fit in `usize`.
fn overflow(name: &str) -> PatchDiffError {
    PatchDiffError::Schema(format!("layout size overflows at '{}'", name))
}

/// Error for layouts nested deeper than [`MAX_DEPTH`].
pub(crate) fn too_deep(name: &str) -> PatchDiffError {
    PatchDiffError::Schema(format!(
        "struct nesting deeper than {} levels at '{}' (does a struct contain itself?)",
        MAX_DEPTH, name
    ))
}
