//! Lock-step walk of two optional buffers over one struct layout.

use super::decode::{decode_scalar, scalar_width};
use super::types::{DiffNode, FilterOptions};
use crate::error::Result;
use crate::schema::{FieldDef, FieldKind, MAX_DEPTH, SchemaRegistry, too_deep};
use tracing::trace;

/// Field-name marker for fields of unknown meaning.
const UNKNOWN_MARKER: &str = "unknown";

/// Field-name marker for sections derived from other fields.
const PRECOMPUTED_MARKER: &str = "Precomputed";

/// The two buffers being compared. Either side may be absent.
#[derive(Debug, Clone, Copy)]
pub(super) struct Sides<'a> {
    pub left: Option<&'a [u8]>,
    pub right: Option<&'a [u8]>,
}

/// Recursive walker sharing one cursor between both sides.
pub(super) struct Walker<'a> {
    registry: &'a SchemaRegistry,
    sides: Sides<'a>,
    options: FilterOptions,
}

impl<'a> Walker<'a> {
    pub(super) fn new(
        registry: &'a SchemaRegistry,
        sides: Sides<'a>,
        mut options: FilterOptions,
    ) -> Self {
        // A single-buffer view always shows everything.
        if sides.right.is_none() {
            options.diff_only = false;
        }
        Self {
            registry,
            sides,
            options,
        }
    }

    /// Walk `struct_name` at `cursor`, advancing it by the struct's width.
    ///
    /// The returned container always has its label row; callers decide
    /// whether to keep it.
    pub(super) fn walk_struct(
        &self,
        label: String,
        struct_name: &str,
        cursor: &mut usize,
        depth: usize,
    ) -> Result<DiffNode> {
        if depth > MAX_DEPTH {
            return Err(too_deep(struct_name));
        }
        let def = self.registry.resolve(struct_name)?;
        trace!(name = %def.qualified_name, offset = *cursor, "walk");

        let mut node = DiffNode::container(label);
        for field in &def.fields {
            match &field.kind {
                FieldKind::Struct(nested) => {
                    // Zero-width elements read nothing and never keep a row.
                    if self.registry.byte_size(nested)? == 0 {
                        continue;
                    }
                    for i in 0..field.count {
                        let label = if field.is_array() {
                            format!("{}[{}]", field.name, i)
                        } else {
                            field.name.clone()
                        };
                        let child = self.walk_struct(label, nested, cursor, depth + 1)?;
                        if self.keep_container(field, &child) {
                            node.children.push(child);
                        }
                    }
                }
                _ => {
                    if let Some(leaf) = self.walk_scalar(field, cursor)? {
                        node.children.push(leaf);
                    }
                }
            }
        }

        Ok(node)
    }

    /// Decode one scalar field on each present side and build its row.
    ///
    /// The cursor advances by the field's width whether or not a row is kept.
    fn walk_scalar(&self, field: &FieldDef, cursor: &mut usize) -> Result<Option<DiffNode>> {
        let width = scalar_width(field)?;
        let offset = *cursor;
        let left = self
            .sides
            .left
            .map(|buf| decode_scalar(buf, offset, field))
            .transpose()?;
        let right = self
            .sides
            .right
            .map(|buf| decode_scalar(buf, offset, field))
            .transpose()?;
        *cursor += width;

        Ok(self.leaf_row(field, left, right))
    }

    fn leaf_row(
        &self,
        field: &FieldDef,
        left: Option<String>,
        right: Option<String>,
    ) -> Option<DiffNode> {
        if field.name.contains(UNKNOWN_MARKER) && !self.options.show_unknown {
            return None;
        }
        if self.options.diff_only && left == right {
            return None;
        }

        // With one side missing, both columns show the side that decoded.
        let left_value = left.clone().or_else(|| right.clone()).unwrap_or_default();
        let right_value = right.or(left).unwrap_or_default();
        Some(DiffNode::leaf(
            field.name.as_str(),
            field.comment.as_str(),
            left_value,
            right_value,
        ))
    }

    fn keep_container(&self, field: &FieldDef, child: &DiffNode) -> bool {
        let section_visible =
            self.options.show_precomputed || !field.name.contains(PRECOMPUTED_MARKER);
        section_visible && !child.children.is_empty()
    }
}
