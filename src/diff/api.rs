//! Public diff API.

use super::types::{DiffNode, DiffTree, FilterOptions};
use super::walker::{Sides, Walker};
use crate::error::Result;
use crate::schema::SchemaRegistry;
use tracing::debug;

/// Label of the informational row returned when neither buffer is present.
pub const NOTHING_TO_SHOW: &str = "Nothing to show";

/// Value shown on both sides of the informational row.
pub const NOT_AVAILABLE: &str = "n.a.";

/// Diff two buffers as `root`, labelling the root row with the struct name.
///
/// See [`diff_labeled`].
pub fn diff(
    left: Option<&[u8]>,
    right: Option<&[u8]>,
    root: &str,
    registry: &SchemaRegistry,
    options: FilterOptions,
) -> Result<DiffTree> {
    diff_labeled(left, right, root, root, registry, options)
}

/// Diff two buffers as struct `root`, labelling the root row `label`.
///
/// Both buffers are read with one shared cursor, so the sides stay aligned
/// even when only one is present. With no buffers at all, the tree is a
/// single informational leaf and `root` is not resolved.
///
/// # Returns
///
/// * `Ok(DiffTree)` - The filtered tree and the number of bytes walked
/// * `Err(PatchDiffError::Schema)` - `root` or a nested struct cannot be
///   resolved, or the layout size overflows `usize`
/// * `Err(PatchDiffError::Unsupported)` - The layout contains a `uint16le` array
/// * `Err(PatchDiffError::Decode)` - Text is not UTF-8, or a buffer is too short
pub fn diff_labeled(
    left: Option<&[u8]>,
    right: Option<&[u8]>,
    root: &str,
    label: &str,
    registry: &SchemaRegistry,
    options: FilterOptions,
) -> Result<DiffTree> {
    if left.is_none() && right.is_none() {
        return Ok(DiffTree {
            root: DiffNode::leaf(NOTHING_TO_SHOW, "", NOT_AVAILABLE, NOT_AVAILABLE),
            consumed: 0,
        });
    }

    // Rejects layouts whose size overflows before any element is walked.
    let size = registry.byte_size(root)?;
    let walker = Walker::new(registry, Sides { left, right }, options);
    let mut cursor = 0;
    let root_node = walker.walk_struct(label.to_string(), root, &mut cursor, 0)?;

    debug!(
        root,
        size,
        consumed = cursor,
        leaves = root_node.leaf_count(),
        "diff complete"
    );
    Ok(DiffTree {
        root: root_node,
        consumed: cursor,
    })
}
