//! Diff tree and filter option types.

use serde::{Deserialize, Serialize};

/// Which rows a diff keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Drop leaves whose left and right values are equal.
    /// Ignored when there is no right buffer.
    pub diff_only: bool,
    /// Keep leaves whose field name contains `unknown`.
    pub show_unknown: bool,
    /// Keep struct sections whose field name contains `Precomputed`.
    pub show_precomputed: bool,
}

impl FilterOptions {
    /// Options that keep every row.
    pub fn show_all() -> Self {
        Self {
            diff_only: false,
            show_unknown: true,
            show_precomputed: true,
        }
    }
}

/// One row of the diff tree.
///
/// Leaves carry decoded values on both sides; containers (structs and array
/// elements) carry none and hold their rows in `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffNode {
    /// Field name, `name[i]` for array elements.
    pub label: String,
    /// Schema comment of the field (with leading space), or empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Decoded value from the left buffer.
    pub left: Option<String>,
    /// Decoded value from the right buffer.
    pub right: Option<String>,
    /// Child rows in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DiffNode>,
}

impl DiffNode {
    /// Create a leaf row.
    pub fn leaf(
        label: impl Into<String>,
        comment: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            comment: comment.into(),
            left: Some(left.into()),
            right: Some(right.into()),
            children: Vec::new(),
        }
    }

    /// Create an empty container row.
    pub fn container(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            comment: String::new(),
            left: None,
            right: None,
            children: Vec::new(),
        }
    }

    /// Whether this row holds a decoded value.
    pub fn is_leaf(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    /// Whether this row is a struct or array element section.
    pub fn is_container(&self) -> bool {
        !self.is_leaf()
    }

    /// Whether the two sides of a leaf decoded differently.
    pub fn differs(&self) -> bool {
        self.left != self.right
    }

    /// All leaves below this node, depth-first in declaration order.
    pub fn leaves(&self) -> Vec<&DiffNode> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a DiffNode>) {
        if self.is_leaf() {
            out.push(self);
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// Number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Find a descendant by dotted label path, e.g. `tones[1].level`.
    pub fn find(&self, path: &str) -> Option<&DiffNode> {
        path.split('.').try_fold(self, |node, label| {
            node.children.iter().find(|child| child.label == label)
        })
    }
}

/// Result of one diff request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffTree {
    /// Root row: the requested struct, or an informational leaf.
    pub root: DiffNode,
    /// Bytes consumed by the walk (the shared cursor's final position).
    pub consumed: usize,
}
