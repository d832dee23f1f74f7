//! Text and JSON rendering of diff trees.
//!
//! The text view is a two-column table in the spirit of a tree widget:
//! nested rows are indented two spaces per level and multi-line values
//! (hex dumps) continue on the following lines under their column.

use crate::diff::{DiffNode, DiffTree};
use crate::error::{PatchDiffError, Result};

/// Column headings of the text view.
pub const HEADER: [&str; 3] = ["Parameter", "Left", "Right"];

const INDENT: &str = "  ";
const COLUMN_GAP: &str = "  ";

struct Row {
    label: String,
    left: Vec<String>,
    right: Vec<String>,
}

impl Row {
    fn header() -> Self {
        Self {
            label: HEADER[0].to_string(),
            left: vec![HEADER[1].to_string()],
            right: vec![HEADER[2].to_string()],
        }
    }

    fn from_node(node: &DiffNode, depth: usize) -> Self {
        let split = |value: &Option<String>| -> Vec<String> {
            value
                .as_deref()
                .map(|v| v.lines().map(str::to_string).collect())
                .unwrap_or_default()
        };
        Self {
            label: format!("{}{}{}", INDENT.repeat(depth), node.label, node.comment),
            left: split(&node.left),
            right: split(&node.right),
        }
    }
}

fn collect_rows(node: &DiffNode, depth: usize, rows: &mut Vec<Row>) {
    rows.push(Row::from_node(node, depth));
    for child in &node.children {
        collect_rows(child, depth + 1, rows);
    }
}

/// Render a tree as an aligned text table with a heading row.
pub fn render_text(tree: &DiffTree) -> String {
    let mut rows = vec![Row::header()];
    collect_rows(&tree.root, 0, &mut rows);

    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    let left_width = rows
        .iter()
        .flat_map(|r| r.left.iter())
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        let height = row.left.len().max(row.right.len()).max(1);
        for i in 0..height {
            let label = if i == 0 { row.label.as_str() } else { "" };
            let left = row.left.get(i).map(String::as_str).unwrap_or("");
            let right = row.right.get(i).map(String::as_str).unwrap_or("");
            let line = format!(
                "{:<lw$}{gap}{:<vw$}{gap}{}",
                label,
                left,
                right,
                lw = label_width,
                vw = left_width,
                gap = COLUMN_GAP
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

/// Render a tree as pretty-printed JSON.
pub fn render_json(tree: &DiffTree) -> Result<String> {
    serde_json::to_string_pretty(tree)
        .map_err(|e| PatchDiffError::UserError(format!("failed to serialize diff to JSON: {}", e)))
}
