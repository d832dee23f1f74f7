//! Helper functions for schema parsing.

use super::registry::NAMESPACE_SEPARATOR;
use super::types::FieldKind;
use crate::error::{PatchDiffError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `OUTER<ELEM, COUNT> name`, e.g. `std::array<uint8_t, 4> data`.
static TEMPLATE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<outer>[A-Za-z_][\w:]*)\s*<\s*(?P<elem>[A-Za-z_][\w:]*)\s*,\s*(?P<count>[^>]*?)\s*>\s*(?P<name>\S.*?)$",
    )
    .expect("Invalid template field regex")
});

/// `TYPE name[COUNT]`, e.g. `char name[16]`.
static C_ARRAY_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ty>[A-Za-z_][\w:]*)\s+(?P<name>[A-Za-z_]\w*)\s*\[\s*(?P<count>[^\]]*?)\s*\]$")
        .expect("Invalid array field regex")
});

/// `TYPE name`.
static SCALAR_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ty>[A-Za-z_][\w:]*)\s+(?P<name>\S.*?)$").expect("Invalid scalar field regex")
});

/// One declaration extracted from the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LogicalLine {
    /// Declaration text without its terminator, trimmed.
    pub text: String,
    /// Comment from the physical line (leading space included), or empty.
    pub comment: String,
    /// 1-based physical line number, for error messages.
    pub line_number: usize,
}

/// A field declaration before type qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ParsedField {
    pub type_token: String,
    pub name: String,
    pub count: usize,
}

/// Split a physical line into code and `//` comment.
///
/// The comment is returned verbatim with a leading space so it can be
/// appended directly after a field name; it is empty when there is none.
pub(super) fn split_comment(line: &str) -> (&str, String) {
    match line.find("//") {
        Some(pos) => (line[..pos].trim(), format!(" {}", line[pos..].trim_end())),
        None => (line.trim(), String::new()),
    }
}

/// Break schema source into logical lines.
///
/// Declarations end at `;`, and braces always stand on their own line, so
/// `struct P { uint8_t a; }` yields `struct P`, `{`, `uint8_t a`, `}`.
/// A physical line's comment is attached to its last declaration.
pub(super) fn logical_lines(source: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_number = idx + 1;
        let (code, comment) = split_comment(raw);
        let first = lines.len();
        let mut segment = String::new();

        for ch in code.chars() {
            match ch {
                ';' => flush_segment(&mut lines, &mut segment, line_number),
                '{' | '}' => {
                    flush_segment(&mut lines, &mut segment, line_number);
                    lines.push(LogicalLine {
                        text: ch.to_string(),
                        comment: String::new(),
                        line_number,
                    });
                }
                _ => segment.push(ch),
            }
        }
        flush_segment(&mut lines, &mut segment, line_number);

        if !comment.is_empty()
            && let Some(last) = lines[first..]
                .iter_mut()
                .rev()
                .find(|l| !is_brace(&l.text))
        {
            last.comment = comment;
        }
    }

    lines
}

fn flush_segment(lines: &mut Vec<LogicalLine>, segment: &mut String, line_number: usize) {
    let text = segment.trim();
    if !text.is_empty() {
        lines.push(LogicalLine {
            text: text.to_string(),
            comment: String::new(),
            line_number,
        });
    }
    segment.clear();
}

pub(super) fn is_brace(text: &str) -> bool {
    text == "{" || text == "}"
}

/// Return the bare struct name if `text` opens a struct declaration.
pub(super) fn struct_header(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("struct")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    (!name.is_empty()).then_some(name)
}

/// Parse a field declaration in template, C-array, or scalar form.
///
/// # Returns
///
/// * `Ok(ParsedField)` - Type token, field name and element count
/// * `Err(PatchDiffError::Schema)` - No form matched, or the count is not a
///   positive integer
pub(super) fn parse_field_line(text: &str, line_number: usize) -> Result<ParsedField> {
    if let Some(caps) = TEMPLATE_FIELD.captures(text) {
        let outer = &caps["outer"];
        // `uint16le<arr, 4>` names its element type first.
        let type_token = if FieldKind::primitive(outer).is_some() {
            outer
        } else {
            &caps["elem"]
        };
        return Ok(ParsedField {
            type_token: type_token.to_string(),
            name: caps["name"].to_string(),
            count: parse_count(&caps["count"], line_number)?,
        });
    }

    if let Some(caps) = C_ARRAY_FIELD.captures(text) {
        return Ok(ParsedField {
            type_token: caps["ty"].to_string(),
            name: caps["name"].to_string(),
            count: parse_count(&caps["count"], line_number)?,
        });
    }

    if let Some(caps) = SCALAR_FIELD.captures(text) {
        return Ok(ParsedField {
            type_token: caps["ty"].to_string(),
            name: caps["name"].to_string(),
            count: 1,
        });
    }

    Err(PatchDiffError::Schema(format!(
        "line {}: expected a field declaration 'TYPE name', found '{}'",
        line_number, text
    )))
}

fn parse_count(count: &str, line_number: usize) -> Result<usize> {
    match count.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PatchDiffError::Schema(format!(
            "line {}: array count must be a positive integer, found '{}'",
            line_number, count
        ))),
    }
}

/// Turn a type token into a field kind.
///
/// Primitive tokens map directly. Any other token without a namespace is
/// qualified with the declaring struct's bare name; resolution falls back to
/// the unqualified name when no such nested struct exists.
pub(super) fn resolve_kind(type_token: &str, enclosing: &str) -> FieldKind {
    if let Some(kind) = FieldKind::primitive(type_token) {
        return kind;
    }
    if type_token.contains(NAMESPACE_SEPARATOR) {
        FieldKind::Struct(type_token.to_string())
    } else {
        FieldKind::Struct(format!("{}{}{}", enclosing, NAMESPACE_SEPARATOR, type_token))
    }
}
