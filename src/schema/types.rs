//! Schema data model: field kinds, field definitions and struct definitions.

use crate::error::{PatchDiffError, Result};
use std::fmt;

/// Type token for an unsigned byte.
pub const BYTE_TOKEN: &str = "uint8_t";

/// Type token for a little-endian unsigned 16-bit value.
pub const UINT16LE_TOKEN: &str = "uint16le";

/// Type token for fixed-length text.
pub const TEXT_TOKEN: &str = "char";

/// The kind of value a field holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 8-bit unsigned value.
    Byte,
    /// 16-bit unsigned value, low byte first.
    UInt16LE,
    /// Fixed-length byte run decoded as UTF-8.
    Text,
    /// Reference to another struct by qualified name.
    Struct(String),
}

impl FieldKind {
    /// Map a primitive type token to its kind.
    ///
    /// Returns `None` for anything that is not one of the three primitive
    /// tokens; such tokens name other structs.
    pub fn primitive(token: &str) -> Option<Self> {
        match token {
            BYTE_TOKEN => Some(Self::Byte),
            UINT16LE_TOKEN => Some(Self::UInt16LE),
            TEXT_TOKEN => Some(Self::Text),
            _ => None,
        }
    }

    /// The type token as it would be written in a schema.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Byte => BYTE_TOKEN,
            Self::UInt16LE => UINT16LE_TOKEN,
            Self::Text => TEXT_TOKEN,
            Self::Struct(name) => name,
        }
    }
}

/// A single field of a struct, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as declared.
    pub name: String,
    /// Value kind.
    pub kind: FieldKind,
    /// Element count; 1 for scalars.
    pub count: usize,
    /// Trailing `//` comment with a leading space, or empty.
    pub comment: String,
}

impl FieldDef {
    /// Create a field definition.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        count: usize,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            count,
            comment: comment.into(),
        }
    }

    /// Whether this field is a fixed-size array.
    pub fn is_array(&self) -> bool {
        self.count > 1
    }

    /// Fail for layouts the decoder cannot handle.
    ///
    /// Arrays of `uint16le` are rejected rather than guessed at.
    pub fn check_supported(&self) -> Result<()> {
        if self.kind == FieldKind::UInt16LE && self.is_array() {
            return Err(PatchDiffError::Unsupported(format!(
                "field '{}' is an array of {} {} values; arrays of {} cannot be decoded",
                self.name, self.count, UINT16LE_TOKEN, UINT16LE_TOKEN
            )));
        }
        Ok(())
    }
}

impl fmt::Display for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array() {
            write!(
                f,
                "{} {}[{}]{}",
                self.kind.type_name(),
                self.name,
                self.count,
                self.comment
            )
        } else {
            write!(f, "{} {}{}", self.kind.type_name(), self.name, self.comment)
        }
    }
}

/// A struct definition: a qualified name and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Name including enclosing struct prefix (`Outer::Inner`).
    pub qualified_name: String,
    /// Fields in binary layout order.
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    /// Create an empty struct definition.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }
}
