//! Struct-definition schemas for binary patch layouts.
//!
//! This module compiles C-like struct definition text into a
//! [`SchemaRegistry`] that the diff walker interprets patch bytes against.
//!
//! Supported input:
//! - `struct Name { ... };` blocks, nested to any depth
//! - Scalar fields (`uint8_t level;`)
//! - Fixed-size arrays in template form (`std::array<uint8_t, 4> data;`)
//!   or C form (`char name[16];`)
//! - `//` trailing comments, kept with the field they annotate
//!
//! Nested structs are registered under their enclosing struct's name
//! (`Outer::Inner`), and lookups fall back to the unqualified name.

mod helpers;
mod parser;
mod registry;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::{parse, parse_file};
pub use registry::{MAX_DEPTH, NAMESPACE_SEPARATOR, SchemaRegistry, unqualified};
pub(crate) use registry::too_deep;
pub use types::{FieldDef, FieldKind, StructDef};
