//! Schema-driven structural diff of two patch buffers.
//!
//! This module walks one or two byte buffers against a struct from a
//! [`SchemaRegistry`](crate::schema::SchemaRegistry) and builds a
//! [`DiffTree`] of every field's left/right value.
//!
//! The walk is deterministic and supports:
//! - A single shared cursor for both buffers, so the two sides stay
//!   byte-aligned even when one is absent
//! - Bytes, little-endian 16-bit values, fixed-length text, byte arrays
//!   (as hex), nested structs and arrays of structs
//! - Row filtering: differences only, `unknown` fields, `Precomputed`
//!   sections

mod api;
mod decode;
mod types;
mod walker;


// Re-export public API
pub use api::{NOT_AVAILABLE, NOTHING_TO_SHOW, diff, diff_labeled};
pub use decode::hex_dump;
pub use types::{DiffNode, DiffTree, FilterOptions};
