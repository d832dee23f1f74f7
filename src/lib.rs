//! Patchdiff: schema-driven field-level diff of binary synthesizer patches.
//!
//! A patch layout is described in a C-like struct definition file. The
//! [`schema`] module compiles that text into a registry; the [`diff`] module
//! walks one or two patch records against it and produces a tree of
//! left/right values that [`render`] prints as text or JSON.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod patch;
pub mod render;
pub mod schema;

#[cfg(test)]
mod test_support;
