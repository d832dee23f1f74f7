//! Error types for patchdiff.
//!
//! Uses thiserror for derive macros. The three layout/decoding variants are
//! deterministic for a given input: retrying reproduces the same failure, so
//! callers report them instead of retrying.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for patchdiff operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchDiffError {
    /// Struct definition text is absent or malformed, or a struct name
    /// cannot be resolved even through the unqualified fallback.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The schema declares a layout that cannot be decoded (arrays of `uint16le`).
    #[error("Unsupported layout: {0}")]
    Unsupported(String),

    /// Patch bytes do not decode as the schema says they should.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Bad arguments, unreadable files, or invalid configuration.
    #[error("{0}")]
    UserError(String),
}

impl PatchDiffError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchDiffError::Schema(_) => exit_codes::SCHEMA_FAILURE,
            PatchDiffError::Unsupported(_) => exit_codes::UNSUPPORTED_FAILURE,
            PatchDiffError::Decode(_) => exit_codes::DECODE_FAILURE,
            PatchDiffError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for patchdiff operations.
pub type Result<T> = std::result::Result<T, PatchDiffError>;
