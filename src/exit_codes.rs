//! Exit code constants for the patchdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: Schema error (missing schema, unresolvable struct)
//! - 3: Unsupported layout (arrays of 16-bit values)
//! - 4: Decode error (invalid text bytes, truncated buffer)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input files, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Schema error: definition text absent or a struct name cannot be resolved.
pub const SCHEMA_FAILURE: i32 = 2;

/// The schema declares a layout the decoder does not support.
pub const UNSUPPORTED_FAILURE: i32 = 3;

/// Patch bytes could not be decoded against the schema.
pub const DECODE_FAILURE: i32 = 4;
