//! Configuration types and defaults for patchdiff.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "patchdiff.yaml";

/// How the diff tree is printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned two-column table (default).
    #[default]
    Text,
    /// Pretty-printed JSON tree.
    Json,
}

pub(super) fn default_schema() -> String {
    "JD-08.patchdef".to_string()
}

pub(super) fn default_root_struct() -> String {
    "PatchVST".to_string()
}

pub(super) fn default_root_label() -> String {
    "Patch".to_string()
}
