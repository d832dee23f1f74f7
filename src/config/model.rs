//! Config struct definition and default implementation.

use super::types::*;
use crate::diff::FilterOptions;
use serde::{Deserialize, Serialize};

/// Configuration for patchdiff.
///
/// This struct represents the contents of `patchdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the struct definition file.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Struct the patch records are interpreted as.
    #[serde(default = "default_root_struct")]
    pub root_struct: String,

    /// Label of the root row in the diff tree.
    #[serde(default = "default_root_label")]
    pub root_label: String,

    /// Byte offset of the patch record within each input file.
    #[serde(default)]
    pub offset: usize,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Default row filters.
    #[serde(default)]
    pub filters: FilterOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            root_struct: default_root_struct(),
            root_label: default_root_label(),
            offset: 0,
            format: OutputFormat::default(),
            filters: FilterOptions::default(),
        }
    }
}
