//! Loading patch records from files.
//!
//! A patch file is read whole and the record window `[offset, offset + size)`
//! is cut out of it. The window size comes from the schema, so the walker
//! always receives a buffer of exactly the layout's width.

use crate::error::{PatchDiffError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A patch record inside a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSource {
    /// File containing the record.
    pub path: PathBuf,
    /// Byte offset of the record within the file.
    pub offset: usize,
}

impl PatchSource {
    /// Describe the record at `offset` in `path`.
    pub fn new(path: impl AsRef<Path>, offset: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            offset,
        }
    }

    /// Read `size` bytes of the record.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Exactly `size` bytes
    /// * `Err(PatchDiffError::UserError)` - The file cannot be read or is too short
    pub fn load(&self, size: usize) -> Result<Vec<u8>> {
        let data = std::fs::read(&self.path).map_err(|e| {
            PatchDiffError::UserError(format!(
                "failed to read patch file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let window = self
            .offset
            .checked_add(size)
            .and_then(|end| data.get(self.offset..end))
            .ok_or_else(|| {
                PatchDiffError::UserError(format!(
                    "patch file '{}' is {} bytes; need {} bytes at offset {:#x}",
                    self.path.display(),
                    data.len(),
                    size,
                    self.offset
                ))
            })?;

        debug!(path = %self.path.display(), offset = self.offset, size, "loaded patch record");
        Ok(window.to_vec())
    }
}
