//! Shared fixtures for unit tests.

use std::path::{Path, PathBuf};

/// A small patch layout in the shape of a real synthesizer patch definition.
pub(crate) const PATCH_SCHEMA: &str = r#"// Test patch layout
#pragma once

struct Tone
{
    uint8_t level;        // 0-100
    uint8_t unknown1;
    uint16le pitchFine;
};

struct PatchVST
{
    char name[8];         // patch name
    std::array<uint8_t, 10> reserved;

    struct Common
    {
        uint8_t volume;
        uint8_t unknownFlags;
    };
    Common common;
    std::array<Tone, 2> tones;

    struct Cache
    {
        uint8_t sum;
    };
    Cache tonePrecomputed;
};
"#;

/// Byte size of `PatchVST` in [`PATCH_SCHEMA`].
pub(crate) const PATCH_SIZE: usize = 29;

/// Offsets into a `PatchVST` record.
pub(crate) const OFFSET_VOLUME: usize = 18;
pub(crate) const OFFSET_UNKNOWN_FLAGS: usize = 19;
pub(crate) const OFFSET_TONE0_LEVEL: usize = 20;
pub(crate) const OFFSET_TONE1_PITCH: usize = 26;
pub(crate) const OFFSET_PRECOMPUTED: usize = 28;

/// A valid `PatchVST` record.
pub(crate) fn sample_patch() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(PATCH_SIZE);
    bytes.extend_from_slice(b"Init Pad");
    bytes.extend(0u8..10);
    bytes.extend([100, 0]);
    bytes.extend([80, 7, 0x34, 0x12]);
    bytes.extend([90, 7, 0x00, 0x01]);
    bytes.push(170);
    assert_eq!(bytes.len(), PATCH_SIZE);
    bytes
}

/// Write `content` to `dir/name` and return the path.
pub(crate) fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
