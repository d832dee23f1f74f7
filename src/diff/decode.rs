//! Fixed-width field decoding.

use crate::error::{PatchDiffError, Result};
use crate::schema::{FieldDef, FieldKind};

/// Bytes per line in a hex dump.
const HEX_BYTES_PER_LINE: usize = 8;

/// Lowercase hex, one line per 8 bytes.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(HEX_BYTES_PER_LINE)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width in bytes of a non-struct field.
pub(super) fn scalar_width(field: &FieldDef) -> Result<usize> {
    field.check_supported()?;
    Ok(match field.kind {
        FieldKind::UInt16LE => 2,
        _ => field.count,
    })
}

/// Decode a non-struct field at `offset`.
///
/// # Returns
///
/// * `Ok(String)` - Display value for the field
/// * `Err(PatchDiffError::Decode)` - Buffer too short, or text is not UTF-8
/// * `Err(PatchDiffError::Unsupported)` - The field is a `uint16le` array
pub(super) fn decode_scalar(buf: &[u8], offset: usize, field: &FieldDef) -> Result<String> {
    let width = scalar_width(field)?;
    let bytes = read_bytes(buf, offset, width, field)?;

    match &field.kind {
        FieldKind::Byte if field.count == 1 => Ok(bytes[0].to_string()),
        FieldKind::Byte => Ok(hex_dump(bytes)),
        FieldKind::UInt16LE => Ok(u16::from_le_bytes([bytes[0], bytes[1]]).to_string()),
        FieldKind::Text => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                PatchDiffError::Decode(format!(
                    "field '{}' at offset {} is not valid UTF-8: {}",
                    field.name, offset, e
                ))
            })?;
            Ok(format!("'{}'", text))
        }
        FieldKind::Struct(name) => Err(PatchDiffError::Schema(format!(
            "field '{}' refers to struct '{}' and has no scalar value",
            field.name, name
        ))),
    }
}

fn read_bytes<'a>(buf: &'a [u8], offset: usize, width: usize, field: &FieldDef) -> Result<&'a [u8]> {
    offset
        .checked_add(width)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| {
            PatchDiffError::Decode(format!(
                "buffer of {} bytes ends before field '{}' ({} bytes at offset {})",
                buf.len(),
                field.name,
                width,
                offset
            ))
        })
}
