//! Helpers for `0x`-prefixed hex strings (bytecode, literal link values)

use crate::{ManifestError, ManifestResult};

/// Prefix used by every hex field in a manifest.
pub const HEX_PREFIX: &str = "0x";

/// True for the two spellings of "no bytecode recorded": `""` and `"0x"`.
pub fn is_empty_bytecode(s: &str) -> bool {
    s.is_empty() || s == HEX_PREFIX
}

/// Strip a `0x`/`0X` prefix if present.
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Check that `s` is a `0x`-prefixed, non-empty, even-length hex string.
///
/// Non-hex input and odd-length input are reported with distinct messages.
pub fn check_hex(s: &str) -> ManifestResult<()> {
    let has_prefix = s.starts_with("0x") || s.starts_with("0X");
    let digits = strip_prefix(s);
    if !has_prefix || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ManifestError::format(
            "Does not conform to a hexadecimal string",
        ));
    }
    if s.len() % 2 != 0 {
        return Err(ManifestError::format(format!(
            "The string does not contain 2 characters per byte, length is showing '{}'",
            s.len()
        )));
    }
    Ok(())
}

/// Number of bytes encoded by a `0x`-prefixed hex string: `(len - 2) / 2`.
pub fn byte_len(s: &str) -> usize {
    s.len().saturating_sub(HEX_PREFIX.len()) / 2
}
