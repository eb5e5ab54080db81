//! Compiler `evm.bytecode` output and placeholder zero-filling

use crate::{CompilerLinkOffset, LinkReference};
use ethpm_core::hexstr::{HEX_PREFIX, strip_prefix};
use ethpm_core::{ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `linkReferences` keyed by source file, then by library contract name
pub type CompilerLinkReferences = BTreeMap<String, BTreeMap<String, Vec<CompilerLinkOffset>>>;

/// The bytecode object emitted by a standard-JSON compiler run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardJsonBytecode {
    #[serde(rename = "linkReferences", default)]
    pub link_references: CompilerLinkReferences,

    #[serde(default)]
    pub object: String,
}

impl StandardJsonBytecode {
    pub fn from_json(json: &str) -> ManifestResult<Self> {
        let parsed: Option<Self> = serde_json::from_str(json).map_err(|e| {
            ManifestError::format(format!(
                "Error parsing standard json bytecode object: '{e}'"
            ))
        })?;
        parsed.ok_or_else(|| ManifestError::format("No bytecode received in json string"))
    }

    /// Flatten into one [`LinkReference`] per library, ordered by file then contract.
    pub fn flatten_link_references(&self) -> Vec<LinkReference> {
        self.link_references
            .values()
            .flat_map(|contracts| contracts.iter())
            .map(|(name, entries)| LinkReference::from_compiler_entries(name, entries))
            .collect()
    }
}

/// Overwrite every byte range claimed by `references` with zeros.
///
/// Compiler objects carry `__$...$__` placeholders that are not hex, so the
/// object is rewritten as text. The prefix is normalized to `0x` and offsets are
/// counted in bytes after it. Ranges extending past the object are rejected.
pub fn zero_link_locations(object: &str, references: &[LinkReference]) -> ManifestResult<String> {
    if object.is_empty() {
        return Ok(String::new());
    }
    if !object.is_ascii() {
        return Err(ManifestError::format(
            "compiler bytecode object contains non-ASCII characters",
        ));
    }

    let mut code = format!("{HEX_PREFIX}{}", strip_prefix(object));

    for reference in references {
        let width = reference.length.saturating_mul(2);

        for (offset, end_byte) in reference.ranges() {
            let start = offset
                .checked_mul(2)
                .and_then(|s| s.checked_add(HEX_PREFIX.len()));
            let end = start.and_then(|s| s.checked_add(width));

            match (start, end) {
                (Some(start), Some(end)) if end <= code.len() => {
                    code.replace_range(start..end, &"0".repeat(width));
                }
                _ => {
                    return Err(ManifestError::bounds(format!(
                        "link reference '{}' claims bytes {offset}..{end_byte} beyond the end \
                         of the compiler bytecode object",
                        reference.name.as_deref().unwrap_or_default()
                    )));
                }
            }
        }
    }
    Ok(code)
}
