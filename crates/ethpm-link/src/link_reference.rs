//! Named placeholder locations inside bytecode

use crate::check_no_overlap;
use ethpm_core::grammar::check_contract_name;
use ethpm_core::{ErrorContext, ManifestResult};
use serde::{Deserialize, Serialize};

/// One `{start, length}` entry of a compiler's `linkReferences` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerLinkOffset {
    pub start: usize,
    pub length: usize,
}

/// A placeholder of `length` bytes repeated at each of `offsets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    pub length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub offsets: Vec<usize>,
}

impl LinkReference {
    pub fn new(name: Option<String>, length: usize, offsets: Vec<usize>) -> Self {
        Self {
            length,
            name,
            offsets,
        }
    }

    /// Build from one contract's compiler entries.
    ///
    /// The length comes from the first entry; every entry contributes its start.
    pub fn from_compiler_entries(name: &str, entries: &[CompilerLinkOffset]) -> Self {
        let name = (!name.is_empty()).then(|| name.to_string());
        let length = entries.first().map(|e| e.length).unwrap_or_default();
        let offsets = entries.iter().map(|e| e.start).collect();

        Self::new(name, length, offsets)
    }

    pub fn validate(&self) -> ManifestResult<()> {
        check_no_overlap(&self.offsets, self.length)?;

        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            check_contract_name(name).context("LinkReference:name")?;
        }
        Ok(())
    }

    /// Byte ranges `[offset, offset + length)` claimed by this reference
    pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offsets
            .iter()
            .map(|&offset| (offset, offset.saturating_add(self.length)))
    }
}

#[cfg(test)]
#[path = "link_reference/link_reference_tests.rs"]
mod link_reference_tests;
