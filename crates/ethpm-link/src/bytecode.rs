//! Unlinked and linked bytecode objects

use crate::{DependencyLengths, LinkReference, LinkValue, StandardJsonBytecode, zero_link_locations};
use ethpm_core::hexstr::{byte_len, check_hex, is_empty_bytecode};
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Compiled bytecode whose library placeholders have not been filled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkedBytecode {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bytecode: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_references: Vec<LinkReference>,
}

impl UnlinkedBytecode {
    pub fn new(bytecode: impl Into<String>, link_references: Vec<LinkReference>) -> Self {
        Self {
            bytecode: bytecode.into(),
            link_references,
        }
    }

    /// Build from a compiler bytecode object, zeroing every placeholder range.
    pub fn from_compiler_output(output: &StandardJsonBytecode) -> ManifestResult<Self> {
        let link_references = output.flatten_link_references();
        let bytecode = zero_link_locations(&output.object, &link_references)?;
        debug!(
            references = link_references.len(),
            bytes = byte_len(&bytecode),
            "Built unlinked bytecode from compiler output"
        );
        Ok(Self::new(bytecode, link_references))
    }

    /// Parse a standard-JSON bytecode object and build from it
    pub fn from_compiler_json(json: &str) -> ManifestResult<Self> {
        Self::from_compiler_output(&StandardJsonBytecode::from_json(json)?)
    }

    pub fn is_empty(&self) -> bool {
        is_empty_bytecode(&self.bytecode)
    }

    pub fn validate(&self) -> ManifestResult<()> {
        check_bytecode(&self.bytecode, "unlinked_bytecode:bytecode")?;
        check_link_references(&self.bytecode, &self.link_references)
    }
}

/// Deployed or runtime bytecode together with the values filling its placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedBytecode {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bytecode: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_dependencies: Vec<LinkValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_references: Vec<LinkReference>,
}

impl LinkedBytecode {
    pub fn new(bytecode: impl Into<String>) -> Self {
        Self {
            bytecode: bytecode.into(),
            ..Self::default()
        }
    }

    pub fn add_link_references(&mut self, references: impl IntoIterator<Item = LinkReference>) {
        self.link_references.extend(references);
    }

    pub fn add_link_dependencies(&mut self, values: impl IntoIterator<Item = LinkValue>) {
        self.link_dependencies.extend(values);
    }

    pub fn is_empty(&self) -> bool {
        is_empty_bytecode(&self.bytecode)
    }

    /// Link values whose byte length must be resolved from another manifest
    pub fn reference_values(&self) -> impl Iterator<Item = &str> {
        self.link_dependencies
            .iter()
            .filter(|v| v.is_reference())
            .map(|v| v.value())
    }

    pub fn validate(&self, dependency_lengths: &DependencyLengths) -> ManifestResult<()> {
        check_bytecode(&self.bytecode, "linked_bytecode:bytecode")?;
        check_link_references(&self.bytecode, &self.link_references)?;

        let code_len = byte_len(&self.bytecode);
        for (k, value) in self.link_dependencies.iter().enumerate() {
            value
                .validate(dependency_lengths)
                .with_context(|| format!("link_dependency at position '{k}'"))?;

            let length = value.fill_length(dependency_lengths)?;
            for (i, &offset) in value.offsets.iter().enumerate() {
                if offset.saturating_add(length) >= code_len {
                    return Err(ManifestError::bounds(format!(
                        "link_dependency at position '{k}' has invalid length for offset at \
                         position {i}. Offset '{offset}' plus '{length}' is out of bounds for \
                         the bytecode."
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_bytecode(bytecode: &str, context: &str) -> ManifestResult<()> {
    if is_empty_bytecode(bytecode) {
        return Err(ManifestError::format("bytecode empty and is a required field"));
    }
    check_hex(bytecode).context(context)
}

fn check_link_references(bytecode: &str, references: &[LinkReference]) -> ManifestResult<()> {
    let code_len = byte_len(bytecode);
    for (k, reference) in references.iter().enumerate() {
        reference
            .validate()
            .with_context(|| format!("link_reference at position '{k}'"))?;

        for (i, &offset) in reference.offsets.iter().enumerate() {
            if offset.saturating_add(reference.length) >= code_len {
                return Err(ManifestError::bounds(format!(
                    "link_reference at position '{k}' has invalid length for offset at \
                     position {i}. Offset '{offset}' plus '{}' is out of bounds for the \
                     bytecode.",
                    reference.length
                )));
            }
        }
    }
    Ok(())
}
