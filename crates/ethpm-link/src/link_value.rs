//! Values written into placeholders of linked bytecode

use crate::{DependencyLengths, check_no_overlap};
use ethpm_core::grammar::check_dependency_tree;
use ethpm_core::hexstr::{byte_len, check_hex};
use ethpm_core::{ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};

const LITERAL: &str = "literal";
const REFERENCE: &str = "reference";

/// What a [`LinkValue`] writes into its offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Raw `0x` hex bytes
    Literal(String),
    /// Address of a contract instance, as a dependency tree path (`pkg:Name` or `Name`)
    Reference(String),
}

impl LinkTarget {
    pub fn type_name(&self) -> &'static str {
        match self {
            LinkTarget::Literal(_) => LITERAL,
            LinkTarget::Reference(_) => REFERENCE,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            LinkTarget::Literal(v) | LinkTarget::Reference(v) => v,
        }
    }
}

/// A link value: where it is written and what is written there
///
/// Serialized as `{"offsets": [...], "type": "literal"|"reference", "value": "..."}`.
/// Any other `type` is rejected while deserializing, so a manifest carrying one
/// fails to parse at all. That error has no `deployment[..]` context path and
/// is reported before any header check of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLinkValue", into = "RawLinkValue")]
pub struct LinkValue {
    pub offsets: Vec<usize>,
    pub target: LinkTarget,
}

#[derive(Serialize, Deserialize)]
struct RawLinkValue {
    #[serde(default)]
    offsets: Vec<usize>,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    value: String,
}

impl TryFrom<RawLinkValue> for LinkValue {
    type Error = ManifestError;

    fn try_from(raw: RawLinkValue) -> Result<Self, Self::Error> {
        let target = match raw.kind.as_str() {
            LITERAL => LinkTarget::Literal(raw.value),
            REFERENCE => LinkTarget::Reference(raw.value),
            "" => {
                return Err(ManifestError::format(
                    "Field 'type' is required and showing empty string",
                ));
            }
            other => {
                return Err(ManifestError::format(format!(
                    "Field 'type' needs to be one of 'literal' or 'reference' with no \
                     whitespace. Showing value as '{other}'"
                )));
            }
        };
        Ok(Self {
            offsets: raw.offsets,
            target,
        })
    }
}

impl From<LinkValue> for RawLinkValue {
    fn from(value: LinkValue) -> Self {
        let kind = value.target.type_name().to_string();
        let value_str = match value.target {
            LinkTarget::Literal(v) | LinkTarget::Reference(v) => v,
        };
        Self {
            offsets: value.offsets,
            kind,
            value: value_str,
        }
    }
}

impl LinkValue {
    pub fn literal(value: impl Into<String>, offsets: Vec<usize>) -> Self {
        Self {
            offsets,
            target: LinkTarget::Literal(value.into()),
        }
    }

    pub fn reference(value: impl Into<String>, offsets: Vec<usize>) -> Self {
        Self {
            offsets,
            target: LinkTarget::Reference(value.into()),
        }
    }

    pub fn value(&self) -> &str {
        self.target.value()
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.target, LinkTarget::Reference(_))
    }

    /// Number of bytes this value writes at each offset.
    ///
    /// Literals use their own byte length. References are looked up in
    /// `dependency_lengths`; a missing entry is a resolution error.
    pub fn fill_length(&self, dependency_lengths: &DependencyLengths) -> ManifestResult<usize> {
        match &self.target {
            LinkTarget::Literal(v) => Ok(byte_len(v)),
            LinkTarget::Reference(v) => dependency_lengths.get(v).copied().ok_or_else(|| {
                ManifestError::resolution(v.as_str(), "no resolved byte length for this reference")
            }),
        }
    }

    pub fn validate(&self, dependency_lengths: &DependencyLengths) -> ManifestResult<()> {
        if self.value().is_empty() {
            return Err(ManifestError::format(
                "Field 'value' is required and showing empty string",
            ));
        }

        match &self.target {
            LinkTarget::Literal(v) => check_hex(v).map_err(|_| {
                ManifestError::format(
                    "'type' is declared as 'literal' and field 'value' does not conform \
                     to a hexadecimal string",
                )
            })?,
            LinkTarget::Reference(v) => check_dependency_tree(v).map_err(|_| {
                ManifestError::format(
                    "'type' is declared as 'reference' and field 'value' does not conform \
                     to the dependency tree standard found here \
                     https://ethpm.github.io/ethpm-spec/package-spec.html#value-value",
                )
            })?,
        }

        if self.offsets.is_empty() {
            return Err(ManifestError::format(
                "Field 'offsets' is required and must contain at least one value",
            ));
        }

        let length = self.fill_length(dependency_lengths)?;
        check_no_overlap(&self.offsets, length)
    }
}
