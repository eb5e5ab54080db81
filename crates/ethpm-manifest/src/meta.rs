//! Package metadata

use ethpm_core::grammar::is_absolute_uri;
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The optional `meta` object of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMeta {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Named links such as `website` or `documentation`; values must be absolute URIs
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
}

impl PackageMeta {
    pub fn set_authors<I, S>(&mut self, authors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
    }

    pub fn add_link(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        self.links.insert(name.into(), uri.into());
    }

    pub fn validate(&self) -> ManifestResult<()> {
        self.check_links().context("PackageMeta:links")
    }

    fn check_links(&self) -> ManifestResult<()> {
        for (key, value) in &self.links {
            if !is_absolute_uri(value) {
                return Err(ManifestError::format(format!(
                    "Invalid uri contained in key '{key}'. It contains value '{value}', \
                     please change value to a valid absolute uri."
                )));
            }
        }
        Ok(())
    }
}
