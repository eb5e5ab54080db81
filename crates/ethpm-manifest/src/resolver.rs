//! Byte lengths of symbolic link references
//!
//! A reference is either the name of a contract instance in the same
//! deployment (`SafeMathLib`) or a dependency tree path
//! (`pkg-a:pkg-b:SafeMathLib`). Its byte length is the length of the
//! referenced instance's address.

use crate::{ChainDeployments, read_manifest};
use ethpm_core::grammar::check_dependency_tree;
use ethpm_core::hexstr::byte_len;
use ethpm_core::{DEFAULT_MAX_DEPENDENCY_MANIFEST_BYTES, DEPENDENCY_DIR, ManifestError, ManifestResult, ValidatorConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the byte length a `reference` link value writes
pub trait DependencyResolver {
    /// Resolve `reference` for an instance deployed on `blockchain_uri`.
    ///
    /// `local_instances` are the instances deployed alongside it on the same chain.
    fn resolve_length(
        &self,
        blockchain_uri: &str,
        local_instances: &ChainDeployments,
        reference: &str,
    ) -> ManifestResult<usize>;
}

/// Resolves dependency references from manifests installed under `<root>/ethpm-dependencies/`
///
/// `pkg-a:pkg-b:Name` is looked up in `<root>/ethpm-dependencies/pkg-a/pkg-b.json`.
#[derive(Debug, Clone)]
pub struct FsDependencyResolver {
    root: PathBuf,
    max_manifest_bytes: u64,
}

impl FsDependencyResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_manifest_bytes: DEFAULT_MAX_DEPENDENCY_MANIFEST_BYTES,
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> ManifestResult<Self> {
        Ok(Self::new(config.resolved_base_dir()?)
            .with_max_manifest_bytes(config.max_dependency_manifest_bytes))
    }

    pub fn with_max_manifest_bytes(mut self, max_manifest_bytes: u64) -> Self {
        self.max_manifest_bytes = max_manifest_bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Manifest file holding the last of `packages`, nested under the earlier ones
    pub fn manifest_path(&self, packages: &[&str]) -> PathBuf {
        let mut path = self.root.join(DEPENDENCY_DIR);
        if let Some((last, parents)) = packages.split_last() {
            for parent in parents {
                path.push(parent);
            }
            path.push(format!("{last}.json"));
        }
        path
    }
}

impl DependencyResolver for FsDependencyResolver {
    fn resolve_length(
        &self,
        blockchain_uri: &str,
        local_instances: &ChainDeployments,
        reference: &str,
    ) -> ManifestResult<usize> {
        if reference.is_empty() {
            return Ok(0);
        }
        check_dependency_tree(reference).map_err(|e| ManifestError::resolution(reference, e))?;

        let segments: Vec<&str> = reference.split(':').collect();
        let Some((name, packages)) = segments.split_last() else {
            return Ok(0);
        };

        if packages.is_empty() {
            return local_instances
                .get(*name)
                .map(|instance| byte_len(&instance.address))
                .ok_or_else(|| {
                    ManifestError::resolution(
                        reference,
                        format!("no contract instance named '{name}' is deployed on '{blockchain_uri}'"),
                    )
                });
        }

        let path = self.manifest_path(packages);
        debug!(reference, path = %path.display(), "Resolving dependency length");

        let manifest = read_manifest(&path, self.max_manifest_bytes).map_err(|e| {
            ManifestError::resolution(reference, format!("'{}': {e}", path.display()))
        })?;

        manifest
            .deployments
            .get(blockchain_uri)
            .and_then(|instances| instances.get(*name))
            .map(|instance| byte_len(&instance.address))
            .ok_or_else(|| {
                ManifestError::resolution(
                    reference,
                    format!(
                        "'{}' has no deployment of '{name}' on '{blockchain_uri}'",
                        path.display()
                    ),
                )
            })
    }
}

#[cfg(test)]
#[path = "resolver/resolver_tests.rs"]
mod resolver_tests;
