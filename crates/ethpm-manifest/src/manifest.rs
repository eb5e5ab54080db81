//! The package manifest aggregate and its mutators

use crate::validate::check_header;
use crate::{CompilerInformation, ContractInstance, ContractType, DependencyResolver, ManifestValidator, PackageMeta};
use ethpm_core::{MANIFEST_VERSION, ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Instances deployed on one chain, keyed by instance name
pub type ChainDeployments = BTreeMap<String, ContractInstance>;

/// An EthPM v2 package manifest
///
/// Fields are declared in key order so serialization yields sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub contract_types: BTreeMap<String, ContractType>,

    /// Keyed by BIP-122 blockchain URI
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub deployments: BTreeMap<String, ChainDeployments>,

    #[serde(default)]
    pub manifest_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PackageMeta>,

    #[serde(default)]
    pub package_name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, String>,

    #[serde(default)]
    pub version: String,
}

impl PackageManifest {
    /// An empty manifest for `package_name` at `version`, not yet validated
    pub fn new(package_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            manifest_version: MANIFEST_VERSION.to_string(),
            package_name: package_name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Like [`PackageManifest::new`], rejecting an invalid name or version
    pub fn create(package_name: impl Into<String>, version: impl Into<String>) -> ManifestResult<Self> {
        let manifest = Self::new(package_name, version);
        check_header(&manifest)?;
        Ok(manifest)
    }

    /// Parse manifest JSON without validating it
    pub fn from_json(json: &str) -> ManifestResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse manifest JSON, set the manifest version to `"2"`, and validate
    pub fn build_from_json<R: DependencyResolver>(
        json: &str,
        validator: &ManifestValidator<R>,
    ) -> ManifestResult<Self> {
        let mut manifest = Self::from_json(json)?;
        manifest.manifest_version = MANIFEST_VERSION.to_string();
        validator.validate(&manifest)?;
        Ok(manifest)
    }

    pub fn to_json(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_dependency(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        self.build_dependencies.insert(name.into(), uri.into());
    }

    pub fn add_source(&mut self, path: impl Into<String>, uri: impl Into<String>) {
        self.sources.insert(path.into(), uri.into());
    }

    pub fn add_deployment(
        &mut self,
        blockchain_uri: impl Into<String>,
        name: impl Into<String>,
        instance: ContractInstance,
    ) {
        self.deployments
            .entry(blockchain_uri.into())
            .or_default()
            .insert(name.into(), instance);
    }

    /// Add `contract_name` from standard-JSON compiler output as a contract type.
    ///
    /// Source files are searched in sorted order and the first match wins.
    pub fn add_contract_type(
        &mut self,
        compiler: CompilerInformation,
        compiler_output_json: &str,
        contract_name: &str,
    ) -> ManifestResult<()> {
        let output: CompilerOutput = serde_json::from_str(compiler_output_json).map_err(|e| {
            ManifestError::format(format!(
                "Error getting contract type from JSON for '{contract_name}': '{e}'"
            ))
        })?;

        let contract = output
            .contracts
            .values()
            .find_map(|contracts| contracts.get(contract_name))
            .ok_or_else(|| {
                ManifestError::format(format!(
                    "contract '{contract_name}' was not found in the compiler output"
                ))
            })?;

        let contract_type = ContractType::from_standard_json(Some(compiler), contract)?;
        self.contract_types.insert(contract_name.to_string(), contract_type);
        Ok(())
    }

    /// Record every `*.<extension>` file in `dir` as a source located at `<prefix><file>`.
    ///
    /// An empty `prefix` means `./`. Returns the number of sources added.
    pub fn add_local_paths_for_sources(
        &mut self,
        dir: &Path,
        prefix: &str,
        extension: &str,
    ) -> ManifestResult<usize> {
        let prefix = normalize_prefix(prefix);
        let files = source_files(dir, extension)?;
        for name in &files {
            let key = format!("{prefix}{name}");
            self.sources.insert(key.clone(), key);
        }
        Ok(files.len())
    }

    /// Embed the text of every `*.<extension>` file in `dir` under `<prefix><file>`.
    ///
    /// Inlined text is not a location, so validation rejects these entries.
    pub fn inline_sources(&mut self, dir: &Path, prefix: &str, extension: &str) -> ManifestResult<usize> {
        let prefix = normalize_prefix(prefix);
        let files = source_files(dir, extension)?;
        for name in &files {
            let text = fs::read_to_string(dir.join(name))?;
            self.sources.insert(format!("{prefix}{name}"), text);
        }
        Ok(files.len())
    }
}

#[derive(Deserialize)]
struct CompilerOutput {
    #[serde(default)]
    contracts: BTreeMap<String, BTreeMap<String, Value>>,
}

fn normalize_prefix(prefix: &str) -> String {
    match prefix {
        "" => "./".to_string(),
        p if p.ends_with('/') => p.to_string(),
        p => format!("{p}/"),
    }
}

/// Names of regular files in `dir` with the given extension, sorted
fn source_files(dir: &Path, extension: &str) -> ManifestResult<Vec<String>> {
    let extension = extension.trim_start_matches('.');
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    debug!(dir = %dir.display(), count = names.len(), "Collected source files");
    Ok(names)
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
