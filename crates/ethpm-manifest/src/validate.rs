//! Whole-manifest validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! manifest version, package name, version, meta, sources, contract types,
//! deployments, build dependencies. Maps are walked in key order, so the
//! reported error is deterministic. Validation never mutates the manifest.

use crate::{
    ChainDeployments, ContractType, DependencyResolver, FsDependencyResolver, PackageManifest,
};
use ethpm_core::grammar::{
    check_alias, check_bip122_uri, check_contract_name, check_package_name, check_semver,
    is_absolute_uri, is_relative_path,
};
use ethpm_core::{ErrorContext, MANIFEST_VERSION, ManifestError, ManifestResult, ValidatorConfig};
use ethpm_link::DependencyLengths;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SOURCES_SPEC_URL: &str =
    "https://ethpm.github.io/ethpm-spec/package-spec.html#sources-sources";
const BUILD_DEPENDENCIES_SPEC_URL: &str =
    "https://ethpm.github.io/ethpm-spec/package-spec.html#build-dependencies-build-dependencies";

/// Validates manifests, resolving link references through `R`
///
/// Local source and build dependency locations are checked relative to `base_dir`.
#[derive(Debug, Clone)]
pub struct ManifestValidator<R = FsDependencyResolver> {
    resolver: R,
    base_dir: PathBuf,
}

impl ManifestValidator<FsDependencyResolver> {
    /// A filesystem-backed validator rooted at the configured base directory
    pub fn from_config(config: &ValidatorConfig) -> ManifestResult<Self> {
        let resolver = FsDependencyResolver::from_config(config)?;
        let base_dir = resolver.root().to_path_buf();
        Ok(Self::new(resolver, base_dir))
    }
}

impl<R: DependencyResolver> ManifestValidator<R> {
    pub fn new(resolver: R, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            base_dir: base_dir.into(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn validate(&self, manifest: &PackageManifest) -> ManifestResult<()> {
        check_header(manifest)?;

        if let Some(meta) = &manifest.meta {
            meta.validate().context("PackageManifest:meta")?;
        }
        self.check_locations(&manifest.sources, SOURCES_SPEC_URL)
            .context("PackageManifest:sources")?;
        check_contract_types(&manifest.contract_types).context("PackageManifest:contract_types")?;
        self.check_deployments(manifest)
            .context("PackageManifest:deployments")?;
        self.check_locations(&manifest.build_dependencies, BUILD_DEPENDENCIES_SPEC_URL)
            .context("PackageManifest:build_dependencies")?;

        info!(
            package = %manifest.package_name,
            version = %manifest.version,
            "Manifest is valid"
        );
        Ok(())
    }

    /// Keys must be relative paths; values absolute URIs or existing local paths.
    fn check_locations(
        &self,
        entries: &BTreeMap<String, String>,
        spec_url: &str,
    ) -> ManifestResult<()> {
        for (key, location) in entries {
            if !is_absolute_uri(location) && !self.base_dir.join(location).exists() {
                return Err(ManifestError::format(format!(
                    "Source with key '{key}' and location value '{location}' does not exist or is \
                     unreachable. Please check the url or filepath and fix or consider contacting \
                     the maintainer."
                )));
            }
            if !is_relative_path(key) {
                return Err(ManifestError::format(format!(
                    "Invalid path for source key '{key}'. Please make this a relative path in \
                     accordance with the spec found here {spec_url}."
                )));
            }
        }
        Ok(())
    }

    fn check_deployments(&self, manifest: &PackageManifest) -> ManifestResult<()> {
        for (uri, instances) in &manifest.deployments {
            check_bip122_uri(uri).with_context(|| format!("deployment[{uri}]"))?;

            for (name, instance) in instances {
                let context = || format!("deployment[{uri}]:contract_instance[{name}]");

                check_contract_name(name).with_context(context)?;
                let lengths = self
                    .resolve_lengths(uri, instances, instance.link_references())
                    .with_context(context)?;
                instance.validate(name, &lengths).with_context(context)?;

                if !instance.is_namespaced()
                    && !manifest.contract_types.contains_key(&instance.contract_type)
                {
                    return Err(ManifestError::format(format!(
                        "contract_type '{}' is not defined in contract_types",
                        instance.contract_type
                    ))
                    .context(context()));
                }
            }
        }
        Ok(())
    }

    fn resolve_lengths<'a>(
        &self,
        uri: &str,
        instances: &ChainDeployments,
        references: impl Iterator<Item = &'a str>,
    ) -> ManifestResult<DependencyLengths> {
        let mut lengths = DependencyLengths::new();
        for reference in references {
            if lengths.contains_key(reference) {
                continue;
            }
            let length = self.resolver.resolve_length(uri, instances, reference)?;
            debug!(reference, length, "Resolved link reference");
            lengths.insert(reference.to_string(), length);
        }
        Ok(lengths)
    }
}

/// Manifest version, package name, and version
pub(crate) fn check_header(manifest: &PackageManifest) -> ManifestResult<()> {
    check_manifest_version(&manifest.manifest_version)
        .context("PackageManifest:manifest_version")?;
    check_package_name(&manifest.package_name).context("PackageManifest:package_name")?;
    check_semver(&manifest.version).context("PackageManifest:version")
}

/// Exact match: surrounding whitespace is significant
fn check_manifest_version(version: &str) -> ManifestResult<()> {
    if version != MANIFEST_VERSION {
        return Err(ManifestError::format(format!(
            "manifest_version should be 2, manifest_version is showing {version}. Ensure there \
             are no extra spaces or characters"
        )));
    }
    Ok(())
}

fn check_contract_types(contract_types: &BTreeMap<String, ContractType>) -> ManifestResult<()> {
    for (alias, contract_type) in contract_types {
        if check_alias(alias).is_err() {
            return Err(ManifestError::format(format!(
                "contract_types key '{alias}' does not conform to the standard. Please see \
                 https://ethpm.github.io/ethpm-spec/glossary.html#term-contract-alias for the spec"
            )));
        }
        contract_type.validate(alias)?;
    }
    Ok(())
}
