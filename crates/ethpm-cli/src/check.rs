//! Check command implementation

use crate::config;
use anyhow::{Context, Result};
use ethpm_core::ValidatorConfig;
use ethpm_manifest::{ManifestValidator, PackageManifest, read_manifest};
use std::path::{Path, PathBuf};

/// Read and validate a manifest, returning it on success
pub fn check_file(config: &ValidatorConfig, path: &Path) -> Result<PackageManifest> {
    let manifest = read_manifest(path, config.max_dependency_manifest_bytes)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let config = config::rooted_at(config, path.parent().unwrap_or(Path::new("")));
    let validator = ManifestValidator::from_config(&config)?;
    validator
        .validate(&manifest)
        .with_context(|| format!("Manifest is invalid: {}", path.display()))?;

    Ok(manifest)
}

/// Check command implementation
pub fn run(config: &ValidatorConfig, manifest_path: Option<PathBuf>) -> Result<()> {
    let path = config::manifest_path(config, manifest_path)?;

    println!("Checking manifest: {}", path.display());

    let manifest = check_file(config, &path)?;
    let instances: usize = manifest.deployments.values().map(|chain| chain.len()).sum();

    println!("✓ Package: {} v{}", manifest.package_name, manifest.version);
    println!("✓ Sources: {}", manifest.sources.len());
    println!("✓ Contract types: {}", manifest.contract_types.len());
    println!(
        "✓ Deployments: {} on {} chain(s)",
        instances,
        manifest.deployments.len()
    );
    println!("✓ Build dependencies: {}", manifest.build_dependencies.len());
    println!("\nManifest is valid!");

    Ok(())
}
