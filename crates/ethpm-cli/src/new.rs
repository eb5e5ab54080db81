//! New manifest command implementation

use crate::config;
use anyhow::{Context, Result};
use ethpm_core::ValidatorConfig;
use ethpm_manifest::{ManifestValidator, PackageManifest, PackageMeta, write_manifest};
use std::path::PathBuf;

/// Options for `ethpm new`
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub name: String,
    pub version: String,
    pub dir: Option<PathBuf>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub authors: Vec<String>,
    pub sources: Option<PathBuf>,
    pub source_prefix: String,
    pub source_extension: String,
}

/// Build the manifest described by `options` without writing it
pub fn build(options: &NewOptions) -> Result<PackageManifest> {
    let mut manifest = PackageManifest::create(&options.name, &options.version)?;

    if options.description.is_some() || options.license.is_some() || !options.authors.is_empty() {
        let mut meta = PackageMeta {
            description: options.description.clone(),
            license: options.license.clone(),
            ..PackageMeta::default()
        };
        meta.set_authors(options.authors.iter().cloned());
        manifest.meta = Some(meta);
    }

    if let Some(sources) = &options.sources {
        let added = manifest
            .add_local_paths_for_sources(sources, &options.source_prefix, &options.source_extension)
            .with_context(|| format!("Failed to list sources in {}", sources.display()))?;
        tracing::debug!(count = added, dir = %sources.display(), "Recorded sources");
    }

    Ok(manifest)
}

/// Create a validated manifest and write it to `<dir>/ethpm.json`
pub fn run(config: &ValidatorConfig, options: NewOptions) -> Result<PathBuf> {
    let dir = config::manifest_dir(config, options.dir.clone())?;
    let manifest = build(&options)?;

    let validator = ManifestValidator::from_config(&config::rooted_at(config, &dir))?;
    let path = write_manifest(&manifest, &dir, &validator)?;

    println!(
        "Created manifest for {} v{}: {}",
        manifest.package_name,
        manifest.version,
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
#[path = "new/new_tests.rs"]
mod new_tests;
