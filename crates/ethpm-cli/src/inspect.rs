//! Inspect command implementation

use crate::config;
use anyhow::{Context, Result};
use ethpm_core::ValidatorConfig;
use ethpm_manifest::{PackageManifest, read_manifest};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::PathBuf;

/// Human-readable outline of a manifest
pub fn summary(manifest: &PackageManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} v{} (manifest version {})",
        manifest.package_name, manifest.version, manifest.manifest_version
    );

    if let Some(meta) = &manifest.meta {
        if let Some(description) = &meta.description {
            let _ = writeln!(out, "  {description}");
        }
        if !meta.authors.is_empty() {
            let _ = writeln!(out, "  authors: {}", meta.authors.join(", "));
        }
        if let Some(license) = &meta.license {
            let _ = writeln!(out, "  license: {license}");
        }
    }

    section(&mut out, "sources", &manifest.sources);
    section(&mut out, "contract types", &manifest.contract_types);
    for (chain, instances) in &manifest.deployments {
        let _ = writeln!(out, "deployments on {chain}:");
        for (name, instance) in instances {
            let _ = writeln!(out, "  {name} ({}) at {}", instance.contract_type, instance.address);
        }
    }
    section(&mut out, "build dependencies", &manifest.build_dependencies);

    out
}

fn section<V>(out: &mut String, title: &str, entries: &BTreeMap<String, V>) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for key in entries.keys() {
        let _ = writeln!(out, "  {key}");
    }
}

/// Print a manifest without validating it
pub fn run(config: &ValidatorConfig, manifest_path: Option<PathBuf>, json: bool) -> Result<()> {
    let path = config::manifest_path(config, manifest_path)?;
    let manifest = read_manifest(&path, config.max_dependency_manifest_bytes)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    if json {
        println!("{}", manifest.to_json_pretty()?);
    } else {
        print!("{}", summary(&manifest));
    }

    Ok(())
}
