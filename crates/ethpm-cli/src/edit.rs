//! Commands that modify an existing manifest
//!
//! Each command reads `<dir>/ethpm.json`, applies one change, then validates
//! and rewrites the file. An invalid result leaves the file untouched.

use crate::config;
use anyhow::{Context, Result};
use ethpm_core::ValidatorConfig;
use ethpm_manifest::{
    CompilerInformation, MANIFEST_FILE_NAME, ManifestValidator, PackageManifest, read_manifest,
    write_manifest,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Compiler output and metadata for `add-contract-type`
#[derive(Debug, Clone)]
pub struct CompilerSource {
    pub output: PathBuf,
    pub compiler: String,
    pub compiler_version: String,
    pub settings: Option<PathBuf>,
}

impl CompilerSource {
    fn compiler_information(&self) -> Result<CompilerInformation> {
        let settings = match &self.settings {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read compiler settings: {}", path.display()))?,
            None => String::new(),
        };
        Ok(CompilerInformation::from_settings_json(
            &self.compiler,
            &self.compiler_version,
            &settings,
        )?)
    }
}

pub fn add_dependency(
    config: &ValidatorConfig,
    dir: Option<PathBuf>,
    name: &str,
    uri: &str,
) -> Result<PathBuf> {
    let path = update(config, dir, |manifest| {
        manifest.add_dependency(name, uri);
        Ok(())
    })?;
    println!("✓ Added build dependency '{name}'");
    Ok(path)
}

pub fn add_contract_type(
    config: &ValidatorConfig,
    dir: Option<PathBuf>,
    name: &str,
    source: &CompilerSource,
) -> Result<PathBuf> {
    let output = fs::read_to_string(&source.output).with_context(|| {
        format!("Failed to read compiler output: {}", source.output.display())
    })?;
    let compiler = source.compiler_information()?;

    let path = update(config, dir, |manifest| {
        Ok(manifest.add_contract_type(compiler, &output, name)?)
    })?;
    println!("✓ Added contract type '{name}'");
    Ok(path)
}

fn update<F>(config: &ValidatorConfig, dir: Option<PathBuf>, change: F) -> Result<PathBuf>
where
    F: FnOnce(&mut PackageManifest) -> Result<()>,
{
    let dir = config::manifest_dir(config, dir)?;
    let mut manifest = read(config, &dir)?;
    change(&mut manifest)?;

    let validator = ManifestValidator::from_config(&config::rooted_at(config, &dir))?;
    Ok(write_manifest(&manifest, &dir, &validator)?)
}

fn read(config: &ValidatorConfig, dir: &Path) -> Result<PackageManifest> {
    let path = dir.join(MANIFEST_FILE_NAME);
    read_manifest(&path, config.max_dependency_manifest_bytes)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))
}
