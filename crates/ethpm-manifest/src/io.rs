//! Reading and writing manifest files

use crate::{DependencyResolver, ManifestValidator, PackageManifest};
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name a manifest is written under
pub const MANIFEST_FILE_NAME: &str = "ethpm.json";

/// Read and parse the manifest at `path`, refusing files over `max_bytes`.
///
/// The manifest is not validated.
pub fn read_manifest(path: &Path, max_bytes: u64) -> ManifestResult<PackageManifest> {
    let file = File::open(path)?;
    let mut contents = Vec::new();
    file.take(max_bytes.saturating_add(1))
        .read_to_end(&mut contents)?;

    if contents.len() as u64 > max_bytes {
        return Err(ManifestError::format(format!(
            "manifest '{}' is larger than the {max_bytes} byte limit",
            path.display()
        )));
    }
    Ok(serde_json::from_slice(&contents)?)
}

/// Validate `manifest`, then write it as compact JSON to `<dir>/ethpm.json`.
///
/// An existing file is replaced. Returns the path written.
pub fn write_manifest<R: DependencyResolver>(
    manifest: &PackageManifest,
    dir: &Path,
    validator: &ManifestValidator<R>,
) -> ManifestResult<PathBuf> {
    validator
        .validate(manifest)
        .context("PackageManifest not properly formatted")?;

    let path = dir.join(MANIFEST_FILE_NAME);
    fs::write(&path, manifest.to_json()?)?;
    info!(path = %path.display(), package = %manifest.package_name, "Wrote manifest");
    Ok(path)
}
