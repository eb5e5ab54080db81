#![allow(non_snake_case)]

use super::*;
use ethpm_manifest::read_manifest;
use std::fs;
use tempfile::TempDir;

fn options(name: &str, version: &str) -> NewOptions {
    NewOptions {
        name: name.to_string(),
        version: version.to_string(),
        source_prefix: "./".to_string(),
        source_extension: "sol".to_string(),
        ..NewOptions::default()
    }
}

#[test]
fn build___name_and_version_only___no_meta() {
    let manifest = build(&options("owned", "1.0.0")).unwrap();

    assert_eq!(manifest.manifest_version, "2");
    assert!(manifest.meta.is_none());
}

#[test]
fn build___bad_name___rejected() {
    let err = build(&options("Owned", "1.0.0")).unwrap_err();

    assert!(err.to_string().starts_with("PackageManifest:package_name error"));
}

#[test]
fn build___meta_flags___populate_meta() {
    let mut options = options("owned", "1.0.0");
    options.license = Some("MIT".to_string());
    options.authors = vec!["Piper Merriam".to_string()];

    let manifest = build(&options).unwrap();

    let meta = manifest.meta.unwrap();
    assert_eq!(meta.license.as_deref(), Some("MIT"));
    assert_eq!(meta.authors, vec!["Piper Merriam"]);
    assert_eq!(meta.description, None);
}

#[test]
fn run___with_sources___writes_valid_manifest() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("contracts")).unwrap();
    fs::write(dir.path().join("contracts/Owned.sol"), "contract Owned {}").unwrap();
    fs::write(dir.path().join("contracts/notes.txt"), "ignored").unwrap();
    let mut options = options("owned", "1.0.0");
    options.dir = Some(dir.path().to_path_buf());
    options.sources = Some(dir.path().join("contracts"));
    options.source_prefix = "./contracts".to_string();

    let path = run(&ValidatorConfig::default(), options).unwrap();

    let manifest = read_manifest(&path, 1024 * 1024).unwrap();
    assert_eq!(manifest.sources.len(), 1);
    assert_eq!(
        manifest.sources.get("./contracts/Owned.sol").map(String::as_str),
        Some("./contracts/Owned.sol")
    );
}

#[test]
fn run___missing_sources_dir___fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let mut options = options("owned", "1.0.0");
    options.dir = Some(dir.path().to_path_buf());
    options.sources = Some(dir.path().join("contracts"));

    assert!(run(&ValidatorConfig::default(), options).is_err());
    assert!(!dir.path().join("ethpm.json").exists());
}
