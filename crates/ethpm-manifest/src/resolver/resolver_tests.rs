#![allow(non_snake_case)]

use super::*;
use crate::{ContractInstance, PackageManifest};
use ethpm_core::ErrorKind;
use std::fs;
use tempfile::TempDir;

const CHAIN: &str = "blockchain://d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3/block/752820c0ad7abc1200f9ad42c4adc6fbb4bd44b5bed4667990e64565102c1ba6";
const ADDRESS: &str = "0x8d3e14b8c8e3ad9d1e6e66dc95b0c2a36c7c8a23";

fn install(root: &Path, relative: &str, manifest: &PackageManifest) {
    let path = root.join(DEPENDENCY_DIR).join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, manifest.to_json().unwrap()).unwrap();
}

fn dependency_with(name: &str, address: &str) -> PackageManifest {
    let mut manifest = PackageManifest::new("safe-math", "1.0.0");
    manifest.add_deployment(CHAIN, name, ContractInstance::new(name, address));
    manifest
}

#[test]
fn FsDependencyResolver___manifest_path___nests_packages() {
    let resolver = FsDependencyResolver::new("/work");

    assert_eq!(
        resolver.manifest_path(&["pkg-a"]),
        PathBuf::from("/work/ethpm-dependencies/pkg-a.json")
    );
    assert_eq!(
        resolver.manifest_path(&["pkg-a", "pkg-b", "pkg-c"]),
        PathBuf::from("/work/ethpm-dependencies/pkg-a/pkg-b/pkg-c.json")
    );
}

#[test]
fn FsDependencyResolver___empty_reference___zero() {
    let resolver = FsDependencyResolver::new("/nonexistent");

    assert_eq!(resolver.resolve_length(CHAIN, &ChainDeployments::new(), "").unwrap(), 0);
}

#[test]
fn FsDependencyResolver___local_instance___address_length() {
    let resolver = FsDependencyResolver::new("/nonexistent");
    let mut local = ChainDeployments::new();
    local.insert("SafeMathLib".into(), ContractInstance::new("SafeMathLib", ADDRESS));

    let length = resolver.resolve_length(CHAIN, &local, "SafeMathLib").unwrap();

    assert_eq!(length, 20);
}

#[test]
fn FsDependencyResolver___local_instance_missing___resolution_error() {
    let resolver = FsDependencyResolver::new("/nonexistent");

    let err = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "SafeMathLib")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resolution);
}

#[test]
fn FsDependencyResolver___bad_tree___resolution_error() {
    let resolver = FsDependencyResolver::new("/nonexistent");

    let err = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "Pkg A:Lib")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resolution);
}

#[test]
fn FsDependencyResolver___missing_file___names_reference() {
    let dir = TempDir::new().unwrap();
    let resolver = FsDependencyResolver::new(dir.path());

    let err = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "pkga:ContractB")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert!(err.to_string().contains("'pkga:ContractB'"));
}

#[test]
fn FsDependencyResolver___one_level___reads_dependency_manifest() {
    let dir = TempDir::new().unwrap();
    install(dir.path(), "safe-math.json", &dependency_with("SafeMathLib", ADDRESS));
    let resolver = FsDependencyResolver::new(dir.path());

    let length = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "safe-math:SafeMathLib")
        .unwrap();

    assert_eq!(length, 20);
}

#[test]
fn FsDependencyResolver___two_levels___reads_nested_manifest() {
    let dir = TempDir::new().unwrap();
    install(dir.path(), "wallet/safe-math.json", &dependency_with("SafeMathLib", "0x0102"));
    let resolver = FsDependencyResolver::new(dir.path());

    let length = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "wallet:safe-math:SafeMathLib")
        .unwrap();

    assert_eq!(length, 2);
}

#[test]
fn FsDependencyResolver___large_manifest___read_in_full() {
    let dir = TempDir::new().unwrap();
    let mut manifest = dependency_with("SafeMathLib", ADDRESS);
    for i in 0..50 {
        manifest.add_dependency(format!("dep-{i}"), "ipfs://QmUjYUcX9kLv2FQH8nwc3RLLXtU3Yv5ahn5ga5pvUVu7g2");
    }
    install(dir.path(), "safe-math.json", &manifest);
    let resolver = FsDependencyResolver::new(dir.path());

    let length = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "safe-math:SafeMathLib")
        .unwrap();

    assert_eq!(length, 20);
}

#[test]
fn FsDependencyResolver___over_size_cap___resolution_error() {
    let dir = TempDir::new().unwrap();
    install(dir.path(), "safe-math.json", &dependency_with("SafeMathLib", ADDRESS));
    let resolver = FsDependencyResolver::new(dir.path()).with_max_manifest_bytes(16);

    let err = resolver
        .resolve_length(CHAIN, &ChainDeployments::new(), "safe-math:SafeMathLib")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert!(err.to_string().contains("16 byte limit"));
}

#[test]
fn FsDependencyResolver___other_chain___resolution_error() {
    let dir = TempDir::new().unwrap();
    install(dir.path(), "safe-math.json", &dependency_with("SafeMathLib", ADDRESS));
    let resolver = FsDependencyResolver::new(dir.path());
    let other_chain = CHAIN.replace("/block/7", "/block/8");

    let err = resolver
        .resolve_length(&other_chain, &ChainDeployments::new(), "safe-math:SafeMathLib")
        .unwrap_err();

    assert!(err.to_string().contains("has no deployment of 'SafeMathLib'"));
}

#[test]
fn FsDependencyResolver___from_config___uses_base_dir_and_cap() {
    let config = ValidatorConfig {
        max_dependency_manifest_bytes: 1024,
        ..ValidatorConfig::default()
    }
    .with_base_dir("/work");

    let resolver = FsDependencyResolver::from_config(&config).unwrap();

    assert_eq!(resolver.root(), Path::new("/work"));
    assert_eq!(resolver.max_manifest_bytes, 1024);
}
