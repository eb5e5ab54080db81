#![allow(non_snake_case)]

use super::*;
use crate::FsDependencyResolver;
use std::fs;
use tempfile::TempDir;

const ADDRESS: &str = "0x8d3e14b8c8e3ad9d1e6e66dc95b0c2a36c7c8a23";
const CHAIN: &str = "blockchain://d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3/block/752820c0ad7abc1200f9ad42c4adc6fbb4bd44b5bed4667990e64565102c1ba6";

const COMPILER_OUTPUT: &str = r#"{
    "contracts": {
        "./contracts/Owned.sol": {
            "Owned": {
                "abi": [],
                "evm": {
                    "bytecode": {"linkReferences": {}, "object": "6060"},
                    "deployedBytecode": {"linkReferences": {}, "object": "60606060"}
                }
            }
        }
    }
}"#;

fn validator(dir: &TempDir) -> ManifestValidator {
    ManifestValidator::new(FsDependencyResolver::new(dir.path()), dir.path())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn PackageManifest___new___sets_version_two() {
    let manifest = PackageManifest::new("owned", "1.0.0");

    assert_eq!(manifest.manifest_version, "2");
    assert_eq!(manifest.package_name, "owned");
    assert_eq!(manifest.version, "1.0.0");
}

#[test]
fn PackageManifest___create___valid___ok() {
    assert!(PackageManifest::create("owned", "1.0.0").is_ok());
}

#[test]
fn PackageManifest___create___bad_name___rejected() {
    let err = PackageManifest::create("Owned", "1.0.0").unwrap_err();

    assert!(err.to_string().starts_with("PackageManifest:package_name error"));
}

#[test]
fn PackageManifest___create___bad_version___rejected() {
    let err = PackageManifest::create("owned", "1.0").unwrap_err();

    assert!(err.to_string().starts_with("PackageManifest:version error"));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn PackageManifest___to_json___sorted_keys_and_omits_empty() {
    let mut manifest = PackageManifest::new("owned", "1.0.0");
    manifest.add_source("./contracts/Owned.sol", "ipfs://QmUjYUcX9kLv2FQH8nwc3RLLXtU3Yv5ahn5ga5pvUVu7g2");

    let json = manifest.to_json().unwrap();

    assert_eq!(
        json,
        r#"{"manifest_version":"2","package_name":"owned","sources":{"./contracts/Owned.sol":"ipfs://QmUjYUcX9kLv2FQH8nwc3RLLXtU3Yv5ahn5ga5pvUVu7g2"},"version":"1.0.0"}"#
    );
}

#[test]
fn PackageManifest___to_json___does_not_mutate() {
    let mut manifest = PackageManifest::new("owned", "1.0.0");
    manifest.manifest_version = "1".into();

    let json = manifest.to_json().unwrap();

    assert!(json.contains(r#""manifest_version":"1""#));
    assert_eq!(manifest.manifest_version, "1");
}

#[test]
fn PackageManifest___from_json___parses_without_validating() {
    let manifest = PackageManifest::from_json(r#"{"manifest_version":"2 ","package_name":"X","version":"1"}"#)
        .unwrap();

    assert_eq!(manifest.manifest_version, "2 ");
}

#[test]
fn PackageManifest___from_json___malformed___json_error() {
    let err = PackageManifest::from_json("{").unwrap_err();

    assert!(matches!(err, ManifestError::Json(_)));
}

#[test]
fn PackageManifest___build_from_json___forces_version_and_validates() {
    let dir = TempDir::new().unwrap();

    let manifest = PackageManifest::build_from_json(
        r#"{"manifest_version":"1","package_name":"owned","version":"1.0.0"}"#,
        &validator(&dir),
    )
    .unwrap();

    assert_eq!(manifest.manifest_version, "2");
}

#[test]
fn PackageManifest___build_from_json___invalid___rejected() {
    let dir = TempDir::new().unwrap();

    let result = PackageManifest::build_from_json(
        r#"{"package_name":"owned","version":"one"}"#,
        &validator(&dir),
    );

    assert!(result.is_err());
}

#[test]
fn PackageManifest___json___parse_serialize_parse_is_stable() {
    let mut manifest = PackageManifest::new("wallet", "1.0.0");
    manifest.add_dependency("owned", "ipfs://QmUjYUcX9kLv2FQH8nwc3RLLXtU3Yv5ahn5ga5pvUVu7g2");
    manifest.add_deployment(CHAIN, "Wallet", ContractInstance::new("Wallet", ADDRESS));

    let reparsed = PackageManifest::from_json(&manifest.to_json().unwrap()).unwrap();

    assert_eq!(reparsed, manifest);
}

// ============================================================================
// Mutators
// ============================================================================

#[test]
fn PackageManifest___add_deployment___groups_by_chain() {
    let mut manifest = PackageManifest::new("wallet", "1.0.0");

    manifest.add_deployment(CHAIN, "Wallet", ContractInstance::new("Wallet", ADDRESS));
    manifest.add_deployment(CHAIN, "Owned", ContractInstance::new("Owned", ADDRESS));

    assert_eq!(manifest.deployments.len(), 1);
    assert_eq!(manifest.deployments[CHAIN].len(), 2);
}

#[test]
fn PackageManifest___add_contract_type___found___inserted() {
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    manifest
        .add_contract_type(CompilerInformation::new("solc", "0.4.24"), COMPILER_OUTPUT, "Owned")
        .unwrap();

    let ct = &manifest.contract_types["Owned"];
    assert_eq!(ct.deployment_bytecode.as_ref().unwrap().bytecode, "0x6060");
    assert_eq!(ct.runtime_bytecode.as_ref().unwrap().bytecode, "0x60606060");
}

#[test]
fn PackageManifest___add_contract_type___missing___rejected() {
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    let err = manifest
        .add_contract_type(CompilerInformation::new("solc", "0.4.24"), COMPILER_OUTPUT, "Wallet")
        .unwrap_err();

    assert_eq!(err.to_string(), "contract 'Wallet' was not found in the compiler output");
    assert!(manifest.contract_types.is_empty());
}

#[test]
fn PackageManifest___add_contract_type___malformed_output___rejected() {
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    let err = manifest
        .add_contract_type(CompilerInformation::new("solc", "0.4.24"), "[]", "Owned")
        .unwrap_err();

    assert!(err.to_string().starts_with("Error getting contract type from JSON for 'Owned'"));
}

#[test]
fn PackageManifest___add_local_paths_for_sources___matches_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Owned.sol"), "contract Owned {}").unwrap();
    fs::write(dir.path().join("Wallet.sol"), "contract Wallet {}").unwrap();
    fs::write(dir.path().join("README.md"), "docs").unwrap();
    fs::create_dir(dir.path().join("nested.sol")).unwrap();
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    let added = manifest
        .add_local_paths_for_sources(dir.path(), "./contracts", ".sol")
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(
        manifest.sources.get("./contracts/Owned.sol").map(String::as_str),
        Some("./contracts/Owned.sol")
    );
    assert!(manifest.sources.contains_key("./contracts/Wallet.sol"));
}

#[test]
fn PackageManifest___add_local_paths_for_sources___empty_prefix_is_current_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Owned.sol"), "contract Owned {}").unwrap();
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    manifest.add_local_paths_for_sources(dir.path(), "", "sol").unwrap();

    assert!(manifest.sources.contains_key("./Owned.sol"));
}

#[test]
fn PackageManifest___inline_sources___embeds_text() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Owned.sol"), "contract Owned {}").unwrap();
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    let added = manifest.inline_sources(dir.path(), "./", "sol").unwrap();

    assert_eq!(added, 1);
    assert_eq!(manifest.sources["./Owned.sol"], "contract Owned {}");
}

#[test]
fn PackageManifest___add_local_paths_for_sources___missing_dir___io_error() {
    let dir = TempDir::new().unwrap();
    let mut manifest = PackageManifest::new("owned", "1.0.0");

    let err = manifest
        .add_local_paths_for_sources(&dir.path().join("absent"), "", "sol")
        .unwrap_err();

    assert!(matches!(err, ManifestError::Io(_)));
}

#[test]
fn PackageManifest___from_json___unknown_link_type___fails_to_parse() {
    let json = format!(
        r#"{{"manifest_version":"3","package_name":"Wallet","version":"1.0.0","deployments":{{"{CHAIN}":{{"Wallet":{{"address":"{ADDRESS}","contract_type":"Wallet","runtime_bytecode":{{"bytecode":"0x6060","link_dependencies":[{{"offsets":[1],"type":"address","value":"Lib"}}]}}}}}}}}}}"#
    );

    let err = PackageManifest::from_json(&json).unwrap_err();

    assert!(err.to_string().contains(
        "Field 'type' needs to be one of 'literal' or 'reference' with no whitespace. \
         Showing value as 'address'"
    ));
}
