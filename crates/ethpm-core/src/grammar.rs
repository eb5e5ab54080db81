//! Grammar validators for manifest string fields
//!
//! Every check is a pure function returning [`ManifestError::Format`] with a
//! human-readable message when the input does not match. Patterns are compiled
//! once on first use.

use crate::{ManifestError, ManifestResult};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Safe: patterns are compile-time constants covered by tests
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar pattern must compile")
}

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[a-z][a-z0-9_-]{0,255}$"));

static CONTRACT_NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z][-_a-zA-Z0-9]{0,255}$"));

static ALIAS_WITH_SUFFIX: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z][-_a-zA-Z0-9]{0,255}\[[-a-zA-Z0-9]{1,256}\]$"));

static DEPENDENCY_TREE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(([a-zA-Z][-a-zA-Z0-9_]{0,255})|(([a-z][a-z0-9_-]{0,255}):)+([a-zA-Z][-a-zA-Z0-9_]{0,255}))$",
    )
});

static BIP122_URI: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(blockchain:)((//[a-fA-F0-9]{64})?)/(tx|block|address)/([a-fA-F0-9]{64})$")
});

static ADDRESS: Lazy<Regex> = Lazy::new(|| compile(r"^(0x|0X)[a-fA-F0-9]{40}$"));

static THIRTY_TWO_BYTE_HASH: Lazy<Regex> = Lazy::new(|| compile(r"^(0x|0X)[a-fA-F0-9]{64}$"));

static RELATIVE_PATH: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:\w:|\./)([a-zA-Z_\-\s0-9\.]+(?:\\|/)?)+$"));

static URI_SCHEME: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:"));

/// Package names are lowercase identifiers.
pub fn check_package_name(s: &str) -> ManifestResult<()> {
    if s.is_empty() {
        return Err(ManifestError::format("must provide a package name"));
    }
    if !PACKAGE_NAME.is_match(s) {
        return Err(ManifestError::format(format!(
            "Name '{s}' does not conform to the standard. Please see \
             https://ethpm.github.io/ethpm-spec/package-spec.html#package-name-package-name \
             for the spec"
        )));
    }
    Ok(())
}

/// Versions must be strict semantic versions (`MAJOR.MINOR.PATCH[-pre][+build]`).
pub fn check_semver(s: &str) -> ManifestResult<()> {
    if s.is_empty() {
        return Err(ManifestError::format("must provide a version number"));
    }
    semver::Version::parse(s).map_err(|_| {
        ManifestError::format(format!(
            "string '{s}' does not conform to semver. Please check your version string"
        ))
    })?;
    Ok(())
}

pub fn check_contract_name(s: &str) -> ManifestResult<()> {
    if !CONTRACT_NAME.is_match(s) {
        return Err(ManifestError::format(format!(
            "Name '{s}' does not conform to the standard. Please check for extra \
             whitespace and see https://ethpm.github.io/ethpm-spec/glossary.html#term-identifier \
             for the requirement."
        )));
    }
    Ok(())
}

/// A contract alias is a contract name with an optional `[suffix]`.
pub fn check_alias(s: &str) -> ManifestResult<()> {
    if CONTRACT_NAME.is_match(s) || ALIAS_WITH_SUFFIX.is_match(s) {
        return Ok(());
    }
    Err(ManifestError::format(format!(
        "Name '{s}' does not conform to the standard. Please check for extra \
         whitespace and see https://ethpm.github.io/ethpm-spec/glossary.html#term-contract-alias \
         for the requirement."
    )))
}

/// A dependency tree path is `Name` or `pkg-a:pkg-b:Name`.
pub fn check_dependency_tree(s: &str) -> ManifestResult<()> {
    if !DEPENDENCY_TREE.is_match(s) {
        return Err(ManifestError::format(format!(
            "Name '{s}' does not conform to the dependency tree standard. Please \
             check for whitespace and see https://ethpm.github.io/ethpm-spec/package-spec.html#value-value \
             for the spec"
        )));
    }
    Ok(())
}

pub fn check_bip122_uri(s: &str) -> ManifestResult<()> {
    if !BIP122_URI.is_match(s) {
        return Err(ManifestError::format(format!(
            "String '{s}' does not conform to the BIP122 URI standard. Please check for extra \
             whitespace and see https://github.com/bitcoin/bips/blob/master/bip-0122.mediawiki \
             for the requirement."
        )));
    }
    Ok(())
}

pub fn check_address(s: &str) -> ManifestResult<()> {
    if !ADDRESS.is_match(s) {
        return Err(ManifestError::format("Does not conform to an Ethereum address"));
    }
    Ok(())
}

pub fn check_thirty_two_byte_hash(s: &str) -> ManifestResult<()> {
    if !THIRTY_TWO_BYTE_HASH.is_match(s) {
        return Err(ManifestError::format("Does not conform to a 32-byte hash"));
    }
    Ok(())
}

/// Source and build dependency keys must be relative paths such as `./contracts/Foo.sol`.
pub fn is_relative_path(s: &str) -> bool {
    RELATIVE_PATH.is_match(s)
}

/// True when `s` starts with a URI scheme (`https:`, `ipfs:`, `blockchain:`, ...).
pub fn is_absolute_uri(s: &str) -> bool {
    URI_SCHEME.is_match(s)
}
