//! # ethpm
//!
//! Validate, link, and write EthPM v2 smart-contract package manifests.
//!
//! A manifest describes a package: metadata, source locations, compiled
//! contract types, deployed contract instances, and build dependencies.
//! This crate checks every cross-reference in that graph, including the byte
//! ranges that library addresses are linked into.
//!
//! ## Quick Start
//!
//! ```
//! use ethpm::prelude::*;
//!
//! let mut manifest = PackageManifest::create("owned", "1.0.0")?;
//! manifest.add_source(
//!     "./contracts/Owned.sol",
//!     "ipfs://QmUjYUcX9kLv2FQH8nwc3RLLXtU3Yv5ahn5ga5pvUVu7g2",
//! );
//!
//! let validator = ManifestValidator::from_config(&ValidatorConfig::default())?;
//! validator.validate(&manifest)?;
//!
//! let json = manifest.to_json()?;
//! assert!(json.starts_with(r#"{"manifest_version":"2""#));
//! # Ok::<(), ManifestError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`ethpm_core`] - Errors, grammar validators, hex helpers, configuration
//! - [`ethpm_link`] - Link references, link values, and bytecode objects
//! - [`ethpm_manifest`] - The manifest model, validation, and file I/O

// Re-export core types
pub use ethpm_core::{
    ErrorContext, ErrorKind, LogLevel, MANIFEST_VERSION, ManifestError, ManifestResult,
    ValidatorConfig, grammar, hexstr,
};

// Re-export linking types
pub use ethpm_link::{
    DependencyLengths, LinkReference, LinkTarget, LinkValue, LinkedBytecode, StandardJsonBytecode,
    UnlinkedBytecode, check_no_overlap,
};

// Re-export manifest types
pub use ethpm_manifest::{
    ChainDeployments, CompilerInformation, ContractInstance, ContractType, DependencyResolver,
    FsDependencyResolver, MANIFEST_FILE_NAME, ManifestValidator, Natspec, PackageManifest,
    PackageMeta, read_manifest, write_manifest,
};

// Re-export common dependencies
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use ethpm::prelude::*;` to import the manifest model, the validator,
/// and the error types.
pub mod prelude {
    pub use crate::{
        CompilerInformation, ContractInstance, ContractType, DependencyResolver, ErrorContext,
        LinkReference, LinkValue, LinkedBytecode, ManifestError, ManifestResult,
        ManifestValidator, PackageManifest, PackageMeta, UnlinkedBytecode, ValidatorConfig,
    };
}
