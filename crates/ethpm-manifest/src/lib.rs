//! ethpm-manifest - EthPM v2 package manifests
//!
//! This crate provides:
//! - [`PackageManifest`] and its parts ([`ContractType`], [`ContractInstance`],
//!   [`CompilerInformation`], [`PackageMeta`])
//! - [`ManifestValidator`] for whole-manifest validation
//! - [`DependencyResolver`] / [`FsDependencyResolver`] for link reference lengths
//! - [`read_manifest`] / [`write_manifest`] for manifest files
//!
//! # Example
//!
//! ```no_run
//! use ethpm_core::ValidatorConfig;
//! use ethpm_manifest::{ManifestValidator, PackageManifest};
//!
//! let manifest = PackageManifest::create("owned", "1.0.0")?;
//! let validator = ManifestValidator::from_config(&ValidatorConfig::default())?;
//! validator.validate(&manifest)?;
//! # Ok::<(), ethpm_core::ManifestError>(())
//! ```

mod compiler;
mod contract_instance;
mod contract_type;
mod io;
mod manifest;
mod meta;
mod resolver;
mod validate;

pub use compiler::CompilerInformation;
pub use contract_instance::ContractInstance;
pub use contract_type::{ContractType, Natspec};
pub use io::{MANIFEST_FILE_NAME, read_manifest, write_manifest};
pub use manifest::{ChainDeployments, PackageManifest};
pub use meta::PackageMeta;
pub use resolver::{DependencyResolver, FsDependencyResolver};
pub use validate::ManifestValidator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CompilerInformation, ContractInstance, ContractType, DependencyResolver,
        FsDependencyResolver, ManifestValidator, PackageManifest, PackageMeta,
    };
}
