//! Deployed contract instances

use crate::CompilerInformation;
use ethpm_core::grammar::{check_address, check_alias, check_package_name, check_thirty_two_byte_hash};
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use ethpm_link::{DependencyLengths, LinkedBytecode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A contract deployed on one chain, as recorded under `deployments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInstance {
    #[serde(default)]
    pub address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub block: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerInformation>,

    /// Alias of a local contract type, or `pkg:Alias` for one from a dependency
    #[serde(default)]
    pub contract_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_bytecode: Option<LinkedBytecode>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transaction: String,
}

impl ContractInstance {
    pub fn new(contract_type: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            contract_type: contract_type.into(),
            ..Self::default()
        }
    }

    pub fn with_transaction(mut self, transaction: impl Into<String>) -> Self {
        self.transaction = transaction.into();
        self
    }

    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = block.into();
        self
    }

    pub fn with_runtime_bytecode(mut self, bytecode: LinkedBytecode) -> Self {
        self.runtime_bytecode = Some(bytecode);
        self
    }

    pub fn with_compiler(mut self, compiler: CompilerInformation) -> Self {
        self.compiler = Some(compiler);
        self
    }

    /// True when `contract_type` points into a dependency (`pkg:Alias`)
    pub fn is_namespaced(&self) -> bool {
        self.contract_type.contains(':')
    }

    /// Reference-typed link values of the runtime bytecode, in order
    pub fn link_references(&self) -> impl Iterator<Item = &str> {
        self.runtime_bytecode
            .iter()
            .flat_map(|bytecode| bytecode.reference_values())
    }

    /// Validate the instance stored under `name`.
    ///
    /// `dependency_lengths` must hold a length for every reference-typed link value.
    pub fn validate(&self, name: &str, dependency_lengths: &DependencyLengths) -> ManifestResult<()> {
        if self.contract_type.is_empty() {
            return Err(ManifestError::format(format!(
                "ContractInstance[{name}]:contract_type is required and showing empty string"
            )));
        }
        check_contract_type(&self.contract_type)
            .with_context(|| format!("ContractInstance[{name}]:contract_type"))?;
        check_address(&self.address).with_context(|| format!("ContractInstance[{name}]:address"))?;

        if !self.transaction.is_empty() {
            check_thirty_two_byte_hash(&self.transaction)
                .with_context(|| format!("ContractInstance[{name}]:transaction"))?;
        }
        if !self.block.is_empty() {
            check_thirty_two_byte_hash(&self.block)
                .with_context(|| format!("ContractInstance[{name}]:block"))?;
        }

        match &self.runtime_bytecode {
            Some(bytecode) if !bytecode.is_empty() => bytecode
                .validate(dependency_lengths)
                .with_context(|| format!("ContractInstance[{name}]:runtime_bytecode"))?,
            Some(_) => debug!(instance = name, "No runtime_bytecode recorded, skipping"),
            None => {}
        }

        if let Some(compiler) = self.compiler.as_ref().filter(|c| !c.name.is_empty()) {
            compiler
                .validate()
                .with_context(|| format!("ContractInstance[{name}]:compiler"))?;
        }
        Ok(())
    }
}

/// `Alias` or `pkg-a:pkg-b:Alias`
fn check_contract_type(s: &str) -> ManifestResult<()> {
    let (packages, alias) = match s.rsplit_once(':') {
        Some((packages, alias)) => (Some(packages), alias),
        None => (None, s),
    };
    let packages_ok = packages.is_none_or(|p| p.split(':').all(|pkg| check_package_name(pkg).is_ok()));

    if packages_ok && check_alias(alias).is_ok() {
        return Ok(());
    }
    Err(ManifestError::format(format!(
        "contract_type '{s}' does not conform to the standard. Please check for extra \
         whitespace and see https://ethpm.github.io/ethpm-spec/package-spec.html#contract-type-contract-type \
         for the requirement."
    )))
}
