//! Contract types: compiled contracts keyed by alias

use crate::CompilerInformation;
use ethpm_core::grammar::check_contract_name;
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use ethpm_link::{StandardJsonBytecode, UnlinkedBytecode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// A compiled contract as recorded under `contract_types`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractType {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abi: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerInformation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_bytecode: Option<UnlinkedBytecode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natspec: Option<Natspec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_bytecode: Option<UnlinkedBytecode>,
}

/// Developer and user documentation merged into one object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Natspec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub construction: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invariants: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        rename = "languageVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub language_version: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub methods: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Deserialize)]
struct DevDoc {
    author: Option<String>,
    #[serde(default)]
    construction: Vec<Value>,
    #[serde(default)]
    invariants: Vec<Value>,
    #[serde(default)]
    methods: BTreeMap<String, Value>,
    title: Option<String>,
}

#[derive(Deserialize)]
struct UserDoc {
    language: Option<String>,
    #[serde(rename = "languageVersion")]
    language_version: Option<String>,
    source: Option<String>,
}

impl Natspec {
    /// Merge compiler `devdoc` and `userdoc` output.
    ///
    /// Method docs come from the devdoc. Returns `None` when neither is present.
    fn merge(devdoc: Option<DevDoc>, userdoc: Option<UserDoc>) -> Option<Self> {
        if devdoc.is_none() && userdoc.is_none() {
            return None;
        }
        let mut natspec = Natspec::default();
        if let Some(user) = userdoc {
            natspec.language = user.language;
            natspec.language_version = user.language_version;
            natspec.source = user.source;
        }
        if let Some(dev) = devdoc {
            natspec.author = dev.author;
            natspec.construction = dev.construction;
            natspec.invariants = dev.invariants;
            natspec.methods = dev.methods;
            natspec.title = dev.title;
        }
        Some(natspec)
    }
}

/// One entry of `contracts.<file>.<name>` in standard-JSON compiler output
#[derive(Deserialize)]
struct StandardJsonContract {
    #[serde(default)]
    abi: Vec<Value>,
    devdoc: Option<DevDoc>,
    userdoc: Option<UserDoc>,
    #[serde(default)]
    evm: EvmOutput,
}

#[derive(Default, Deserialize)]
struct EvmOutput {
    bytecode: Option<StandardJsonBytecode>,
    #[serde(rename = "deployedBytecode")]
    deployed_bytecode: Option<StandardJsonBytecode>,
}

fn build_bytecode(output: Option<&StandardJsonBytecode>) -> ManifestResult<Option<UnlinkedBytecode>> {
    match output {
        Some(output) if !output.object.is_empty() => {
            UnlinkedBytecode::from_compiler_output(output).map(Some)
        }
        _ => Ok(None),
    }
}

impl ContractType {
    /// Build from one contract's standard-JSON compiler output.
    pub fn from_standard_json(
        compiler: Option<CompilerInformation>,
        contract: &Value,
    ) -> ManifestResult<Self> {
        let parsed = StandardJsonContract::deserialize(contract).map_err(|e| {
            ManifestError::format(format!("Error getting contract type from JSON: '{e}'"))
        })?;

        let deployment_bytecode =
            build_bytecode(parsed.evm.bytecode.as_ref()).context("deployment_bytecode")?;
        let runtime_bytecode =
            build_bytecode(parsed.evm.deployed_bytecode.as_ref()).context("runtime_bytecode")?;

        Ok(Self {
            abi: parsed.abi,
            compiler,
            contract_name: None,
            deployment_bytecode,
            natspec: Natspec::merge(parsed.devdoc, parsed.userdoc),
            runtime_bytecode,
        })
    }

    /// Validate this contract type stored under `alias`.
    ///
    /// Missing or empty bytecode is not an error.
    pub fn validate(&self, alias: &str) -> ManifestResult<()> {
        if let Some(name) = self.contract_name.as_deref().filter(|n| !n.is_empty()) {
            check_contract_name(name)
                .with_context(|| format!("contract_type[{alias}]:contract_name"))?;
        }
        check_bytecode(alias, "deployment_bytecode", self.deployment_bytecode.as_ref())?;
        check_bytecode(alias, "runtime_bytecode", self.runtime_bytecode.as_ref())?;

        if let Some(compiler) = self.compiler.as_ref().filter(|c| !c.name.is_empty()) {
            compiler
                .validate()
                .with_context(|| format!("contract_type[{alias}]:compiler"))?;
        }
        Ok(())
    }
}

fn check_bytecode(alias: &str, field: &str, bytecode: Option<&UnlinkedBytecode>) -> ManifestResult<()> {
    let Some(bytecode) = bytecode else {
        return Ok(());
    };
    if bytecode.is_empty() {
        debug!(contract_type = alias, field, "No bytecode recorded, skipping");
        return Ok(());
    }
    bytecode
        .validate()
        .with_context(|| format!("contract_type[{alias}]:{field}"))
}
