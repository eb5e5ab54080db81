//! Compiler metadata attached to contract types and instances

use ethpm_core::grammar::check_semver;
use ethpm_core::{ErrorContext, ManifestError, ManifestResult};
use serde::{Deserialize, Serialize};

/// Name, version, and settings of the compiler that produced some bytecode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerInformation {
    #[serde(default)]
    pub name: String,

    /// The `settings` object of the compiler's standard-JSON input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,

    #[serde(default)]
    pub version: String,
}

impl CompilerInformation {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: None,
            version: version.into(),
        }
    }

    /// Build from a compiler name, its version, and the standard-JSON `settings` text.
    ///
    /// An empty `settings_json` leaves settings unset.
    pub fn from_settings_json(
        name: impl Into<String>,
        version: impl Into<String>,
        settings_json: &str,
    ) -> ManifestResult<Self> {
        let mut info = Self::new(name, version);
        if !settings_json.trim().is_empty() {
            let settings = serde_json::from_str(settings_json).map_err(|e| {
                ManifestError::format(format!("Error getting settings from JSON: '{e}'"))
            })?;
            info.settings = Some(settings);
        }
        Ok(info)
    }

    pub fn validate(&self) -> ManifestResult<()> {
        if self.name.is_empty() {
            return Err(ManifestError::format(
                "CompilerInformation:name is required and showing empty string",
            ));
        }
        check_semver(&self.version).context("CompilerInformation:version")
    }
}
