//! Validator configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap on the size of a dependency manifest read from disk (4 MiB)
pub const DEFAULT_MAX_DEPENDENCY_MANIFEST_BYTES: u64 = 4 * 1024 * 1024;

/// Settings that control manifest validation and dependency resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Directory that relative source paths and `ethpm-dependencies/` are resolved against
    ///
    /// `None` means the current working directory at validation time.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Largest dependency manifest (in bytes) the resolver will read
    #[serde(default = "default_max_dependency_manifest_bytes")]
    pub max_dependency_manifest_bytes: u64,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_dependency_manifest_bytes() -> u64 {
    DEFAULT_MAX_DEPENDENCY_MANIFEST_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            max_dependency_manifest_bytes: default_max_dependency_manifest_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Set the resolution root
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Resolve `base_dir`, falling back to the current working directory
    pub fn resolved_base_dir(&self) -> std::io::Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
