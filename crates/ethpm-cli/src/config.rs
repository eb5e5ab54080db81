//! Validator settings for the CLI
//!
//! Settings come from an optional TOML file, then command-line flags override them.

use anyhow::{Context, Result};
use ethpm_core::{LogLevel, ValidatorConfig};
use ethpm_manifest::MANIFEST_FILE_NAME;
use std::path::{Path, PathBuf};

/// Load settings from `path`, or the defaults when no file is given
pub fn load(path: Option<&Path>) -> Result<ValidatorConfig> {
    let Some(path) = path else {
        return Ok(ValidatorConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Parse TOML settings; missing keys take their defaults
pub fn parse(content: &str) -> Result<ValidatorConfig> {
    Ok(toml::from_str(content)?)
}

pub fn apply_overrides(
    mut config: ValidatorConfig,
    base_dir: Option<PathBuf>,
    log_level: Option<String>,
) -> ValidatorConfig {
    if let Some(base_dir) = base_dir {
        config.base_dir = Some(base_dir);
    }
    if let Some(log_level) = log_level {
        config.log_level = log_level;
    }
    config
}

pub fn log_level(config: &ValidatorConfig) -> Result<LogLevel> {
    LogLevel::parse(&config.log_level)
        .with_context(|| format!("Unknown log level '{}'", config.log_level))
}

/// The directory a manifest is read from and written to
pub fn manifest_dir(config: &ValidatorConfig, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => config
            .resolved_base_dir()
            .context("Failed to determine the base directory"),
    }
}

/// The manifest file to read, defaulting to `ethpm.json` in the base directory
pub fn manifest_path(config: &ValidatorConfig, path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(manifest_dir(config, None)?.join(MANIFEST_FILE_NAME)),
    }
}

/// Root validation at `dir` unless a base directory was configured
pub fn rooted_at(config: &ValidatorConfig, dir: &Path) -> ValidatorConfig {
    let mut config = config.clone();
    if config.base_dir.is_none() && !dir.as_os_str().is_empty() {
        config.base_dir = Some(dir.to_path_buf());
    }
    config
}
