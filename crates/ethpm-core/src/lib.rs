//! ethpm-core - Shared building blocks for EthPM v2 manifests
//!
//! This crate provides the foundational pieces used by the linking and
//! manifest crates:
//! - [`ManifestError`] and [`ErrorKind`] for error handling
//! - [`grammar`] validators for names, versions, URIs, and hashes
//! - [`hexstr`] helpers for `0x`-prefixed hex strings
//! - [`ValidatorConfig`] for validation settings

mod config;
mod error;

pub mod grammar;
pub mod hexstr;

pub use config::{DEFAULT_MAX_DEPENDENCY_MANIFEST_BYTES, ValidatorConfig};
pub use error::{ErrorContext, ErrorKind, ManifestError, ManifestResult};

/// The only manifest version this crate understands.
pub const MANIFEST_VERSION: &str = "2";

/// Directory (relative to the resolution root) holding installed dependency manifests.
pub const DEPENDENCY_DIR: &str = "ethpm-dependencies";

/// Log levels understood by the logging setup and configuration files
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a case-insensitive level name such as `"debug"` or `"WARN"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ErrorContext, ErrorKind, LogLevel, ManifestError, ManifestResult, ValidatorConfig,
    };
}

#[cfg(test)]
mod lib_tests;
