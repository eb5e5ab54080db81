//! ethpm-logging - Logging setup for ethpm tools
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr `tracing` subscriber
//! - [`ReloadHandle`] to change the level after initialization

mod init;
mod reload;

pub use ethpm_core::LogLevel;
pub use init::init_logging;
pub use reload::{LoggingError, ReloadHandle, level_filter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
