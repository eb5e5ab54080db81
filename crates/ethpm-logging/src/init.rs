//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use ethpm_core::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry, reload};

/// Install a global subscriber writing human-readable logs to stderr.
///
/// The level can be changed later through [`ReloadHandle::global`]. Returns
/// `false` when a global subscriber was already installed; the level is then
/// reloaded on the existing handle if there is one.
pub fn init_logging(level: LogLevel) -> bool {
    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        reload_existing(ReloadHandle::global(), level);
        return false;
    }
    ReloadHandle::global().set_handle(handle, level);
    tracing::debug!(%level, "Logging initialized");
    true
}

/// Apply `level` to an already installed subscriber, logging when that is not possible
fn reload_existing(handle: &ReloadHandle, level: LogLevel) -> bool {
    match handle.reload_level(level) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, %level, "Could not change the level of the existing subscriber");
            false
        }
    }
}
