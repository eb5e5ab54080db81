//! Dynamic log level reloading support

use ethpm_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Errors from changing the log level
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("reload handle not initialized")]
    NotInitialized,

    #[error("failed to reload filter: {0}")]
    Reload(#[from] reload::Error),
}

struct State {
    handle: Option<FilterHandle>,
    level: Option<LogLevel>,
}

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    state: Mutex<State>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                handle: None,
                level: None,
            }),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle and the level it was created with
    pub fn set_handle(&self, handle: FilterHandle, level: LogLevel) {
        let mut state = self.state.lock();
        state.handle = Some(handle);
        state.level = Some(level);
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().handle.is_some()
    }

    /// The level last installed, if any
    pub fn current_level(&self) -> Option<LogLevel> {
        self.state.lock().level
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), LoggingError> {
        let mut state = self.state.lock();
        let handle = state.handle.as_ref().ok_or(LoggingError::NotInitialized)?;
        handle.reload(level_filter(level))?;
        state.level = Some(level);
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
