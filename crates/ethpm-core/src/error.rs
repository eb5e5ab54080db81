//! Error types for manifest validation and linking

use thiserror::Error;

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Error type for manifest operations
///
/// Validation is fail-fast: each operation returns the first failure it finds.
/// Nested elements wrap their failures in [`ManifestError::Context`] so the
/// rendered message carries a path such as
/// `contract_type[Foo]:runtime_bytecode error '...'`.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A string field does not match its grammar
    #[error("{0}")]
    Format(String),

    /// A link location escapes the bytecode it points into
    #[error("{0}")]
    Bounds(String),

    /// Two link offsets claim overlapping byte ranges
    #[error(
        "'Offsets' must contain unique values, '{offset}' appears at index key '{index}' \
         and is within a byte range already used, '{claimed_start}'-'{claimed_end}'"
    )]
    Overlap {
        offset: usize,
        index: usize,
        claimed_start: usize,
        /// `claimed_start + length`, saturated at `usize::MAX`
        claimed_end: usize,
    },

    /// A symbolic dependency reference could not be resolved
    #[error("dependency '{reference}' could not be resolved: {reason}")]
    Resolution { reference: String, reason: String },

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A failure nested inside a named manifest element
    #[error("{context} error '{source}'")]
    Context {
        context: String,
        #[source]
        source: Box<ManifestError>,
    },
}

/// Coarse classification of a [`ManifestError`] by its root cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Bounds,
    Resolution,
    Io,
}

impl ManifestError {
    pub fn format(message: impl Into<String>) -> Self {
        ManifestError::Format(message.into())
    }

    pub fn bounds(message: impl Into<String>) -> Self {
        ManifestError::Bounds(message.into())
    }

    pub fn resolution(reference: impl Into<String>, reason: impl ToString) -> Self {
        ManifestError::Resolution {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap this error with the path of the element that produced it
    pub fn context(self, context: impl Into<String>) -> Self {
        ManifestError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context layers removed
    pub fn root(&self) -> &ManifestError {
        let mut current = self;
        while let ManifestError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Classify the root cause
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            ManifestError::Format(_) | ManifestError::Json(_) => ErrorKind::Format,
            ManifestError::Bounds(_) | ManifestError::Overlap { .. } => ErrorKind::Bounds,
            ManifestError::Resolution { .. } => ErrorKind::Resolution,
            ManifestError::Io(_) => ErrorKind::Io,
            // root() never returns a Context
            ManifestError::Context { .. } => ErrorKind::Format,
        }
    }

    /// Returns a stable numeric code for the root cause, suitable for exit codes
    pub fn error_code(&self) -> u32 {
        match self.kind() {
            ErrorKind::Format => 1,
            ErrorKind::Bounds => 2,
            ErrorKind::Resolution => 3,
            ErrorKind::Io => 4,
        }
    }
}

/// Attach a context path to the error of a [`ManifestResult`]
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> ManifestResult<T>;

    fn with_context<C, F>(self, f: F) -> ManifestResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for ManifestResult<T> {
    fn context(self, context: impl Into<String>) -> ManifestResult<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<C, F>(self, f: F) -> ManifestResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}
