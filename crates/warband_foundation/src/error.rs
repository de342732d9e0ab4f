//! Error types for the Warband system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only the I/O-facing surfaces (data files, settings) return these errors.
//! Catalog population, lookup, and army reconstruction report problems
//! through a [`MessageLog`](crate::MessageLog) instead.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Warband operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records an operation that was in progress, keeping existing context.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an I/O error tied to a path.
    #[must_use]
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io(format!("'{}': {err}", path.display())))
            .with_context(ErrorContext::new().with_path(path))
    }

    /// Creates a malformed data error.
    #[must_use]
    pub fn data(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Data {
            origin: origin.into(),
            message: message.into(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an error for a bad REPL command or argument.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Creates an unknown tag error.
    #[must_use]
    pub fn unknown_tag(kind: &'static str, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTag {
            kind,
            value: value.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A data record could not be decoded.
    #[error("malformed data in {origin}: {message}")]
    Data {
        /// File or record the data came from.
        origin: String,
        /// Description of the problem.
        message: String,
    },

    /// Binary (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A tag name did not belong to its closed set.
    #[error("unknown {kind}: {value:?}")]
    UnknownTag {
        /// Name of the tag set (e.g. "faction").
        kind: &'static str,
        /// The offending text.
        value: String,
    },

    /// A command was mistyped or given a bad argument.
    #[error("{0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the error is associated with.
    pub path: Option<PathBuf>,
    /// Stack of operations that were in progress.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file path.
    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "at {}", path.display())?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
