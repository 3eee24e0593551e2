//! Error types for the crush CLI.
//!
//! Usage errors are accumulated, not short-circuited: every structural check
//! runs and the dispatcher reports the whole list in one pass. Messages here
//! are the exact strings users see, so tests assert against `Display` output.

use miette::Diagnostic;
use thiserror::Error;

/// Structural problems with one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No positional files and no `--stdin`.
    #[error("Provide filenames/dir or pass --stdin as option")]
    NoInput,

    /// `--out-file` and `--out-dir` given together.
    #[error("Cannot have out-file and out-dir")]
    ConflictingOutputTarget,

    /// One or more flags outside the option catalog.
    #[error("Invalid Options passed: {}", .0.join(","))]
    UnknownOptions(Vec<String>),
}

/// Top-level CLI error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// A rejected invocation (normally reported line by line, but available
    /// as an error for callers embedding the planner).
    #[error("{0}")]
    Usage(#[from] UsageError),

    /// Failed to serialize the engine handoff.
    #[error("Failed to serialize engine handoff: {0}")]
    Handoff(#[from] serde_json::Error),

    /// I/O error while writing the handoff.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`CliError`] as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
