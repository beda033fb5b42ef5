//! Error types for task runs.
//!
//! This module defines [`TaskError`], the single error type propagated from
//! the command executor through tasks and the dispatcher up to `main`, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing below `main` terminates the process; every failure is returned
//! - [`TaskError::ExecutionFailure`] carries the exit code `main` reports

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for task runs.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A command that does not tolerate failure exited unsuccessfully.
    ///
    /// `code` is `None` when the child was killed by a signal.
    #[error("Command failed with exit code {code:?}: {command}")]
    ExecutionFailure { command: String, code: Option<i32> },

    /// The program could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Two tasks with the same name were registered.
    #[error("Duplicate task name: {name}")]
    DuplicateTask { name: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;
