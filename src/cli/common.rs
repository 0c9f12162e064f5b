//! Shared CLI error handling and exit codes.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input failed validation
    ValidationFailure = 1,
    /// I/O or environment failure
    IoError = 2,
}

/// Errors raised by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// I/O or serialization failure
    Io(String),
    /// Invalid user input
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::IoError,
            Self::Validation(_) => ExitCode::ValidationFailure,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}
