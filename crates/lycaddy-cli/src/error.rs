//! CLI-specific error types and mappings.
//!
//! Maps panel errors to exit codes and user-facing messages.

use lycaddy_core::PathError;
use lycaddy_gui::GuiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation failed.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// An expected file, directory or executable is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (permission denied, disk full, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Caddy directory could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server process error or state conflict.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::ValidationFailed(msg) => Self::Arguments(msg),
            GuiError::NotFound(msg) => Self::NotFound(msg),
            GuiError::Conflict(msg) => Self::Process(msg),
            GuiError::Internal(msg) => Self::Io(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
