//! Semantic error types for panel operations.
//!
//! These errors are domain-focused. The backend renders them into the
//! `error` field of a reply; adapters may also map them to exit codes.

use std::fmt;

use lycaddy_core::{
    CaddyfileError, CoreError, ErrorKind, FileTransferError, PathError, SupervisorError,
};

/// Semantic errors for panel backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Bad or missing caller-supplied arguments.
    ValidationFailed(String),

    /// An expected file, executable or directory is absent.
    NotFound(String),

    /// Operation conflicts with the server's current state.
    Conflict(String),

    /// Filesystem or process failure.
    Internal(String),
}

impl GuiError {
    /// Human-readable message without a category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationFailed(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<CoreError> for GuiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => Self::ValidationFailed(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::AlreadyRunning | ErrorKind::NotRunning => Self::Conflict(message),
            ErrorKind::Io | ErrorKind::Spawn => Self::Internal(message),
        }
    }
}

impl From<CaddyfileError> for GuiError {
    fn from(err: CaddyfileError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<FileTransferError> for GuiError {
    fn from(err: FileTransferError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<SupervisorError> for GuiError {
    fn from(err: SupervisorError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<PathError> for GuiError {
    fn from(err: PathError) -> Self {
        CoreError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn supervisor_conflicts() {
        let err = GuiError::from(SupervisorError::AlreadyRunning);
        assert_eq!(err, GuiError::Conflict("Server is already running".into()));
        assert_eq!(err.message(), "Server is already running");
        assert_eq!(err.to_string(), "conflict: Server is already running");
    }

    #[test]
    fn missing_executable_is_not_found() {
        let err = GuiError::from(SupervisorError::ExecutableNotFound(PathBuf::from(
            "/srv/caddy/ly-caddy",
        )));
        assert!(matches!(err, GuiError::NotFound(msg) if msg.contains("/srv/caddy/ly-caddy")));
    }

    #[test]
    fn file_validation_maps_to_validation() {
        let err = GuiError::from(FileTransferError::Validation("No files selected".into()));
        assert!(matches!(err, GuiError::ValidationFailed(_)));
    }

    #[test]
    fn io_maps_to_internal() {
        let err = GuiError::from(CaddyfileError::Io {
            path: PathBuf::from("Caddyfile"),
            source: std::io::Error::other("disk full"),
        });
        assert!(matches!(err, GuiError::Internal(_)));
    }
}
