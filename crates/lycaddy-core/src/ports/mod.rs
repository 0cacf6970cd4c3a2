//! Port definitions (trait abstractions) and the error taxonomy.
//!
//! Ports define the interfaces the panel expects from its environment.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No tokio or process types in any signature
//! - Emitters are fire-and-forget; they never block or fail the caller

pub mod directory_picker;
pub mod event_emitter;

use std::path::PathBuf;
use thiserror::Error;

use crate::caddyfile::CaddyfileError;
use crate::files::FileTransferError;
use crate::paths::PathError;

pub use directory_picker::{DirectoryPicker, PickPurpose};
pub use event_emitter::{NoopEmitter, SupervisorEventEmitter};

/// Errors from process supervisor operations.
///
/// Only synchronous failures appear here. Failures the OS reports after the
/// process was created arrive as `SupervisorEvent::SpawnError` instead.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// `start` was called while a server process is held.
    #[error("Server is already running")]
    AlreadyRunning,

    /// `stop` was called with no server process held.
    #[error("Server is not running")]
    NotRunning,

    /// The server executable is missing from the caddy directory.
    #[error("Server executable not found: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    /// The OS refused to create the process.
    #[error("Failed to spawn server: {0}")]
    Spawn(#[source] std::io::Error),

    /// Delivering the termination signal failed.
    #[error("Failed to signal server: {0}")]
    Signal(String),
}

/// Error categories surfaced to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing caller-supplied arguments.
    Validation,
    /// An expected file, executable or directory is absent.
    NotFound,
    /// `start` while running.
    AlreadyRunning,
    /// `stop` while stopped.
    NotRunning,
    /// Filesystem read/write failure.
    Io,
    /// OS-level process creation failure.
    Spawn,
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types via [`CoreError::kind`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caddyfile read/write failed.
    #[error(transparent)]
    Caddyfile(#[from] CaddyfileError),

    /// Directory listing or upload failed.
    #[error(transparent)]
    Files(#[from] FileTransferError),

    /// Process supervision failed.
    #[error(transparent)]
    Supervisor(#[from] SupervisorError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl CoreError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Caddyfile(CaddyfileError::NotFound(_)) => ErrorKind::NotFound,
            Self::Caddyfile(CaddyfileError::Io { .. }) => ErrorKind::Io,
            Self::Files(FileTransferError::Validation(_) | FileTransferError::NotADirectory(_)) => {
                ErrorKind::Validation
            }
            Self::Files(FileTransferError::NotFound(_)) => ErrorKind::NotFound,
            Self::Files(FileTransferError::Io { .. }) => ErrorKind::Io,
            Self::Supervisor(SupervisorError::AlreadyRunning) => ErrorKind::AlreadyRunning,
            Self::Supervisor(SupervisorError::NotRunning) => ErrorKind::NotRunning,
            Self::Supervisor(SupervisorError::ExecutableNotFound(_)) => ErrorKind::NotFound,
            Self::Supervisor(SupervisorError::Spawn(_)) => ErrorKind::Spawn,
            Self::Supervisor(SupervisorError::Signal(_)) => ErrorKind::Io,
            Self::Path(PathError::EmptyPath) => ErrorKind::Validation,
            Self::Path(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supervisor_errors_classify() {
        assert_eq!(
            CoreError::from(SupervisorError::AlreadyRunning).kind(),
            ErrorKind::AlreadyRunning
        );
        assert_eq!(
            CoreError::from(SupervisorError::NotRunning).kind(),
            ErrorKind::NotRunning
        );
        assert_eq!(
            CoreError::from(SupervisorError::ExecutableNotFound(PathBuf::from("ly-caddy"))).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CoreError::from(SupervisorError::Signal("EPERM".into())).kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn file_errors_classify() {
        assert_eq!(
            CoreError::from(FileTransferError::Validation("x".into())).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CoreError::from(FileTransferError::NotADirectory(PathBuf::from("a"))).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CoreError::from(FileTransferError::NotFound(PathBuf::from("a"))).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn messages_are_human_readable() {
        let err = CoreError::from(SupervisorError::ExecutableNotFound(PathBuf::from(
            "/opt/caddy/ly-caddy",
        )));
        assert_eq!(err.to_string(), "Server executable not found: /opt/caddy/ly-caddy");
    }
}
