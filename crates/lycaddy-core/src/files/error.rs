//! File transfer error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from listing or writing the served directory.
#[derive(Debug, Error)]
pub enum FileTransferError {
    /// A caller-supplied argument was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The directory does not exist.
    #[error("Directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Filesystem read or write failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
