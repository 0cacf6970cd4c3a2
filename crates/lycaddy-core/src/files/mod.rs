//! File transfer helper for the served directory.
//!
//! Two operations back the upload panel:
//!
//! - [`list_dir`] - list a directory (directories first, then case-insensitive name order)
//! - [`write_files`] - copy uploaded byte buffers into a directory under sanitized names

mod error;
mod listing;
mod sanitize;
mod upload;

pub use error::FileTransferError;
pub use listing::{compare_entries, list_dir};
pub use sanitize::sanitize_file_name;
pub use upload::write_files;

use std::path::Path;

/// Validate a caller-supplied directory argument and check that it exists.
fn existing_dir(dir: &str) -> Result<&Path, FileTransferError> {
    if dir.trim().is_empty() {
        return Err(FileTransferError::Validation(
            "a directory path is required".to_string(),
        ));
    }

    let path = Path::new(dir);
    if !path.exists() {
        return Err(FileTransferError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(FileTransferError::NotADirectory(path.to_path_buf()));
    }
    Ok(path)
}
