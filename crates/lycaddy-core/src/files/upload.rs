//! Copying uploaded files into a target directory.

use std::fs;

use tracing::{debug, info};

use super::{FileTransferError, existing_dir, sanitize_file_name};
use crate::domain::{UploadItem, WriteSummary};

/// Write each upload item into `dir` under its sanitized name.
///
/// Items without a name or data, and items whose name sanitizes to nothing,
/// are skipped silently. Existing files are overwritten. The first failing
/// write aborts the batch and is returned; files written before it stay on
/// disk but are not reported.
pub fn write_files(dir: &str, items: &[UploadItem]) -> Result<WriteSummary, FileTransferError> {
    if dir.trim().is_empty() || items.is_empty() {
        return Err(FileTransferError::Validation(
            "a target directory and at least one file are required".to_string(),
        ));
    }
    let path = existing_dir(dir)?;

    let mut summary = WriteSummary::default();
    for item in items {
        let (Some(raw_name), Some(data)) = (item.name.as_deref(), item.data.as_deref()) else {
            continue;
        };
        let Some(name) = sanitize_file_name(raw_name) else {
            debug!(raw_name, "Skipping upload with unusable name");
            continue;
        };

        let target = path.join(&name);
        fs::write(&target, data).map_err(|source| FileTransferError::Io {
            path: target.clone(),
            source,
        })?;
        debug!(target = %target.display(), bytes = data.len(), "Wrote upload");
        summary.push(name);
    }

    info!(dir = %path.display(), count = summary.count, "Upload batch written");
    Ok(summary)
}
