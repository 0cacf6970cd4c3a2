//! Upload-folder operations for the panel backend.

use lycaddy_core::{DirEntry, UploadItem, WriteSummary, list_dir, write_files};
use tracing::info;

use crate::config::run_blocking;
use crate::error::GuiError;

/// File transfer operations handler.
///
/// Stateless: every call takes the target directory explicitly.
pub struct FileOps;

impl FileOps {
    /// List a directory, directories first.
    pub async fn list(dir: String) -> Result<Vec<DirEntry>, GuiError> {
        run_blocking(move || list_dir(&dir).map_err(GuiError::from)).await
    }

    /// Copy uploaded buffers into `dir`.
    pub async fn write(dir: String, items: Vec<UploadItem>) -> Result<WriteSummary, GuiError> {
        let summary =
            run_blocking(move || write_files(&dir, &items).map_err(GuiError::from)).await?;
        info!(count = summary.count, "Files uploaded");
        Ok(summary)
    }
}
