//! File transfer command handlers.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use lycaddy_core::UploadItem;
use lycaddy_gui::FileOps;
use lycaddy_gui::types::ListReply;

use crate::error::CliError;
use crate::presentation::format_listing;

/// List a directory.
pub async fn list(dir: String, json: bool) -> Result<()> {
    let result = FileOps::list(dir).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&ListReply::from(result.clone()))?);
    }

    let entries = result.map_err(CliError::from)?;
    if !json {
        println!("{}", format_listing(&entries));
    }
    Ok(())
}

/// Copy local files into `dir`.
pub async fn upload(dir: String, files: &[PathBuf]) -> Result<()> {
    let items = read_upload_items(files)?;
    let summary = FileOps::write(dir, items).await.map_err(CliError::from)?;

    println!("Wrote {} file(s)", summary.count);
    for name in &summary.written {
        println!("  {name}");
    }
    Ok(())
}

/// Load local files as upload items.
///
/// The item name is the path as given; the upload sanitizes it down to the
/// base name.
pub fn read_upload_items(files: &[PathBuf]) -> Result<Vec<UploadItem>, CliError> {
    files
        .iter()
        .map(|path| {
            let data = fs::read(path)
                .map_err(|e| CliError::Io(format!("Failed to read {}: {e}", path.display())))?;
            Ok(UploadItem::new(path.to_string_lossy(), data))
        })
        .collect()
}
