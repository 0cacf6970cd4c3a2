//! Directory listing entries and upload payloads.

use serde::{Deserialize, Serialize};

/// One entry of a directory listing.
///
/// Recomputed on every listing request; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    /// File name within the listed directory.
    pub name: String,
    /// Size in bytes; 0 for directories and for entries that could not be stat'ed.
    pub size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirEntry {
    /// Entry for a regular file.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir: false,
        }
    }

    /// Entry for a directory.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            is_dir: true,
        }
    }
}

/// A file handed over by the UI for copying into a target directory.
///
/// Both fields are optional because the payload comes from an untrusted
/// front end; incomplete items are skipped, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadItem {
    /// Untrusted file name, sanitized before use.
    pub name: Option<String>,
    /// Raw file contents.
    pub data: Option<Vec<u8>>,
}

impl UploadItem {
    /// Create a complete upload item.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Some(name.into()),
            data: Some(data.into()),
        }
    }
}

/// Outcome of a successful upload batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteSummary {
    /// Sanitized names actually written, in input order.
    pub written: Vec<String>,
    /// Number of files written.
    pub count: usize,
}

impl WriteSummary {
    /// Record a written file.
    pub fn push(&mut self, name: String) {
        self.written.push(name);
        self.count = self.written.len();
    }
}
