//! Directory picker port.
//!
//! Choosing a directory is platform UI (native dialogs, prompts). The
//! facade only needs the chosen path, or nothing when the user cancels.

use std::path::PathBuf;

/// Why a directory is being picked; adapters use it for dialog titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPurpose {
    /// Document root for the server.
    ServeRoot,
    /// Destination folder for uploads.
    UploadTarget,
}

impl PickPurpose {
    /// Title shown to the user.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ServeRoot => "Select static file root directory",
            Self::UploadTarget => "Select folder to upload into",
        }
    }
}

/// Port for asking the user to choose a directory.
pub trait DirectoryPicker: Send + Sync {
    /// Show a picker and return the chosen directory, or `None` on cancel.
    fn pick_directory(&self, purpose: PickPurpose) -> Option<PathBuf>;
}
