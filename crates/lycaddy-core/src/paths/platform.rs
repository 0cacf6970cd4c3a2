//! Platform-specific path detection and resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Detect if we are running from the local repository.
///
/// Debug builds always use the repository they were built from. Release
/// builds only do so when the executable lives inside that repository.
#[allow(clippy::unnecessary_wraps)] // Option is needed for release builds
pub(super) fn detect_local_repo() -> Option<PathBuf> {
    let repo_root = PathBuf::from(env!("LYCADDY_REPO_ROOT"));

    #[cfg(debug_assertions)]
    {
        Some(repo_root)
    }

    #[cfg(not(debug_assertions))]
    {
        if !repo_root.join("Cargo.toml").exists() {
            return None;
        }

        let exe = env::current_exe().ok()?.canonicalize().ok()?;
        let repo = repo_root.canonicalize().ok()?;
        exe.starts_with(&repo).then_some(repo_root)
    }
}

/// Whether the panel is running from a source checkout.
pub fn is_source_checkout() -> bool {
    detect_local_repo().is_some()
}

/// Directory containing the running executable.
pub(super) fn executable_dir() -> Result<PathBuf, PathError> {
    let exe = env::current_exe().map_err(|e| PathError::ExecutableDirError(e.to_string()))?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| PathError::ExecutableDirError(format!("{} has no parent", exe.display())))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn expand_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
