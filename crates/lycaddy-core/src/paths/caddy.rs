//! Locations of the server executable and its Caddyfile.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{detect_local_repo, executable_dir};

/// Environment variable overriding the caddy directory.
pub const CADDY_DIR_ENV: &str = "LYCADDY_CADDY_DIR";

/// Name of the configuration file inside the caddy directory.
pub const CADDYFILE_NAME: &str = "Caddyfile";

/// Name of the server executable inside the caddy directory.
#[cfg(target_os = "windows")]
pub const EXECUTABLE_NAME: &str = "ly-caddy.exe";

/// Name of the server executable inside the caddy directory.
#[cfg(not(target_os = "windows"))]
pub const EXECUTABLE_NAME: &str = "ly-caddy";

/// Where the caddy directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaddyDirSource {
    /// Passed explicitly (e.g. `--caddy-dir`).
    Explicit,
    /// `LYCADDY_CADDY_DIR` environment variable.
    EnvVar,
    /// `caddy/` in the source checkout.
    SourceCheckout,
    /// `caddy/` next to the running executable.
    ExecutableDir,
}

/// Resolve the caddy directory.
///
/// Resolution order:
/// 1. `explicit`, when given
/// 2. `LYCADDY_CADDY_DIR` environment variable
/// 3. `<repo>/caddy` when running from source
/// 4. `<executable dir>/caddy`
pub fn resolve_caddy_dir(explicit: Option<&Path>) -> Result<(PathBuf, CaddyDirSource), PathError> {
    if let Some(dir) = explicit {
        return Ok((dir.to_path_buf(), CaddyDirSource::Explicit));
    }

    if let Ok(dir) = env::var(CADDY_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok((PathBuf::from(dir), CaddyDirSource::EnvVar));
    }

    if let Some(repo) = detect_local_repo() {
        return Ok((repo.join("caddy"), CaddyDirSource::SourceCheckout));
    }

    Ok((executable_dir()?.join("caddy"), CaddyDirSource::ExecutableDir))
}

/// The fixed file layout of a caddy directory.
///
/// The executable is always run with the directory as its working directory
/// so the relative `--config Caddyfile` argument resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaddyLayout {
    /// The caddy directory itself.
    pub dir: PathBuf,
    /// `<dir>/Caddyfile`.
    pub caddyfile: PathBuf,
    /// `<dir>/ly-caddy[.exe]`.
    pub executable: PathBuf,
}

impl CaddyLayout {
    /// Layout rooted at `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            caddyfile: dir.join(CADDYFILE_NAME),
            executable: dir.join(EXECUTABLE_NAME),
            dir,
        }
    }

    /// Resolve the layout using [`resolve_caddy_dir`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PathError> {
        resolve_caddy_dir(explicit).map(|(dir, _)| Self::from_dir(dir))
    }

    /// Whether the server executable is present.
    pub fn has_executable(&self) -> bool {
        self.executable.is_file()
    }
}
