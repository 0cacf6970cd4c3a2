//! Caddyfile editor.
//!
//! The Caddyfile is a foreign configuration language that is not parsed
//! here. Only two directives are located and rewritten:
//!
//! - `root * <path>` - the document root (first occurrence, line-anchored)
//! - `:<port> {` - the listen port of the first site block
//!
//! Every other byte of the file is preserved, including comments and line
//! endings. Each read and write round-trips through the file; nothing is
//! cached between calls.

mod directives;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::ServerConfig;

pub use directives::{apply_config, parse_config, parse_port, parse_root_path};

/// Errors from reading or writing the Caddyfile.
#[derive(Debug, Error)]
pub enum CaddyfileError {
    /// The file does not exist.
    #[error("Caddyfile not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing failed.
    #[error("Failed to access Caddyfile {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaddyfileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Read the root path and port from the Caddyfile at `path`.
///
/// A missing `root *` directive yields an empty root path; a missing port
/// block yields [`DEFAULT_PORT`](crate::DEFAULT_PORT).
pub fn read_config(path: &Path) -> Result<ServerConfig, CaddyfileError> {
    let content = fs::read_to_string(path).map_err(|e| CaddyfileError::io(path, e))?;
    let config = parse_config(&content);
    debug!(path = %path.display(), root = %config.root_path, port = config.port, "Read Caddyfile");
    Ok(config)
}

/// Rewrite the root path and port in the Caddyfile at `path`.
///
/// The root path is normalized (backslashes become forward slashes, empty
/// becomes `./`) before it is written. Only the first occurrence of each
/// directive is touched; a file lacking a directive is left unchanged in
/// that respect.
pub fn write_config(path: &Path, config: &ServerConfig) -> Result<(), CaddyfileError> {
    let content = fs::read_to_string(path).map_err(|e| CaddyfileError::io(path, e))?;
    let normalized = ServerConfig::new(ServerConfig::normalize_root(&config.root_path), config.port);
    let updated = apply_config(&content, &normalized);
    fs::write(path, updated).map_err(|e| CaddyfileError::io(path, e))?;
    debug!(
        path = %path.display(),
        root = %normalized.root_path,
        port = normalized.port,
        "Wrote Caddyfile"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_PORT;
    use tempfile::TempDir;

    const SAMPLE: &str = "# Served by ly-caddy\n:8080 {\n\troot * ./www # docs\n\tfile_server browse\n}\n";

    fn write_sample(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("Caddyfile");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_config(&dir.path().join("Caddyfile")).unwrap_err();
        assert!(matches!(err, CaddyfileError::NotFound(_)));
    }

    #[test]
    fn read_extracts_both_directives() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, SAMPLE);

        let config = read_config(&path).unwrap();
        assert_eq!(config, ServerConfig::new("./www", 8080));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, SAMPLE);

        write_config(&path, &ServerConfig::new(r"D:\site\dist", 9090)).unwrap();
        let config = read_config(&path).unwrap();

        assert_eq!(config.root_path, "D:/site/dist");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn write_preserves_surrounding_text() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, SAMPLE);

        write_config(&path, &ServerConfig::new("/srv/public", 81)).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert_eq!(
            content,
            "# Served by ly-caddy\n:81 {\n\troot * /srv/public # docs\n\tfile_server browse\n}\n"
        );
    }

    #[test]
    fn write_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = write_config(&dir.path().join("Caddyfile"), &ServerConfig::default());
        assert!(matches!(err, Err(CaddyfileError::NotFound(_))));
    }

    #[test]
    fn read_defaults_when_directives_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, "localhost {\n\tfile_server\n}\n");

        let config = read_config(&path).unwrap();
        assert_eq!(config.root_path, "");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
