//! Core domain for the lycaddy control panel.
//!
//! This crate owns everything that does not require spawning a process:
//!
//! - `domain` - Plain data types shared by every layer
//! - `caddyfile` - Targeted edits of the `root *` and `:<port> {` directives
//! - `files` - Directory listing and upload copying for the served directory
//! - `events` - Supervisor event payloads pushed to subscribers
//! - `ports` - Trait abstractions and the error taxonomy
//! - `paths` - Resolution of the bundled `caddy/` directory
//!
//! Process supervision lives in `lycaddy-runtime`.

#![deny(unused_crate_dependencies)]

pub mod caddyfile;
pub mod domain;
pub mod events;
pub mod files;
pub mod paths;
pub mod ports;
pub mod settings;

// Silence unused dev-dependency warnings for integration-only crates
#[cfg(test)]
use serde_json as _;

// Re-export commonly used types for convenience
pub use caddyfile::{CaddyfileError, read_config, write_config};
pub use domain::{DirEntry, ServerConfig, UploadItem, WriteSummary};
pub use events::{ExitInfo, StreamKind, SupervisorEvent};
pub use files::{FileTransferError, list_dir, sanitize_file_name, write_files};
pub use paths::{
    CaddyDirSource, CaddyLayout, PathError, ResolvedPaths, expand_user_path, resolve_caddy_dir,
};
pub use ports::{
    CoreError, DirectoryPicker, ErrorKind, NoopEmitter, PickPurpose, SupervisorError,
    SupervisorEventEmitter,
};
pub use settings::{DEFAULT_PORT, RESTART_GRACE_PERIOD, SPAWN_ARGS};
