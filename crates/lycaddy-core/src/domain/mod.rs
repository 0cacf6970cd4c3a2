//! Domain types shared across the panel layers.
//!
//! These types carry no behaviour beyond construction and small pure
//! helpers; I/O lives in `caddyfile` and `files`.

mod config;
mod files;

pub use config::ServerConfig;
pub use files::{DirEntry, UploadItem, WriteSummary};
