//! Path utilities for the bundled caddy directory.
//!
//! The server executable and its Caddyfile live side by side in a `caddy/`
//! directory whose location depends on how the panel is run:
//!
//! - Explicit override (CLI flag)
//! - `LYCADDY_CADDY_DIR` environment variable
//! - `<repo>/caddy` when running from a source checkout
//! - `<executable dir>/caddy` for installed builds
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod caddy;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use caddy::{CADDYFILE_NAME, CaddyDirSource, CaddyLayout, EXECUTABLE_NAME, resolve_caddy_dir};
pub use error::PathError;
pub use platform::{expand_user_path, is_source_checkout};
pub use resolver::ResolvedPaths;
