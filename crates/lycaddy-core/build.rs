//! Build script for lycaddy-core.
//!
//! Sets `LYCADDY_REPO_ROOT` so a source checkout can locate its bundled
//! `caddy/` directory at runtime.

use std::env;
use std::path::Path;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();

    let workspace_root = Path::new(&crate_dir)
        .parent() // crates/
        .and_then(Path::parent) // workspace root
        .map_or_else(|| crate_dir.clone(), |p| p.to_string_lossy().to_string());

    println!("cargo:rustc-env=LYCADDY_REPO_ROOT={workspace_root}");
    println!("cargo:rerun-if-changed=build.rs");
}
