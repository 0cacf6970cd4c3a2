//! All resolved paths in one struct, for the `paths` diagnostics command.

use std::path::Path;

use super::{CaddyDirSource, CaddyLayout, PathError, is_source_checkout, resolve_caddy_dir};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Caddy directory, Caddyfile and executable.
    pub layout: CaddyLayout,
    /// How the caddy directory was resolved.
    pub source: CaddyDirSource,
    /// Whether the panel runs from a source checkout.
    pub source_checkout: bool,
}

impl ResolvedPaths {
    /// Resolve all paths, honouring an explicit caddy directory override.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PathError> {
        let (dir, source) = resolve_caddy_dir(explicit)?;
        Ok(Self {
            layout: CaddyLayout::from_dir(dir),
            source,
            source_checkout: is_source_checkout(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "caddy_dir = {}", self.layout.dir.display())?;
        writeln!(f, "caddy_dir_source = {:?}", self.source)?;
        writeln!(f, "caddyfile = {}", self.layout.caddyfile.display())?;
        writeln!(f, "executable = {}", self.layout.executable.display())?;
        writeln!(f, "executable_present = {}", self.layout.has_executable())?;
        write!(f, "source_checkout = {}", self.source_checkout)
    }
}
