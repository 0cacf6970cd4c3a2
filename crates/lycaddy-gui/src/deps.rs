//! Dependency injection for `PanelBackend`.

use std::sync::Arc;

use lycaddy_core::{CaddyLayout, DirectoryPicker};
use lycaddy_runtime::CaddySupervisor;

/// Dependencies required to construct a `PanelBackend`.
///
/// Fields are private to enforce construction via `PanelDeps::new()`.
pub struct PanelDeps {
    /// Caddy directory layout; the Caddyfile path comes from here.
    pub(crate) layout: CaddyLayout,
    /// The single server supervisor.
    pub(crate) supervisor: Arc<CaddySupervisor>,
    /// Platform directory picker.
    pub(crate) picker: Arc<dyn DirectoryPicker>,
}

impl PanelDeps {
    /// Create a new dependency container.
    ///
    /// The layout is taken from the supervisor's configuration so the config
    /// editor and the server always agree on the caddy directory.
    pub fn new(supervisor: Arc<CaddySupervisor>, picker: Arc<dyn DirectoryPicker>) -> Self {
        Self {
            layout: supervisor.config().layout.clone(),
            supervisor,
            picker,
        }
    }

    /// The caddy directory layout in use.
    pub const fn layout(&self) -> &CaddyLayout {
        &self.layout
    }
}
