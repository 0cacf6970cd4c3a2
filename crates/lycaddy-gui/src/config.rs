//! Caddyfile operations for the panel backend.

use lycaddy_core::{ServerConfig, read_config, write_config};
use tracing::info;

use crate::deps::PanelDeps;
use crate::error::GuiError;

/// Config editor operations handler.
pub struct ConfigOps<'a> {
    deps: &'a PanelDeps,
}

impl<'a> ConfigOps<'a> {
    pub const fn new(deps: &'a PanelDeps) -> Self {
        Self { deps }
    }

    /// Read root path and port from the Caddyfile.
    pub async fn read(&self) -> Result<ServerConfig, GuiError> {
        let path = self.deps.layout.caddyfile.clone();
        run_blocking(move || read_config(&path).map_err(GuiError::from)).await
    }

    /// Write root path and port, taking both as raw UI input.
    pub async fn write(&self, root_path: &str, port: &str) -> Result<ServerConfig, GuiError> {
        let config = ServerConfig::from_input(root_path, port);
        let path = self.deps.layout.caddyfile.clone();
        let written = config.clone();
        run_blocking(move || write_config(&path, &written).map_err(GuiError::from)).await?;
        info!(root = %config.root_path, port = config.port, "Caddyfile updated");
        Ok(config)
    }
}

/// Run filesystem work off the async executor.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, GuiError>
where
    F: FnOnce() -> Result<T, GuiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| GuiError::Internal(format!("Background task failed: {e}")))?
}
