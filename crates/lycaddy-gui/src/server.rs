//! Server lifecycle operations for the panel backend.

use crate::deps::PanelDeps;
use crate::error::GuiError;

/// Server operations handler.
pub struct ServerOps<'a> {
    deps: &'a PanelDeps,
}

impl<'a> ServerOps<'a> {
    pub const fn new(deps: &'a PanelDeps) -> Self {
        Self { deps }
    }

    /// Start the server. Returns the new running state.
    pub async fn start(&self) -> Result<bool, GuiError> {
        self.deps.supervisor.start().await?;
        Ok(true)
    }

    /// Stop the server. Returns the new running state.
    pub async fn stop(&self) -> Result<bool, GuiError> {
        self.deps.supervisor.stop().await?;
        Ok(false)
    }

    /// Restart the server, starting it if stopped.
    pub async fn restart(&self) -> Result<bool, GuiError> {
        self.deps.supervisor.restart().await?;
        Ok(true)
    }

    /// Whether a server process is held.
    pub fn status(&self) -> bool {
        self.deps.supervisor.status()
    }
}
