//! `PanelBackend` - the unified panel orchestration facade.
//!
//! This is the main entry point for all panel operations. Each method is one
//! boundary operation and never fails: errors are folded into the reply.

use std::sync::Arc;

use lycaddy_core::{CaddyLayout, PickPurpose, UploadItem};
use lycaddy_runtime::CaddySupervisor;

use crate::config::ConfigOps;
use crate::deps::PanelDeps;
use crate::dialogs::DialogOps;
use crate::error::GuiError;
use crate::files::FileOps;
use crate::server::ServerOps;
use crate::types::{
    ConfigReply, ListReply, OkReply, PickReply, ServerReply, StatusReply, WriteReply,
};

/// Unified panel backend facade.
///
/// # Construction
///
/// ```ignore
/// let deps = PanelDeps::new(supervisor, picker);
/// let backend = PanelBackend::new(deps);
/// ```
pub struct PanelBackend {
    deps: PanelDeps,
}

impl PanelBackend {
    /// Create a new panel backend with the provided dependencies.
    pub const fn new(deps: PanelDeps) -> Self {
        Self { deps }
    }

    // Accessors for ops modules
    const fn config_ops(&self) -> ConfigOps<'_> {
        ConfigOps::new(&self.deps)
    }

    const fn server_ops(&self) -> ServerOps<'_> {
        ServerOps::new(&self.deps)
    }

    const fn dialog_ops(&self) -> DialogOps<'_> {
        DialogOps::new(&self.deps)
    }

    /// Injected dependencies, for adapters that call ops modules directly.
    pub const fn deps(&self) -> &PanelDeps {
        &self.deps
    }

    /// Caddy directory layout in use.
    pub const fn layout(&self) -> &CaddyLayout {
        self.deps.layout()
    }

    /// The supervisor, for shutdown hooks.
    pub fn supervisor(&self) -> Arc<CaddySupervisor> {
        self.deps.supervisor.clone()
    }

    // =========================================================================
    // Config editor
    // =========================================================================

    /// Read root path and port from the Caddyfile.
    pub async fn read_config(&self) -> ConfigReply {
        self.config_ops().read().await.into()
    }

    /// Update root path and port. `port` is raw input; unusable values become 80.
    pub async fn write_config(&self, root_path: &str, port: &str) -> OkReply {
        self.config_ops().write(root_path, port).await.map(|_| ()).into()
    }

    /// Pick a new document root.
    pub async fn select_directory(&self) -> PickReply {
        self.dialog_ops().pick(PickPurpose::ServeRoot).await.into()
    }

    // =========================================================================
    // Server lifecycle
    // =========================================================================

    /// Start the server.
    pub async fn start_server(&self) -> ServerReply {
        self.server_ops().start().await.into()
    }

    /// Stop the server without waiting for it to exit.
    pub async fn stop_server(&self) -> ServerReply {
        self.server_ops().stop().await.into()
    }

    /// Restart the server, or start it if stopped.
    pub async fn restart_server(&self) -> ServerReply {
        self.server_ops().restart().await.into()
    }

    /// Whether a server process is held.
    pub fn get_status(&self) -> StatusReply {
        StatusReply {
            running: self.server_ops().status(),
        }
    }

    // =========================================================================
    // File transfer
    // =========================================================================

    /// Pick a folder to upload into.
    pub async fn select_upload_folder(&self) -> PickReply {
        self.dialog_ops().pick(PickPurpose::UploadTarget).await.into()
    }

    /// List a directory. `None` or an empty path is a validation error.
    pub async fn list_files(&self, dir: Option<&str>) -> ListReply {
        let result = match required_dir(dir, "Select a resource path first") {
            Ok(dir) => FileOps::list(dir).await,
            Err(e) => Err(e),
        };
        result.into()
    }

    /// Copy uploaded buffers into `dir`.
    pub async fn write_files(&self, dir: Option<&str>, items: Vec<UploadItem>) -> WriteReply {
        let result = match required_dir(dir, "Select a folder and files to upload first") {
            Ok(dir) => FileOps::write(dir, items).await,
            Err(e) => Err(e),
        };
        result.into()
    }
}

fn required_dir(dir: Option<&str>, message: &str) -> Result<String, GuiError> {
    dir.filter(|d| !d.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GuiError::ValidationFailed(message.to_string()))
}
