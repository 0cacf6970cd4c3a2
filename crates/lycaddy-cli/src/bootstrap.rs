//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI adapter: path resolution, the supervisor and its event
//! broadcaster, the prompt-based directory picker and the panel backend.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use lycaddy_core::{CaddyLayout, ResolvedPaths};
use lycaddy_gui::{PanelBackend, PanelDeps};
use lycaddy_runtime::{CaddySupervisor, EventBroadcaster, SupervisorConfig, get_event_broadcaster};
use tracing::debug;

use crate::error::CliError;
use crate::picker::PromptPicker;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// All resolved paths, including the caddy directory layout.
    pub paths: ResolvedPaths,
}

impl CliConfig {
    /// Resolve paths, honouring a `--caddy-dir` override.
    pub fn with_defaults(caddy_dir: Option<PathBuf>) -> Result<Self, CliError> {
        Ok(Self {
            paths: ResolvedPaths::resolve(caddy_dir.as_deref())?,
        })
    }

    /// The caddy directory layout.
    pub const fn layout(&self) -> &CaddyLayout {
        &self.paths.layout
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The panel facade every command delegates to.
    pub backend: PanelBackend,
    /// Supervisor events, for commands that relay server output.
    pub events: Arc<EventBroadcaster>,
    /// The configuration the context was built from.
    pub config: CliConfig,
}

impl CliContext {
    /// Best-effort termination of the server, run before the CLI exits.
    pub fn shutdown(&self) {
        self.backend.supervisor().shutdown();
    }
}

/// Wire the panel backend for `config`.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let events = get_event_broadcaster();
    let supervisor = Arc::new(CaddySupervisor::new(
        SupervisorConfig::new(config.layout().clone()),
        events.clone(),
    ));
    let backend = PanelBackend::new(PanelDeps::new(supervisor, Arc::new(PromptPicker::new())));

    debug!(caddy_dir = %config.layout().dir.display(), source = ?config.paths.source, "CLI context ready");

    CliContext {
        backend,
        events,
        config,
    }
}
