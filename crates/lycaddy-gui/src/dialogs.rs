//! Directory picker operations for the panel backend.

use lycaddy_core::PickPurpose;
use tracing::{debug, warn};

use crate::deps::PanelDeps;

/// Directory picker operations handler.
pub struct DialogOps<'a> {
    deps: &'a PanelDeps,
}

impl<'a> DialogOps<'a> {
    pub const fn new(deps: &'a PanelDeps) -> Self {
        Self { deps }
    }

    /// Ask the user for a directory. `None` when cancelled.
    ///
    /// Pickers may block on user input, so they run off the async executor.
    pub async fn pick(&self, purpose: PickPurpose) -> Option<String> {
        let picker = self.deps.picker.clone();
        let picked = match tokio::task::spawn_blocking(move || picker.pick_directory(purpose)).await
        {
            Ok(picked) => picked,
            Err(e) => {
                warn!(error = %e, "Directory picker task failed");
                None
            }
        };
        debug!(?purpose, ?picked, "Directory picker closed");
        picked.map(|p| p.to_string_lossy().into_owned())
    }
}
