//! Exit watcher for the supervised child.

use std::sync::Arc;
use std::time::Duration;

use lycaddy_core::SupervisorEvent;
use tokio::process::Child;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::signal::{describe_exit, request_termination};
use super::supervisor::Shared;

/// How long to wait for output readers to drain after the child exits.
///
/// A grandchild holding the pipes open must not delay the exit event forever.
const READER_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Owns the child until it exits.
///
/// A message on `terminate_rx` means the supervisor has already signalled the
/// child (Unix) or wants it killed (Windows). A dropped sender without a
/// message triggers a termination request from here. Once the child is reaped
/// its slot is cleared, provided it still belongs to `generation`, and the exit
/// event is emitted.
pub(super) async fn watch_child(
    shared: Arc<Shared>,
    generation: u64,
    mut child: Child,
    mut terminate_rx: oneshot::Receiver<()>,
    readers: Vec<JoinHandle<()>>,
) {
    let status = tokio::select! {
        status = child.wait() => status,
        request = &mut terminate_rx => {
            if request.is_err() || cfg!(not(unix)) {
                request_termination(&mut child);
            }
            child.wait().await
        }
    };

    for reader in readers {
        if timeout(READER_DRAIN_TIMEOUT, reader).await.is_err() {
            debug!("Output reader still open after exit, not waiting for it");
        }
    }

    shared.release(generation);

    match status {
        Ok(status) => {
            let (code, signal) = describe_exit(status);
            info!(generation, ?code, ?signal, "Server process exited");
            shared.emit(SupervisorEvent::exit(code, signal));
        }
        Err(e) => {
            warn!(generation, error = %e, "Failed to wait on server process");
            shared.emit(SupervisorEvent::spawn_error(format!(
                "Failed to wait on server process: {e}"
            )));
            shared.emit(SupervisorEvent::exit(None, None));
        }
    }
}
