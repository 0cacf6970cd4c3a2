//! The single-slot process supervisor.

use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lycaddy_core::{
    CaddyLayout, RESTART_GRACE_PERIOD, SPAWN_ARGS, StreamKind, SupervisorError,
    SupervisorEvent, SupervisorEventEmitter,
};
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::signal::send_terminate;
use super::stream::spawn_stream_reader;
use super::watch::watch_child;

/// How the supervisor launches the server.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Caddy directory, used as the child's working directory.
    pub layout: CaddyLayout,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
    /// Wait between terminating and respawning during `restart`.
    pub restart_grace: Duration,
}

impl SupervisorConfig {
    /// Default launch settings for `layout`.
    pub fn new(layout: CaddyLayout) -> Self {
        Self {
            layout,
            args: SPAWN_ARGS.iter().map(ToString::to_string).collect(),
            restart_grace: RESTART_GRACE_PERIOD,
        }
    }

    /// Override the restart grace period.
    #[must_use]
    pub const fn with_restart_grace(mut self, grace: Duration) -> Self {
        self.restart_grace = grace;
        self
    }
}

/// The live child as seen by the supervisor.
///
/// The `Child` itself is owned by its exit watcher task.
struct RunningServer {
    generation: u64,
    pid: u32,
    terminate_tx: oneshot::Sender<()>,
}

impl RunningServer {
    /// Tell the exit watcher the child has been signalled.
    fn notify_terminated(self) {
        // Watcher already gone means the child has exited
        if self.terminate_tx.send(()).is_err() {
            debug!(pid = self.pid, "Exit watcher already finished");
        }
    }
}

/// State shared between the supervisor and its watcher tasks.
pub(super) struct Shared {
    slot: Mutex<Option<RunningServer>>,
    emitter: Arc<dyn SupervisorEventEmitter>,
}

impl Shared {
    fn slot(&self) -> MutexGuard<'_, Option<RunningServer>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn emit(&self, event: SupervisorEvent) {
        self.emitter.emit(event);
    }

    /// Clear the slot if it still holds the process of `generation`.
    pub(super) fn release(&self, generation: u64) {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|s| s.generation == generation) {
            *slot = None;
            debug!(generation, "Cleared server slot after exit");
        }
    }
}

/// Supervises at most one `ly-caddy` child process.
///
/// State is `Running` while a child is held in the slot and `Stopped`
/// otherwise. The slot is cleared by `stop`, by `restart`, and by the exit
/// watcher when the child terminates for any reason.
pub struct CaddySupervisor {
    config: SupervisorConfig,
    shared: Arc<Shared>,
    next_generation: AtomicU64,
}

impl CaddySupervisor {
    /// Create a stopped supervisor emitting events to `emitter`.
    pub fn new(config: SupervisorConfig, emitter: Arc<dyn SupervisorEventEmitter>) -> Self {
        Self {
            config,
            shared: Arc::new(Shared {
                slot: Mutex::new(None),
                emitter,
            }),
            next_generation: AtomicU64::new(1),
        }
    }

    /// Launch settings.
    pub const fn config(&self) -> &SupervisorConfig {
        &self.config
    }

    /// Spawn the server. Fails if one is already held or the executable is
    /// missing.
    pub async fn start(&self) -> Result<u32, SupervisorError> {
        let mut slot = self.shared.slot();
        if slot.is_some() {
            return Err(SupervisorError::AlreadyRunning);
        }
        self.spawn_into(&mut slot)
    }

    /// Send a graceful termination signal and clear the slot.
    ///
    /// The signal has been delivered when this returns; the exit event
    /// arrives later. If signalling fails the slot is left untouched.
    pub async fn stop(&self) -> Result<(), SupervisorError> {
        let pid = self.terminate_held()?.ok_or(SupervisorError::NotRunning)?;
        info!(pid, "Stopped server");
        Ok(())
    }

    /// Stop the server if running, wait out the grace period, then spawn.
    ///
    /// Succeeds from `Stopped` as well.
    pub async fn restart(&self) -> Result<u32, SupervisorError> {
        if let Some(pid) = self.terminate_held()? {
            info!(pid, "Restarting server");
            tokio::time::sleep(self.config.restart_grace).await;
        }

        let mut slot = self.shared.slot();
        if slot.is_some() {
            // Another start won the race during the grace period
            return Err(SupervisorError::AlreadyRunning);
        }
        self.spawn_into(&mut slot)
    }

    /// Whether a child is currently held.
    pub fn status(&self) -> bool {
        self.shared.slot().is_some()
    }

    /// PID of the held child, if any.
    pub fn pid(&self) -> Option<u32> {
        self.shared.slot().as_ref().map(|s| s.pid)
    }

    /// Best-effort termination for application shutdown. Not awaited.
    ///
    /// SIGTERM is sent before this returns, so the child terminates
    /// gracefully even if the async runtime is torn down right after.
    pub fn shutdown(&self) {
        match self.terminate_held() {
            Ok(Some(pid)) => info!(pid, "Terminated server on shutdown"),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Failed to terminate server on shutdown");
                // Dropping the slot hands termination to the exit watcher
                drop(self.shared.slot().take());
            }
        }
    }

    /// Signal the held child, clear the slot and emit `Stopping`.
    ///
    /// Returns the signalled pid, or `None` when no child is held.
    fn terminate_held(&self) -> Result<Option<u32>, SupervisorError> {
        let mut slot = self.shared.slot();
        let Some(pid) = slot.as_ref().map(|s| s.pid) else {
            return Ok(None);
        };
        send_terminate(pid)?;
        if let Some(running) = slot.take() {
            running.notify_terminated();
        }
        drop(slot);

        self.shared.emit(SupervisorEvent::Stopping { pid });
        Ok(Some(pid))
    }

    fn spawn_into(&self, slot: &mut Option<RunningServer>) -> Result<u32, SupervisorError> {
        let layout = &self.config.layout;
        if !layout.executable.is_file() {
            return Err(SupervisorError::ExecutableNotFound(layout.executable.clone()));
        }

        let mut child = match Command::new(&layout.executable)
            .args(&self.config.args)
            .current_dir(&layout.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(executable = %layout.executable.display(), error = %e, "Failed to spawn server");
                self.shared.emit(SupervisorEvent::spawn_error(e.to_string()));
                return Err(SupervisorError::Spawn(e));
            }
        };

        let pid = child.id().unwrap_or_default();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        info!(pid, generation, dir = %layout.dir.display(), "Server started");
        self.shared.emit(SupervisorEvent::Started { pid });

        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_stream_reader(
                stdout,
                StreamKind::Stdout,
                self.shared.emitter.clone(),
            ));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(spawn_stream_reader(
                stderr,
                StreamKind::Stderr,
                self.shared.emitter.clone(),
            ));
        }

        let (terminate_tx, terminate_rx) = oneshot::channel();
        tokio::spawn(watch_child(
            self.shared.clone(),
            generation,
            child,
            terminate_rx,
            readers,
        ));

        *slot = Some(RunningServer {
            generation,
            pid,
            terminate_tx,
        });
        Ok(pid)
    }
}

impl Drop for CaddySupervisor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lycaddy_core::NoopEmitter;

    fn supervisor_in(dir: &std::path::Path) -> CaddySupervisor {
        CaddySupervisor::new(
            SupervisorConfig::new(CaddyLayout::from_dir(dir)),
            Arc::new(NoopEmitter::new()),
        )
    }

    #[test]
    fn config_defaults() {
        let config = SupervisorConfig::new(CaddyLayout::from_dir("/srv/caddy"));
        assert_eq!(config.args, vec!["run", "--config", "Caddyfile"]);
        assert_eq!(config.restart_grace, Duration::from_millis(800));
    }

    #[tokio::test]
    async fn new_supervisor_is_stopped() {
        let dir = tempfile::tempdir().unwrap();
        let supervisor = supervisor_in(dir.path());
        assert!(!supervisor.status());
        assert_eq!(supervisor.pid(), None);
    }

    #[tokio::test]
    async fn start_without_executable_fails() {
        let dir = tempfile::tempdir().unwrap();
        let supervisor = supervisor_in(dir.path());
        let err = supervisor.start().await.unwrap_err();
        assert!(matches!(err, SupervisorError::ExecutableNotFound(_)));
        assert!(!supervisor.status());
    }

    #[tokio::test]
    async fn restart_without_executable_fails() {
        let dir = tempfile::tempdir().unwrap();
        let supervisor = supervisor_in(dir.path());
        let err = supervisor.restart().await.unwrap_err();
        assert!(matches!(err, SupervisorError::ExecutableNotFound(_)));
    }

    #[tokio::test]
    async fn stop_when_stopped_fails() {
        let dir = tempfile::tempdir().unwrap();
        let supervisor = supervisor_in(dir.path());
        assert!(matches!(
            supervisor.stop().await,
            Err(SupervisorError::NotRunning)
        ));
    }

    #[test]
    fn shutdown_when_stopped_is_noop() {
        let supervisor = supervisor_in(std::path::Path::new("/nonexistent"));
        supervisor.shutdown();
        assert!(!supervisor.status());
    }
}
