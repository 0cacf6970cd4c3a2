//! Graceful termination and exit-status decoding.

use std::process::ExitStatus;

use lycaddy_core::SupervisorError;
use tokio::process::Child;
use tracing::warn;

#[cfg(unix)]
use tracing::debug;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Send SIGTERM to `pid` without waiting for it to exit.
///
/// A process that is already gone counts as terminated. On Windows there is
/// no graceful signal; the exit watcher kills the child instead, so this is a
/// no-op there.
pub(super) fn send_terminate(pid: u32) -> Result<(), SupervisorError> {
    #[cfg(unix)]
    {
        if pid == 0 {
            // Never signal our own process group
            debug!("No pid recorded, nothing to signal");
            return Ok(());
        }
        let raw = i32::try_from(pid)
            .map_err(|_| SupervisorError::Signal(format!("pid {pid} out of range")))?;
        match signal::kill(Pid::from_raw(raw), Signal::SIGTERM) {
            Ok(()) => {
                debug!(pid, "Sent SIGTERM");
                Ok(())
            }
            Err(Errno::ESRCH) => {
                debug!(pid, "Process already gone");
                Ok(())
            }
            Err(e) => Err(SupervisorError::Signal(format!("SIGTERM to pid {pid}: {e}"))),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = pid;
        Ok(())
    }
}

/// Ask the child to exit from the watcher side.
///
/// Used when no caller has signalled the child yet.
pub(super) fn request_termination(child: &mut Child) {
    #[cfg(unix)]
    {
        let Some(pid) = child.id() else {
            debug!("Child already reaped, nothing to signal");
            return;
        };
        if let Err(e) = send_terminate(pid) {
            warn!(pid, error = %e, "Failed to send SIGTERM");
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = child.start_kill() {
            warn!(error = %e, "Failed to terminate server process");
        }
    }
}

/// Exit code and terminating signal name for a finished child.
pub(super) fn describe_exit(status: ExitStatus) -> (Option<i32>, Option<String>) {
    (status.code(), signal_name(status))
}

#[cfg(unix)]
fn signal_name(status: ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map(|raw| {
        Signal::try_from(raw).map_or_else(|_| format!("SIG{raw}"), |sig| sig.as_str().to_string())
    })
}

#[cfg(not(unix))]
fn signal_name(_status: ExitStatus) -> Option<String> {
    None
}
