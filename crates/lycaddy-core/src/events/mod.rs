//! Supervisor events pushed to subscribers.
//!
//! Events are produced asynchronously by the process supervisor and
//! delivered through a [`SupervisorEventEmitter`](crate::ports::SupervisorEventEmitter).
//! Consumers drain them independently of the call that spawned the server.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag for front-end compatibility:
//!
//! ```json
//! { "type": "stdout", "text": "serving initial configuration" }
//! { "type": "exit", "code": null, "signal": "SIGTERM" }
//! ```

use serde::{Deserialize, Serialize};

/// Which child stream a chunk of output came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    /// Stream name as used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// How the child process terminated.
///
/// Exactly one of the fields is normally set: `code` for a regular exit,
/// `signal` when the process was killed by a signal (Unix only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitInfo {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Name of the terminating signal, e.g. `SIGTERM`.
    pub signal: Option<String>,
}

impl ExitInfo {
    /// Whether the process reported a zero exit code.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl std::fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(signal)) => write!(f, "signal {signal}"),
            (None, None) => write!(f, "unknown status"),
        }
    }
}

/// Events emitted by the process supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SupervisorEvent {
    /// The server process was spawned.
    Started {
        /// OS process id of the child.
        pid: u32,
    },

    /// A line of standard output from the child.
    Stdout {
        /// The line, without its terminator.
        text: String,
    },

    /// A line of standard error from the child.
    Stderr {
        /// The line, without its terminator.
        text: String,
    },

    /// A termination signal was sent to the child.
    Stopping {
        /// OS process id of the child.
        pid: u32,
    },

    /// The child terminated, for any reason.
    Exit(ExitInfo),

    /// The OS failed to create or wait on the process.
    SpawnError {
        /// Human-readable failure description.
        message: String,
    },
}

impl SupervisorEvent {
    /// Create an output event for the given stream.
    pub fn output(stream: StreamKind, text: impl Into<String>) -> Self {
        match stream {
            StreamKind::Stdout => Self::Stdout { text: text.into() },
            StreamKind::Stderr => Self::Stderr { text: text.into() },
        }
    }

    /// Create an exit event.
    pub const fn exit(code: Option<i32>, signal: Option<String>) -> Self {
        Self::Exit(ExitInfo { code, signal })
    }

    /// Create a spawn error event.
    pub fn spawn_error(message: impl Into<String>) -> Self {
        Self::SpawnError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_event_serialization() {
        let event = SupervisorEvent::output(StreamKind::Stderr, "listening on :80");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"stderr","text":"listening on :80"}"#);
    }

    #[test]
    fn exit_event_serialization() {
        let event = SupervisorEvent::exit(None, Some("SIGTERM".to_string()));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"exit","code":null,"signal":"SIGTERM"}"#);
    }

    #[test]
    fn spawn_error_serialization() {
        let json = serde_json::to_string(&SupervisorEvent::spawn_error("denied")).unwrap();
        assert_eq!(json, r#"{"type":"spawn_error","message":"denied"}"#);
    }

    #[test]
    fn exit_info_display() {
        assert_eq!(ExitInfo { code: Some(1), signal: None }.to_string(), "exit code 1");
        assert_eq!(
            ExitInfo { code: None, signal: Some("SIGKILL".into()) }.to_string(),
            "signal SIGKILL"
        );
    }
}
