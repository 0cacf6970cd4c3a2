//! Event emitter trait for supervisor event delivery.
//!
//! This module defines the abstraction for pushing supervisor events to a
//! subscriber. Implementations handle transport details (broadcast
//! channels, Tauri events, terminal output, etc.).

use crate::events::SupervisorEvent;

/// Trait for emitting supervisor events.
///
/// Called from the supervisor's background reader and watcher tasks, so
/// implementations must not block.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts without a listener
/// - `EventBroadcaster` in `lycaddy-runtime` - tokio broadcast fan-out
pub trait SupervisorEventEmitter: Send + Sync {
    /// Emit a supervisor event.
    fn emit(&self, event: SupervisorEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn SupervisorEventEmitter>` without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn SupervisorEventEmitter>;
}

/// A no-op event emitter that discards every event.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl SupervisorEventEmitter for NoopEmitter {
    fn emit(&self, _event: SupervisorEvent) {}

    fn clone_box(&self) -> Box<dyn SupervisorEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();
        emitter.emit(SupervisorEvent::spawn_error("ignored"));
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn SupervisorEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(SupervisorEvent::Started { pid: 1 });
        let _boxed: Box<dyn SupervisorEventEmitter> = emitter.clone_box();
    }
}
