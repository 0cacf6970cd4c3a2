//! Supervisor event broadcasting.
//!
//! Adapters subscribe here to receive output, exit and spawn-error events
//! without polling the supervisor.

use std::sync::{Arc, LazyLock};

use lycaddy_core::{SupervisorEvent, SupervisorEventEmitter};
use tokio::sync::broadcast;
use tracing::debug;

/// Broadcast channel capacity for supervisor events
const CHANNEL_CAPACITY: usize = 256;

/// Global supervisor event broadcaster
static EVENT_BROADCASTER: LazyLock<Arc<EventBroadcaster>> =
    LazyLock::new(|| Arc::new(EventBroadcaster::new()));

/// Get the global supervisor event broadcaster
pub fn get_event_broadcaster() -> Arc<EventBroadcaster> {
    EVENT_BROADCASTER.clone()
}

/// Broadcaster for supervisor events
#[derive(Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<SupervisorEvent>,
}

impl EventBroadcaster {
    /// Create a new broadcaster
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Broadcast an event to all subscribers
    pub fn broadcast(&self, event: SupervisorEvent) {
        // Events with no subscriber are dropped
        if self.sender.receiver_count() > 0 {
            let _ = self.sender.send(event);
        } else {
            debug!(?event, "Dropping supervisor event with no subscribers");
        }
    }

    /// Subscribe to supervisor events
    pub fn subscribe(&self) -> broadcast::Receiver<SupervisorEvent> {
        self.sender.subscribe()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl SupervisorEventEmitter for EventBroadcaster {
    fn emit(&self, event: SupervisorEvent) {
        self.broadcast(event);
    }

    fn clone_box(&self) -> Box<dyn SupervisorEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_every_subscriber() {
        let broadcaster = EventBroadcaster::new();
        let mut a = broadcaster.subscribe();
        let mut b = broadcaster.subscribe();
        assert_eq!(broadcaster.subscriber_count(), 2);

        broadcaster.emit(SupervisorEvent::Started { pid: 42 });

        assert_eq!(a.try_recv().unwrap(), SupervisorEvent::Started { pid: 42 });
        assert_eq!(b.try_recv().unwrap(), SupervisorEvent::Started { pid: 42 });
    }

    #[test]
    fn emit_without_subscribers_is_silent() {
        let broadcaster = EventBroadcaster::default();
        broadcaster.emit(SupervisorEvent::spawn_error("nobody listening"));
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn clone_box_shares_channel() {
        let broadcaster = EventBroadcaster::new();
        let mut rx = broadcaster.subscribe();
        let boxed = broadcaster.clone_box();
        boxed.emit(SupervisorEvent::Stopping { pid: 7 });
        assert_eq!(rx.try_recv().unwrap(), SupervisorEvent::Stopping { pid: 7 });
    }

    #[test]
    fn global_broadcaster_is_shared() {
        let a = get_event_broadcaster();
        let b = get_event_broadcaster();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
