//! Supervision of the bundled server process.
//!
//! # Structure
//!
//! - `CaddySupervisor` - Start/stop/restart/status over a single child slot
//! - `EventBroadcaster` - Fan-out of `SupervisorEvent`s to subscribers
//! - Stream readers and the exit watcher run as detached tokio tasks

mod broadcaster;
mod signal;
mod stream;
mod supervisor;
mod watch;

pub use broadcaster::{EventBroadcaster, get_event_broadcaster};
pub use supervisor::{CaddySupervisor, SupervisorConfig};
