//! Process runtime for the lycaddy control panel.
//!
//! Owns the single supervised `ly-caddy` child process: spawning it inside the
//! caddy directory, relaying its output, watching for exit and delivering
//! graceful termination signals.

#![deny(unsafe_code)]

pub mod process;

pub use process::{
    CaddySupervisor, EventBroadcaster, SupervisorConfig, get_event_broadcaster,
};
