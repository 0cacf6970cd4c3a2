//! Fixed operating constants for the control panel.

use std::time::Duration;

/// Port assumed when the Caddyfile has no `:<port> {` block, and the
/// fallback for port input that is not a usable number.
pub const DEFAULT_PORT: u16 = 80;

/// Wait between terminating the old server and spawning the new one during
/// a restart, so the listening port is released before it is bound again.
pub const RESTART_GRACE_PERIOD: Duration = Duration::from_millis(800);

/// Arguments passed to the server executable. The config path is relative
/// because the child runs with the caddy directory as its working directory.
pub const SPAWN_ARGS: [&str; 3] = ["run", "--config", "Caddyfile"];
