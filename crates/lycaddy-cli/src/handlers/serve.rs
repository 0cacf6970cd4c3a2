//! Serve command handler.
//!
//! Starts the server and relays its output until Ctrl+C or until the server
//! exits on its own.

use std::time::Duration;

use anyhow::{Context, Result};
use lycaddy_core::SupervisorEvent;
use lycaddy_gui::{ConfigOps, ServerOps};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::timeout;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_event;

/// How long to wait for the exit event after the shutdown signal.
const SHUTDOWN_WAIT: Duration = Duration::from_secs(3);

/// Execute the serve command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut events = ctx.events.subscribe();

    let deps = ctx.backend.deps();
    if let Ok(config) = ConfigOps::new(deps).read().await {
        eprintln!("Serving {} on port {}", config.root_path, config.port);
    }
    ServerOps::new(deps).start().await.map_err(CliError::from)?;

    let outcome = relay(&mut events).await;

    if ctx.backend.get_status().running {
        ctx.shutdown();
        wait_for_exit(&mut events).await;
    }
    outcome
}

async fn relay(events: &mut Receiver<SupervisorEvent>) -> Result<()> {
    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                eprintln!("Stopping server");
                return Ok(());
            }
            event = events.recv() => match event {
                Ok(event) => {
                    print_event(&event);
                    if let SupervisorEvent::Exit(info) = event {
                        if info.success() {
                            return Ok(());
                        }
                        return Err(CliError::Process(format!("ly-caddy stopped: {info}")).into());
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Output relay fell behind"),
                Err(RecvError::Closed) => return Ok(()),
            }
        }
    }
}

async fn wait_for_exit(events: &mut Receiver<SupervisorEvent>) {
    let waited = timeout(SHUTDOWN_WAIT, async {
        loop {
            match events.recv().await {
                Ok(event @ SupervisorEvent::Exit(_)) => {
                    print_event(&event);
                    return;
                }
                Ok(event) => print_event(&event),
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => return,
            }
        }
    })
    .await;

    if waited.is_err() {
        warn!("Server did not report exit before shutdown");
    }
}
