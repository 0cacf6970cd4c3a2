//! Shared panel backend facade for lycaddy front ends.
//!
//! This crate provides `PanelBackend`, a platform-agnostic orchestration
//! layer that every front end delegates to. Each boundary operation returns a
//! serializable `{ok, ..., error?}` reply so the UI never has to handle a
//! raised error.
//!
//! # Architecture
//!
//! ```text
//! Adapters:          lycaddy-cli
//!                         ↓
//! Facade:            lycaddy-gui
//!                    PanelBackend
//!                     ↓        ↓
//! Runtime:   lycaddy-runtime   │
//!                     ↓        ↓
//! Core:              lycaddy-core
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - No terminal, dialog or window crates
//! 2. **Pure orchestration** - All deps injected via `PanelDeps`
//! 3. **Semantic errors** - Ops return `GuiError`, the backend turns them into replies

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

mod backend;
mod config;
mod deps;
mod dialogs;
mod error;
mod files;
mod server;
pub mod types;

// Primary exports
pub use backend::PanelBackend;
pub use deps::PanelDeps;
pub use error::GuiError;

// Re-export operation modules for direct access if needed
pub use config::ConfigOps;
pub use dialogs::DialogOps;
pub use files::FileOps;
pub use server::ServerOps;
