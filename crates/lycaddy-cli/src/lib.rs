//! Command-line front end for the lycaddy control panel.
//!
//! One-shot commands (`paths`, `config`, `files`) run a single panel
//! operation and exit. `serve` and `console` keep the server supervised until
//! the user leaves, then run the shutdown hook.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod console;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod picker;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, ConfigCommand, FilesCommand};
pub use error::CliError;
pub use parser::Cli;
