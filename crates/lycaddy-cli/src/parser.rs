//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Control panel for the bundled `ly-caddy` static file server.
#[derive(Parser)]
#[command(name = "lycaddy")]
#[command(about = "Configure, run and feed the bundled ly-caddy static file server")]
#[command(version)]
pub struct Cli {
    /// Directory containing ly-caddy and its Caddyfile
    #[arg(long = "caddy-dir", global = true)]
    pub caddy_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
