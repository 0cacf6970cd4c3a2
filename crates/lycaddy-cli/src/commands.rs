//! Commands enum and subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the control panel.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved caddy directory, Caddyfile and executable paths
    Paths,

    /// Read or change the Caddyfile's root directory and port
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// List or upload files in a served directory
    Files {
        #[command(subcommand)]
        command: FilesCommand,
    },

    /// Start the server and relay its output until Ctrl+C
    Serve,

    /// Interactive console for starting, stopping and configuring the server
    Console,
}

/// Config editor command variants.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current root directory and port
    Show {
        /// Print the raw reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update the root directory and/or port (omitted values are kept)
    Set {
        /// New document root (backslashes become forward slashes)
        #[arg(long)]
        root: Option<String>,
        /// New listen port (invalid input falls back to 80)
        #[arg(long)]
        port: Option<String>,
    },
    /// Prompt for a new document root
    Pick,
}

/// File transfer command variants.
#[derive(Subcommand)]
pub enum FilesCommand {
    /// List a directory, directories first
    List {
        /// Directory to list
        dir: String,
        /// Print the raw reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy local files into a directory (existing files are overwritten)
    Upload {
        /// Target directory
        dir: String,
        /// Files to copy
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
