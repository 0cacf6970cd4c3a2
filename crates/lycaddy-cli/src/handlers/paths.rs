//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use crate::bootstrap::CliConfig;

/// Print every resolved path in `key = value` format.
pub fn execute(config: &CliConfig) {
    println!("{}", config.paths);
}
