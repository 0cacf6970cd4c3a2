//! The two Caddyfile parameters the panel edits.

use serde::{Deserialize, Serialize};

use crate::settings::DEFAULT_PORT;

/// Document root and listen port as found in (or destined for) the Caddyfile.
///
/// `root_path` may be relative; it is interpreted by the server relative to
/// its own working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Argument of the `root *` directive, empty when the directive is absent.
    pub root_path: String,
    /// Listen port from the first `:<port> {` block.
    pub port: u16,
}

impl ServerConfig {
    /// Create a new `ServerConfig`.
    pub fn new(root_path: impl Into<String>, port: u16) -> Self {
        Self {
            root_path: root_path.into(),
            port,
        }
    }

    /// Build a config from raw UI input.
    ///
    /// The root path gets the same normalization as a write, and the port is
    /// parsed leniently with [`parse_port`](Self::parse_port).
    pub fn from_input(root_path: &str, port: &str) -> Self {
        Self {
            root_path: Self::normalize_root(root_path),
            port: Self::parse_port(port),
        }
    }

    /// Parse user-supplied port text.
    ///
    /// Leading whitespace is ignored and parsing stops at the first non-digit,
    /// so `"8080 "` and `"8080abc"` both yield 8080. Anything that does not
    /// produce a value in `1..=65535` falls back to [`DEFAULT_PORT`].
    pub fn parse_port(input: &str) -> u16 {
        let digits: String = input
            .trim_start()
            .trim_start_matches('+')
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();

        match digits.parse::<u32>() {
            Ok(port) if (1..=u32::from(u16::MAX)).contains(&port) => {
                u16::try_from(port).unwrap_or(DEFAULT_PORT)
            }
            _ => DEFAULT_PORT,
        }
    }

    /// Normalize a root path for writing: forward slashes only, trimmed,
    /// and `./` when nothing was given.
    pub fn normalize_root(root_path: &str) -> String {
        let normalized = root_path.replace('\\', "/");
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            "./".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            port: DEFAULT_PORT,
        }
    }
}
