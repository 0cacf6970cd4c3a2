//! Pure text operations on Caddyfile content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::ServerConfig;
use crate::settings::DEFAULT_PORT;

/// First `:<digits>` immediately followed (modulo whitespace) by `{`.
static PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\d+)(\s*)\{").expect("port pattern is valid"));

/// `root * <path>` at the start of a line. Group 1 is the directive prefix,
/// group 2 the path and group 3 an optional trailing comment.
static ROOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^([ \t]*root[ \t]+\*)[ \t]+([^#\r\n]*?)([ \t]*#[^\r\n]*)?$")
        .expect("root pattern is valid")
});

/// Extract both editable parameters from Caddyfile text.
pub fn parse_config(content: &str) -> ServerConfig {
    ServerConfig::new(parse_root_path(content), parse_port(content))
}

/// Listen port of the first site block, or [`DEFAULT_PORT`].
///
/// A number that does not fit a port also yields the default.
pub fn parse_port(content: &str) -> u16 {
    PORT_RE
        .captures(content)
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Path argument of the first `root *` directive, without any trailing
/// comment or whitespace. Empty when the directive is absent.
pub fn parse_root_path(content: &str) -> String {
    ROOT_RE
        .captures(content)
        .map(|caps| caps[2].trim().to_string())
        .unwrap_or_default()
}

/// Return `content` with the first root directive and first port block
/// rewritten from `config`.
///
/// `config.root_path` is written as given; callers normalize it first.
pub fn apply_config(content: &str, config: &ServerConfig) -> String {
    let with_root = ROOT_RE.replacen(content, 1, |caps: &Captures<'_>| {
        let comment = caps.get(3).map_or("", |m| m.as_str());
        format!("{} {}{}", &caps[1], config.root_path, comment)
    });

    PORT_RE
        .replacen(&with_root, 1, |caps: &Captures<'_>| {
            format!(":{}{}{{", config.port, &caps[2])
        })
        .into_owned()
}
