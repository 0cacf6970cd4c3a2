//! Upload file name sanitization.

/// Reduce an untrusted upload name to a safe file name.
///
/// The name is cut down to its last path component (both `/` and `\` count
/// as separators, whatever the host platform) and every `..` sequence is
/// removed. Returns `None` when nothing usable remains.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned = base.replace("..", "");

    if cleaned.is_empty() || cleaned == "." {
        None
    } else {
        Some(cleaned)
    }
}
